use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleTag {
    Korean,
    Vintage,
    Minimalist,
    Western,
    Japanese,
    #[serde(rename = "Y2K")]
    Y2k,
    Business,
    Street,
}

impl StyleTag {
    pub const ALL: [StyleTag; 8] = [
        StyleTag::Korean,
        StyleTag::Vintage,
        StyleTag::Minimalist,
        StyleTag::Western,
        StyleTag::Japanese,
        StyleTag::Y2k,
        StyleTag::Business,
        StyleTag::Street,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Korean => "Korean",
            Self::Vintage => "Vintage",
            Self::Minimalist => "Minimalist",
            Self::Western => "Western",
            Self::Japanese => "Japanese",
            Self::Y2k => "Y2K",
            Self::Business => "Business",
            Self::Street => "Street",
        }
    }
}

impl Display for StyleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StyleTag {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownStyleTag(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    Top,
    Bottom,
    Outerwear,
    Shoes,
    Accessories,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Top,
        ItemCategory::Bottom,
        ItemCategory::Outerwear,
        ItemCategory::Shoes,
        ItemCategory::Accessories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Outerwear => "Outerwear",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessories",
        }
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownCategory(value.to_string()))
    }
}

/// Ordered set of style tags. Re-inserting a tag keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StyleTag>", into = "Vec<StyleTag>")]
pub struct StyleTags(Vec<StyleTag>);

impl StyleTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the tag was already present.
    pub fn insert(&mut self, tag: StyleTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn remove(&mut self, tag: StyleTag) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: StyleTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn first(&self) -> Option<StyleTag> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleTag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[StyleTag] {
        &self.0
    }
}

impl FromIterator<StyleTag> for StyleTags {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

impl From<Vec<StyleTag>> for StyleTags {
    fn from(value: Vec<StyleTag>) -> Self {
        value.into_iter().collect()
    }
}

impl From<StyleTags> for Vec<StyleTag> {
    fn from(value: StyleTags) -> Self {
        value.0
    }
}

impl<const N: usize> From<[StyleTag; N]> for StyleTags {
    fn from(value: [StyleTag; N]) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tags_parse_case_insensitively() {
        assert_eq!("vintage".parse::<StyleTag>(), Ok(StyleTag::Vintage));
        assert_eq!("#Y2K".parse::<StyleTag>(), Ok(StyleTag::Y2k));
        assert!(matches!(
            "grunge".parse::<StyleTag>(),
            Err(DomainError::UnknownStyleTag(_))
        ));
    }

    #[test]
    fn categories_parse_by_label() {
        assert_eq!("shoes".parse::<ItemCategory>(), Ok(ItemCategory::Shoes));
        assert!(matches!(
            "hats".parse::<ItemCategory>(),
            Err(DomainError::UnknownCategory(_))
        ));
    }

    #[test]
    fn tag_set_ignores_duplicates_and_keeps_order() {
        let mut tags = StyleTags::from([StyleTag::Korean, StyleTag::Minimalist, StyleTag::Korean]);
        assert_eq!(tags.as_slice(), &[StyleTag::Korean, StyleTag::Minimalist]);

        assert!(!tags.insert(StyleTag::Korean));
        assert!(tags.insert(StyleTag::Y2k));
        assert!(tags.remove(StyleTag::Korean));
        assert!(!tags.remove(StyleTag::Korean));
        assert_eq!(tags.first(), Some(StyleTag::Minimalist));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn tag_set_deserializes_without_duplicates() {
        let tags: StyleTags =
            serde_json::from_str(r#"["Vintage","Y2K","Vintage"]"#).expect("valid json");
        assert_eq!(tags.as_slice(), &[StyleTag::Vintage, StyleTag::Y2k]);
        assert_eq!(
            serde_json::to_string(&tags).expect("serialize"),
            r#"["Vintage","Y2K"]"#
        );
    }
}
