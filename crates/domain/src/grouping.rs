use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{DomainError, ItemCategory, PurchaseStatus, ShoppingItem, StyleTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    #[default]
    ByCategory,
    ByStyle,
}

impl FromStr for GroupMode {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "category" | "by-category" => Ok(Self::ByCategory),
            "style" | "by-style" => Ok(Self::ByStyle),
            _ => Err(DomainError::UnknownGroupMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Category(ItemCategory),
    Style(StyleTag),
    Uncategorized,
}

impl GroupKey {
    pub fn for_item(item: &ShoppingItem, mode: GroupMode) -> Self {
        match mode {
            GroupMode::ByCategory => Self::Category(item.category),
            GroupMode::ByStyle => item
                .style_tags
                .first()
                .map_or(Self::Uncategorized, Self::Style),
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{category}"),
            Self::Style(tag) => write!(f, "#{tag}"),
            Self::Uncategorized => f.write_str("uncategorized"),
        }
    }
}

pub type ShoppingGroups = IndexMap<GroupKey, Vec<ShoppingItem>>;

/// Partitions items by `mode`. Groups appear in first-seen order; inside a
/// group to-buy items come before bought ones, each keeping input order.
pub fn group_shopping_items(items: &[ShoppingItem], mode: GroupMode) -> ShoppingGroups {
    let mut groups = ShoppingGroups::new();
    for item in items {
        groups
            .entry(GroupKey::for_item(item, mode))
            .or_default()
            .push(item.clone());
    }

    for members in groups.values_mut() {
        members.sort_by_key(|item| match item.status {
            PurchaseStatus::ToBuy => 0,
            PurchaseStatus::Bought => 1,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{ItemId, Price, StyleTags};

    fn item(
        id: &str,
        category: ItemCategory,
        tags: &[StyleTag],
        status: PurchaseStatus,
    ) -> ShoppingItem {
        ShoppingItem {
            id: ItemId::new(id).expect("id"),
            name: format!("item {id}"),
            price: Price::new(10.0).expect("price"),
            category,
            style_tags: tags.iter().copied().collect::<StyleTags>(),
            status,
            link: None,
        }
    }

    fn ids(items: &[ShoppingItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_shopping_items(&[], GroupMode::ByCategory).is_empty());
        assert!(group_shopping_items(&[], GroupMode::ByStyle).is_empty());
    }

    #[test]
    fn to_buy_items_come_first_within_a_category() {
        let items = vec![
            item("1", ItemCategory::Top, &[], PurchaseStatus::Bought),
            item("2", ItemCategory::Top, &[], PurchaseStatus::ToBuy),
        ];

        let groups = group_shopping_items(&items, GroupMode::ByCategory);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[&GroupKey::Category(ItemCategory::Top)]), vec!["2", "1"]);
    }

    #[test]
    fn style_mode_uses_leading_tag_or_uncategorized() {
        let items = vec![
            item(
                "1",
                ItemCategory::Top,
                &[StyleTag::Vintage, StyleTag::Japanese],
                PurchaseStatus::ToBuy,
            ),
            item("2", ItemCategory::Shoes, &[], PurchaseStatus::ToBuy),
            item("3", ItemCategory::Bottom, &[StyleTag::Vintage], PurchaseStatus::Bought),
        ];

        let groups = group_shopping_items(&items, GroupMode::ByStyle);
        let keys: Vec<GroupKey> = groups.keys().copied().collect();
        assert_eq!(
            keys,
            vec![GroupKey::Style(StyleTag::Vintage), GroupKey::Uncategorized]
        );
        assert_eq!(ids(&groups[&GroupKey::Style(StyleTag::Vintage)]), vec!["1", "3"]);
        assert_eq!(ids(&groups[&GroupKey::Uncategorized]), vec!["2"]);
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let items = vec![
            item("1", ItemCategory::Shoes, &[], PurchaseStatus::ToBuy),
            item("2", ItemCategory::Top, &[], PurchaseStatus::ToBuy),
            item("3", ItemCategory::Shoes, &[], PurchaseStatus::ToBuy),
        ];

        let groups = group_shopping_items(&items, GroupMode::ByCategory);
        let keys: Vec<String> = groups.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["Shoes", "Top"]);
    }

    #[test]
    fn group_mode_parses_cli_spellings() {
        assert_eq!("style".parse::<GroupMode>(), Ok(GroupMode::ByStyle));
        assert_eq!("by-category".parse::<GroupMode>(), Ok(GroupMode::ByCategory));
        assert!("price".parse::<GroupMode>().is_err());
    }

    fn item_strategy() -> impl Strategy<Value = (ItemCategory, Vec<StyleTag>, bool)> {
        (
            prop::sample::select(ItemCategory::ALL.to_vec()),
            prop::collection::vec(prop::sample::select(StyleTag::ALL.to_vec()), 0..3),
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn grouping_partitions_items_stably(
            entries in prop::collection::vec(item_strategy(), 0..20),
            by_style in any::<bool>(),
        ) {
            let items: Vec<ShoppingItem> = entries
                .iter()
                .enumerate()
                .map(|(index, (category, tags, bought))| {
                    let status = if *bought {
                        PurchaseStatus::Bought
                    } else {
                        PurchaseStatus::ToBuy
                    };
                    item(&index.to_string(), *category, tags, status)
                })
                .collect();
            let mode = if by_style { GroupMode::ByStyle } else { GroupMode::ByCategory };

            let groups = group_shopping_items(&items, mode);
            let total: usize = groups.values().map(Vec::len).sum();
            prop_assert_eq!(total, items.len());

            for (key, members) in &groups {
                for member in members {
                    prop_assert_eq!(GroupKey::for_item(member, mode), *key);
                }

                let first_bought = members.iter().position(ShoppingItem::is_bought);
                if let Some(split) = first_bought {
                    prop_assert!(members[split..].iter().all(ShoppingItem::is_bought));
                }

                let position = |member: &ShoppingItem| {
                    items.iter().position(|candidate| candidate.id == member.id)
                };
                for status in [PurchaseStatus::ToBuy, PurchaseStatus::Bought] {
                    let order: Vec<_> = members
                        .iter()
                        .filter(|member| member.status == status)
                        .map(position)
                        .collect();
                    prop_assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
                }
            }
        }
    }
}
