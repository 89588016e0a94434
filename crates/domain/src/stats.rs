use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Outfit, ShoppingItem, StyleTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTagCount {
    pub tag: StyleTag,
    pub count: usize,
}

/// Counts tag mentions across outfits, then shopping items, and ranks them by
/// descending count. Equal counts keep the order in which the tag was first seen.
pub fn aggregate_style_tags(outfits: &[Outfit], items: &[ShoppingItem]) -> Vec<StyleTagCount> {
    let mentions = outfits
        .iter()
        .flat_map(|outfit| outfit.style_tags.iter())
        .chain(items.iter().flat_map(|item| item.style_tags.iter()));

    let mut counts: IndexMap<StyleTag, usize> = IndexMap::new();
    for tag in mentions {
        *counts.entry(tag).or_insert(0) += 1;
    }

    let mut ranked: Vec<StyleTagCount> = counts
        .into_iter()
        .map(|(tag, count)| StyleTagCount { tag, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

pub fn total_tag_mentions(outfits: &[Outfit], items: &[ShoppingItem]) -> usize {
    outfits.iter().map(|outfit| outfit.style_tags.len()).sum::<usize>()
        + items.iter().map(|item| item.style_tags.len()).sum::<usize>()
}
