use serde::Serialize;
use stylepocket_adapters::{
    present_budget, present_candidate, present_gallery_headline, present_group_header,
    present_insight, present_item_row, present_outfit_row, present_style_bar,
    EMPTY_SHOPPING_LIST,
};
use stylepocket_application::Dashboard;
use stylepocket_domain::{GroupMode, Outfit, ShoppingGroups, ShoppingItem};

#[derive(Debug, Serialize)]
pub struct GroupView<'a> {
    pub key: String,
    pub items: &'a [ShoppingItem],
}

/// JSON object keys must be strings, so groups are emitted as an ordered list.
pub fn group_views(groups: &ShoppingGroups) -> Vec<GroupView<'_>> {
    groups
        .iter()
        .map(|(key, items)| GroupView {
            key: key.to_string(),
            items,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub candidate: Outfit,
    pub added_items: Vec<ShoppingItem>,
    pub saved: bool,
    pub outfit_count: usize,
}

pub fn render_gallery(outfits: &[Outfit]) -> String {
    let mut lines = vec![present_gallery_headline(outfits.len())];
    lines.extend(outfits.iter().map(present_outfit_row));
    lines.join("\n")
}

pub fn render_shopping(groups: &ShoppingGroups, mode: GroupMode) -> String {
    if groups.is_empty() {
        return EMPTY_SHOPPING_LIST.to_string();
    }

    let mut lines = Vec::new();
    for (key, items) in groups {
        lines.push(present_group_header(key, items.len()));
        lines.extend(items.iter().map(|item| present_item_row(item, mode)));
    }
    lines.join("\n")
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut lines = vec!["Your style DNA".to_string()];
    if dashboard.favourite.is_none() {
        lines.push("no style tags yet".to_string());
    }
    lines.extend(dashboard.bars.iter().map(present_style_bar));
    lines.extend(present_insight(dashboard.favourite));
    lines.push(present_budget(&dashboard.budget));
    lines.join("\n")
}

pub fn render_upload(outcome: &UploadOutcome) -> String {
    let mut lines = vec![present_candidate(&outcome.candidate)];
    for item in &outcome.added_items {
        lines.push(format!("added {} ({}) to the shopping list", item.name, item.category));
    }
    if outcome.saved {
        lines.push(format!(
            "saved to wardrobe; gallery now has {} outfits",
            outcome.outfit_count
        ));
    } else {
        lines.push("upload discarded".to_string());
    }
    lines.join("\n")
}
