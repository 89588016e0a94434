use std::path::PathBuf;

use stylepocket_domain::{GroupMode, ItemCategory, ItemId, OutfitId, StyleTag};

#[derive(Debug, Clone, Default)]
pub struct ListOutfitsQuery;

#[derive(Debug, Clone, Default)]
pub struct ListShoppingItemsQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupShoppingListQuery {
    pub mode: GroupMode,
}

#[derive(Debug, Clone)]
pub struct ToggleItemStatusCommand {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Default)]
pub struct StyleStatsQuery;

#[derive(Debug, Clone, Copy)]
pub struct DashboardQuery {
    pub top_n: usize,
    pub monthly_budget: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BeginUploadCommand;

#[derive(Debug, Clone, Default)]
pub struct PollUploadCommand;

#[derive(Debug, Clone, Copy)]
pub struct EditCandidateTagCommand {
    pub tag: StyleTag,
}

#[derive(Debug, Clone, Copy)]
pub struct AddDetectedItemCommand {
    pub detected_index: usize,
    pub category: ItemCategory,
}

#[derive(Debug, Clone, Default)]
pub struct SaveUploadCommand;

#[derive(Debug, Clone, Default)]
pub struct CancelUploadCommand;

#[derive(Debug, Clone)]
pub struct RenderThumbnailCommand {
    pub outfit_id: OutfitId,
    pub target: PathBuf,
    pub max_edge: u32,
}
