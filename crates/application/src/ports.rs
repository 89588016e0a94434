use std::path::Path;

use chrono::NaiveDate;
use stylepocket_domain::{
    ImageRef, ItemId, Outfit, OutfitId, PurchaseStatus, ShoppingItem, StyleTags,
};

use crate::ApplicationError;

pub trait WardrobeRepository {
    fn list_outfits(&self) -> Result<Vec<Outfit>, ApplicationError>;

    fn find_outfit(&self, outfit_id: &OutfitId) -> Result<Option<Outfit>, ApplicationError>;

    /// Newest outfits are shown first, so saved outfits go to the front.
    fn prepend_outfit(&self, outfit: Outfit) -> Result<(), ApplicationError>;

    fn list_shopping_items(&self) -> Result<Vec<ShoppingItem>, ApplicationError>;

    fn append_shopping_item(&self, item: ShoppingItem) -> Result<(), ApplicationError>;

    /// Returns the new status, or `None` when no item has this id.
    fn toggle_item_status(
        &self,
        item_id: &ItemId,
    ) -> Result<Option<PurchaseStatus>, ApplicationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub ticket: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub ticket: u64,
    pub image: ImageRef,
    pub style_tags: StyleTags,
    pub items_detected: Vec<String>,
}

pub trait AnalysisPipeline {
    fn submit_analysis(&self, request: AnalysisRequest) -> Result<(), ApplicationError>;

    fn try_receive_analysis(&self) -> Result<Option<AnalysisReport>, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailArtifact {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
}

pub trait ThumbnailRenderer {
    fn render_placeholder(
        &self,
        outfit: &Outfit,
        target: &Path,
        max_edge: u32,
    ) -> Result<ThumbnailArtifact, ApplicationError>;
}

pub trait Clock {
    fn now_timestamp_millis(&self) -> i64;

    fn today(&self) -> NaiveDate;
}
