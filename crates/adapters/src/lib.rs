pub mod analysis;
pub mod fs;
pub mod memory;
pub mod presenters;

pub use analysis::{BackgroundAnalysisPipeline, RandomStyleAnalyzer, StyleAnalyzer};
pub use fs::{PlaceholderThumbnailRenderer, SystemClock};
pub use memory::InMemoryWardrobe;
pub use presenters::{
    present_budget, present_candidate, present_gallery_headline, present_group_header,
    present_insight, present_item_row, present_outfit_row, present_style_bar, present_tags,
    present_thumbnail, EMPTY_SHOPPING_LIST,
};
