mod dashboard;
mod error;
mod ports;
mod service;
mod upload;
mod use_cases;

pub use dashboard::{budget_summary, style_bars, BudgetSummary, Dashboard, StyleBar};
pub use error::ApplicationError;
pub use ports::{
    AnalysisPipeline, AnalysisReport, AnalysisRequest, Clock, ThumbnailArtifact,
    ThumbnailRenderer, WardrobeRepository,
};
pub use service::{ApplicationService, MAX_THUMBNAIL_EDGE};
pub use upload::{UploadFlow, UploadStep};
pub use use_cases::{
    AddDetectedItemCommand, BeginUploadCommand, CancelUploadCommand, DashboardQuery,
    EditCandidateTagCommand, GroupShoppingListQuery, ListOutfitsQuery, ListShoppingItemsQuery,
    PollUploadCommand, RenderThumbnailCommand, SaveUploadCommand, StyleStatsQuery,
    ToggleItemStatusCommand,
};
