mod error;
mod grouping;
mod ids;
mod outfit;
mod shopping;
mod stats;
mod tag;

pub use error::DomainError;
pub use grouping::{group_shopping_items, GroupKey, GroupMode, ShoppingGroups};
pub use ids::{ItemId, OutfitId};
pub use outfit::{ImageRef, Outfit};
pub use shopping::{Price, PurchaseStatus, ShoppingItem};
pub use stats::{aggregate_style_tags, total_tag_mentions, StyleTagCount};
pub use tag::{ItemCategory, StyleTag, StyleTags};
