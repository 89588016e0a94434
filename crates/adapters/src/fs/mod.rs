mod clock;
mod thumbs;

pub use clock::SystemClock;
pub use thumbs::PlaceholderThumbnailRenderer;
