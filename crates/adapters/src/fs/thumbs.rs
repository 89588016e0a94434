use std::fs;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb};
use stylepocket_application::{
    ApplicationError, ThumbnailArtifact, ThumbnailRenderer, MAX_THUMBNAIL_EDGE,
};
use stylepocket_domain::{Outfit, StyleTag};

const NEUTRAL_SWATCH: Rgb<u8> = Rgb([214, 211, 209]);

/// Stands in for the placeholder image service: a swatch in the leading
/// tag's colour with a band for the second tag.
#[derive(Debug, Default)]
pub struct PlaceholderThumbnailRenderer;

impl ThumbnailRenderer for PlaceholderThumbnailRenderer {
    fn render_placeholder(
        &self,
        outfit: &Outfit,
        target: &Path,
        max_edge: u32,
    ) -> Result<ThumbnailArtifact, ApplicationError> {
        if max_edge == 0 || max_edge > MAX_THUMBNAIL_EDGE {
            return Err(ApplicationError::InvalidInput(format!(
                "thumbnail edge {max_edge} outside 1..={MAX_THUMBNAIL_EDGE}"
            )));
        }
        let (source_width, source_height) = outfit.image.placeholder_size().ok_or_else(|| {
            ApplicationError::InvalidInput(format!(
                "outfit {} does not use a placeholder image: {}",
                outfit.id,
                outfit.image.as_str()
            ))
        })?;
        let (width, height) = fit_within(source_width, source_height, max_edge);

        let mut tags = outfit.style_tags.iter();
        let base = tags.next().map_or(NEUTRAL_SWATCH, swatch_color);
        let band = tags.next().map_or(base, swatch_color);
        let band_top = height - height / 5;

        let swatch = ImageBuffer::from_fn(width, height, |_x, y| {
            if y >= band_top {
                band
            } else {
                base
            }
        });

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }
        swatch
            .save_with_format(target, ImageFormat::Png)
            .map_err(|error| ApplicationError::Render(error.to_string()))?;

        tracing::debug!(outfit_id = %outfit.id, width, height, "rendered placeholder thumbnail");
        Ok(ThumbnailArtifact {
            file_path: target.to_string_lossy().to_string(),
            width,
            height,
        })
    }
}

fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let scale = f64::from(max_edge) / f64::from(width.max(height));
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

fn swatch_color(tag: StyleTag) -> Rgb<u8> {
    match tag {
        StyleTag::Korean => Rgb([231, 219, 201]),
        StyleTag::Vintage => Rgb([156, 102, 68]),
        StyleTag::Minimalist => Rgb([245, 245, 244]),
        StyleTag::Western => Rgb([41, 37, 36]),
        StyleTag::Japanese => Rgb([120, 113, 108]),
        StyleTag::Y2k => Rgb([244, 114, 182]),
        StyleTag::Business => Rgb([30, 58, 138]),
        StyleTag::Street => Rgb([234, 88, 12]),
    }
}
