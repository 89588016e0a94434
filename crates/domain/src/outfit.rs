use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{OutfitId, StyleTags};

const PLACEHOLDER_PREFIX: &str = "/api/placeholder/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn placeholder(width: u32, height: u32) -> Self {
        Self(format!("{PLACEHOLDER_PREFIX}{width}/{height}"))
    }

    /// Width and height encoded in a placeholder reference.
    pub fn placeholder_size(&self) -> Option<(u32, u32)> {
        let rest = self.0.strip_prefix(PLACEHOLDER_PREFIX)?;
        let (width, height) = rest.split_once('/')?;
        let width = width.parse().ok()?;
        let height = height.parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub image: ImageRef,
    pub style_tags: StyleTags,
    pub items_detected: Vec<String>,
    pub created_on: NaiveDate,
}
