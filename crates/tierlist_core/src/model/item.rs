//! Item domain model.
//!
//! # Responsibility
//! - Define the placeable unit shared by the pool and every tier row.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - Text colors are assigned once at creation and never regenerated.
//! - Location is not stored on the item; containers own items.

use crate::color::pair::ColorPair;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one item.
pub type ItemId = Uuid;

/// Embeddable image reference produced by the host (data URI, object URL...).
///
/// Opaque to the core: never parsed, never logged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ImageRef {
    // Data URIs can be megabytes long; print only the length.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageRef({} bytes)", self.0.len())
    }
}

/// Item payload, one case per item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Uploaded picture.
    Image { image: ImageRef },
    /// Short text snippet with its fixed color pair.
    Text { title: String, colors: ColorPair },
}

/// One placeable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn image(id: ItemId, image: ImageRef) -> Self {
        Self {
            id,
            kind: ItemKind::Image { image },
        }
    }

    pub fn text(id: ItemId, title: impl Into<String>, colors: ColorPair) -> Self {
        Self {
            id,
            kind: ItemKind::Text {
                title: title.into(),
                colors,
            },
        }
    }

    /// Returns the text title, or `None` for image items.
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Text { title, .. } => Some(title.as_str()),
            ItemKind::Image { .. } => None,
        }
    }

    /// Short kind tag used in logs and listings.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ItemKind::Image { .. } => "image",
            ItemKind::Text { .. } => "text",
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ItemKind::Text { title, .. } => write!(f, "\"{title}\""),
            ItemKind::Image { image } => write!(f, "[image {} bytes]", image.as_str().len()),
        }
    }
}
