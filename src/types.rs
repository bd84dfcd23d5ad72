//! Core types for the canvas element model.
//!
//! An [`Element`] is one placed object on a page: a text box or an embedded
//! media item. Positions and sizes are in canvas units.

use crate::constants::{DEFAULT_IMAGE_SIZE, DEFAULT_PDF_SIZE};
use crate::geometry::{Point, Rect, point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page-scoped element identifier, allocated by an `IdAllocator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of embedded media
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Pdf,
}

impl MediaType {
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Image => "IMAGE",
            MediaType::Pdf => "PDF",
        }
    }

    /// Images keep their aspect ratio while being resized; PDFs do not.
    pub fn preserves_aspect_ratio(&self) -> bool {
        matches!(self, MediaType::Image)
    }
}

/// Variant-specific content of an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text {
        content: String,
    },
    Media {
        media_type: MediaType,
        /// URL or embedded data reference
        src: String,
        name: String,
    },
}

/// A placed object on a canvas page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub is_editing: bool,
}

impl Element {
    pub fn text(id: ElementId, content: impl Into<String>, rect: Rect) -> Self {
        Self::with_kind(id, ElementKind::Text { content: content.into() }, rect)
    }

    pub fn media(id: ElementId, media: &MediaDescriptor, origin: Point) -> Self {
        Self::with_kind(
            id,
            ElementKind::Media {
                media_type: media.media_type,
                src: media.src.clone(),
                name: media.name.clone(),
            },
            Rect::new(origin.x, origin.y, media.width, media.height),
        )
    }

    fn with_kind(id: ElementId, kind: ElementKind, rect: Rect) -> Self {
        Self {
            id,
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            is_editing: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        point(self.x, self.y)
    }

    /// Write position and size in one step.
    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    pub fn media_type(&self) -> Option<MediaType> {
        match &self.kind {
            ElementKind::Media { media_type, .. } => Some(*media_type),
            ElementKind::Text { .. } => None,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content } => Some(content),
            ElementKind::Media { .. } => None,
        }
    }

    /// Width over height, for media that resize proportionally.
    pub fn locked_aspect_ratio(&self) -> Option<f32> {
        match self.media_type() {
            Some(media) if media.preserves_aspect_ratio() && self.height > 0.0 => {
                Some(self.width / self.height)
            }
            _ => None,
        }
    }
}

/// A fully formed media item handed over by the media ingestion layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub media_type: MediaType,
    pub src: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
}

impl MediaDescriptor {
    pub fn image(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Image,
            src: src.into(),
            name: name.into(),
            width: DEFAULT_IMAGE_SIZE.0,
            height: DEFAULT_IMAGE_SIZE.1,
        }
    }

    pub fn pdf(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Pdf,
            src: src.into(),
            name: name.into(),
            width: DEFAULT_PDF_SIZE.0,
            height: DEFAULT_PDF_SIZE.1,
        }
    }
}
