//! Engine-wide constants.
//!
//! Centralizes magic numbers for the canvas geometry and input handling.
//! `CanvasConfig::default()` is built from these values.

// ============================================================================
// Canvas Geometry
// ============================================================================

/// Width of the logical canvas in canvas units
pub const CANVAS_WIDTH: f32 = 5000.0;

/// Height of the logical canvas in canvas units
pub const CANVAS_HEIGHT: f32 = 5000.0;

/// Minimum width and height of any element
pub const MIN_ELEMENT_SIZE: f32 = 50.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom multiplier for one wheel notch towards the user (zoom in)
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Zoom multiplier for one wheel notch away from the user (zoom out)
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Padding around the content bounding box for zoom-to-fit, in canvas units
pub const FIT_PADDING: f32 = 50.0;

/// Pixels per line for line-based scroll deltas
pub const SCROLL_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Resize handle tolerance band in screen pixels
pub const RESIZE_TOLERANCE: f32 = 5.0;

/// Minimum interval between two processed resize moves, in milliseconds
pub const RESIZE_THROTTLE_MS: u64 = 16;

// ============================================================================
// Item Defaults
// ============================================================================

/// Content of a text box created by double-click
pub const TEXT_DEFAULT_CONTENT: &str = "New Text";

/// Width of a text box created by double-click
pub const TEXT_DEFAULT_WIDTH: f32 = 200.0;

/// Height of a text box created by double-click
pub const TEXT_DEFAULT_HEIGHT: f32 = 100.0;

/// Default size for image media from the uploader
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (300.0, 200.0);

/// Default size for PDF media from the uploader
pub const DEFAULT_PDF_SIZE: (f32, f32) = (250.0, 180.0);
