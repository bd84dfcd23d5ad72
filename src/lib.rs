//! Notus canvas interaction engine.
//!
//! Turns raw pointer, wheel and key events into edits of a page of placed
//! elements (text boxes and embedded media) on a fixed-size, zoomable,
//! pannable canvas.
//!
//! ## Layout
//!
//! - `geometry` / `view` - coordinate math and the zoom + pan transform
//! - `types` - element model
//! - `canvas` - the [`Canvas`] view and its element operations
//! - `input` - gesture state machine and event handlers
//! - `host` - traits the embedding UI implements
//! - `notebook` - in-memory category/page store
//! - `config` / `error` / `logging` / `perf` - ambient plumbing

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod notebook;
pub mod perf;
pub mod spatial_index;
pub mod types;
pub mod view;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Bounds, CanvasLimits, Point, Rect, point};
pub use host::{CanvasHost, ContainerMeasure, ElementStore, IdAllocator, PointerCapture, StaticHost, VecStore};
pub use input::{InputState, ResizeHandle};
pub use notebook::{Category, Notebook};
pub use types::{Element, ElementId, ElementKind, MediaDescriptor, MediaType};
pub use view::ViewTransform;
