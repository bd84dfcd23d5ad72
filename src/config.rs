//! Canvas configuration.
//!
//! Every field has a default taken from [`crate::constants`], so a config file
//! only needs to mention the values it overrides:
//!
//! ```json
//! { "canvas_width": 8000.0, "max_zoom": 3.0 }
//! ```

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::geometry::CanvasLimits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunable parameters of one canvas view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub min_element_size: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Resize handle band in screen pixels
    pub resize_tolerance: f32,
    /// Padding around content for zoom-to-fit, in canvas units
    pub fit_padding: f32,
    /// Minimum interval between processed resize moves
    pub resize_throttle_ms: u64,
    pub text_default_content: String,
    pub text_default_width: f32,
    pub text_default_height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            min_element_size: MIN_ELEMENT_SIZE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            resize_tolerance: RESIZE_TOLERANCE,
            fit_padding: FIT_PADDING,
            resize_throttle_ms: RESIZE_THROTTLE_MS,
            text_default_content: TEXT_DEFAULT_CONTENT.to_string(),
            text_default_width: TEXT_DEFAULT_WIDTH,
            text_default_height: TEXT_DEFAULT_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded canvas config");
        Ok(config)
    }

    /// Check that the values describe a usable canvas.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_element_size > 0.0) {
            return Err(ConfigError::from("min_element_size must be positive"));
        }
        if self.canvas_width < self.min_element_size || self.canvas_height < self.min_element_size {
            return Err(format!(
                "canvas {}x{} is smaller than the minimum element size {}",
                self.canvas_width, self.canvas_height, self.min_element_size
            )
            .into());
        }
        if !(self.min_zoom > 0.0) || self.min_zoom > self.max_zoom {
            return Err(format!(
                "zoom range [{}, {}] is empty or not positive",
                self.min_zoom, self.max_zoom
            )
            .into());
        }
        if self.resize_tolerance < 0.0 || self.fit_padding < 0.0 {
            return Err(ConfigError::from("tolerance and padding must not be negative"));
        }
        if self.text_default_width < self.min_element_size
            || self.text_default_height < self.min_element_size
        {
            return Err(ConfigError::from(
                "default text size is below the minimum element size",
            ));
        }
        Ok(())
    }

    /// Replace values `validate` would reject with the nearest usable ones.
    ///
    /// Unusable sizes fall back to the defaults or are raised to the minimum
    /// element size, and an inverted zoom range is swapped.
    pub fn sanitized(mut self) -> Self {
        if !(self.min_element_size > 0.0 && self.min_element_size.is_finite()) {
            self.min_element_size = MIN_ELEMENT_SIZE;
        }
        let min_size = self.min_element_size;
        self.canvas_width = self.canvas_width.max(min_size);
        self.canvas_height = self.canvas_height.max(min_size);

        if !(self.min_zoom > 0.0 && self.min_zoom.is_finite()) {
            self.min_zoom = MIN_ZOOM;
        }
        if !(self.max_zoom > 0.0) {
            self.max_zoom = MAX_ZOOM;
        }
        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }

        self.resize_tolerance = self.resize_tolerance.max(0.0);
        self.fit_padding = self.fit_padding.max(0.0);
        self.text_default_width = self.text_default_width.max(min_size);
        self.text_default_height = self.text_default_height.max(min_size);
        self
    }

    /// Limits used by `constrain_to_bounds`.
    pub fn limits(&self) -> CanvasLimits {
        CanvasLimits {
            width: self.canvas_width,
            height: self.canvas_height,
            min_size: self.min_element_size,
        }
    }

    pub fn resize_throttle(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }
}
