//! Timing instrumentation for the interaction hot paths.
//!
//! Pointer moves arrive at display rate, so the handlers must stay well under
//! one frame. Scoped timers report anything slower than their threshold.
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! notus = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move(&mut self, event: &PointerEvent) {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// One frame at 60 FPS. Pointer move handling warns past this.
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` without an explicit threshold.
pub const PROFILE_THRESHOLD_MS: f64 = 1.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// A scoped timer that reports its duration on drop when it ran longer than
/// its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the low profiling threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILE_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}
