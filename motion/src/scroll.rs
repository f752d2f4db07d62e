//! Smoothed scroll position.
//!
//! The page never reads the raw scroll offset directly. `target_y` follows
//! the browser; `current_y` chases it by a fixed fraction per frame and snaps
//! once the residual is negligible. Every effect reads `current_y`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{SCROLL_EASE, SNAP_THRESHOLD_PX};
use crate::easing::clamp;
use crate::layout::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub target_y: f64,
    pub current_y: f64,
    /// Fraction of the residual closed per frame, in `(0, 1]`.
    pub ease: f64,
    pub reduced_motion: bool,
}

impl ScrollState {
    /// Start at rest at `y`. Reduced motion disables smoothing.
    #[must_use]
    pub fn new(y: f64, reduced_motion: bool) -> Self {
        let ease = if reduced_motion { 1.0 } else { SCROLL_EASE };
        Self { target_y: y, current_y: y, ease, reduced_motion }
    }

    pub fn set_target(&mut self, y: f64) {
        self.target_y = y;
    }

    /// Advance one frame. Returns the new smoothed position.
    pub fn step(&mut self) -> f64 {
        let delta = self.target_y - self.current_y;
        self.current_y += delta * self.ease;
        if delta.abs() < SNAP_THRESHOLD_PX {
            self.current_y = self.target_y;
        }
        self.current_y
    }

    /// The smoothed position has reached the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.target_y - self.current_y).abs() < f64::EPSILON
    }
}

/// Fraction of the scrollable page above `y`, in `[0, 1]`.
#[must_use]
pub fn page_progress(y: f64, viewport: &Viewport) -> f64 {
    let range = (viewport.doc_height - viewport.height).max(1.0);
    clamp(y / range, 0.0, 1.0)
}
