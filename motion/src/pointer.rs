//! Normalized pointer position over the hero.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::easing::clamp;
use crate::layout::Rect;

/// Pointer offset from the element center, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Normalize a viewport-space pointer position against `bounds`.
    /// Zero-sized bounds yield the center.
    #[must_use]
    pub fn within(bounds: Rect, client_x: f64, client_y: f64) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::CENTER;
        }
        let nx = ((client_x - bounds.left) / bounds.width - 0.5) * 2.0;
        let ny = ((client_y - bounds.top) / bounds.height - 0.5) * 2.0;
        Self { x: clamp(nx, -1.0, 1.0), y: clamp(ny, -1.0, 1.0) }
    }

    pub fn reset(&mut self) {
        *self = Self::CENTER;
    }
}
