//! Parallax media and tilt cards.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{PARALLAX_DAMPING, PARALLAX_DEFAULT_SPEED, PARALLAX_MARGIN_PX, PARALLAX_SCALE, TILT_MAX_DEG};
use crate::layout::Rect;
use crate::transform::{Transform3d, fixed};

/// Parse a `data-parallax` speed, falling back to the default.
#[must_use]
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .unwrap_or(PARALLAX_DEFAULT_SPEED)
}

/// Transform for a parallax element whose viewport rect is `rect`.
///
/// Returns `None` when the element is further than the margin outside the
/// viewport; its last transform is then left untouched.
#[must_use]
pub fn parallax_transform(rect: Rect, viewport_height: f64, speed: f64) -> Option<Transform3d> {
    if rect.bottom() < -PARALLAX_MARGIN_PX || rect.top > viewport_height + PARALLAX_MARGIN_PX {
        return None;
    }
    let from_center = rect.top - viewport_height * 0.5;
    let y = -from_center * speed * PARALLAX_DAMPING;
    Some(Transform3d::translate(0.0, y, 0.0).scaled(PARALLAX_SCALE))
}

/// Card rotation in degrees, written to the `--rx` / `--ry` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rx: f64,
    pub ry: f64,
}

impl Tilt {
    pub const FLAT: Self = Self { rx: 0.0, ry: 0.0 };

    /// Tilt toward a pointer at viewport position (`client_x`, `client_y`).
    #[must_use]
    pub fn toward(card: Rect, client_x: f64, client_y: f64) -> Self {
        if card.width <= 0.0 || card.height <= 0.0 {
            return Self::FLAT;
        }
        let rel_x = (client_x - card.left) / card.width - 0.5;
        let rel_y = (client_y - card.top) / card.height - 0.5;
        Self { rx: rel_y * -TILT_MAX_DEG, ry: rel_x * TILT_MAX_DEG }
    }

    #[must_use]
    pub fn rx_css(&self) -> String {
        format!("{}deg", fixed(self.rx, 3))
    }

    #[must_use]
    pub fn ry_css(&self) -> String {
        format!("{}deg", fixed(self.ry, 3))
    }
}
