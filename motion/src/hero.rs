//! Hero depth layers.
//!
//! Five stacked layers move at different rates as the hero scrolls away and,
//! on wide screens with a fine pointer, shift against the pointer to fake
//! depth. Narrow screens get a gentler scroll-only version; reduced motion
//! gets a still hero.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::consts::AFTER_HERO_PROGRESS;
use crate::easing::{clamp, progress_between};
use crate::layout::Span;
use crate::pointer::PointerState;
use crate::transform::Transform3d;

/// Which hero rendering applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroMode {
    /// Full parallax with pointer depth.
    Wide,
    /// Scroll-only, reduced intensity.
    Narrow,
    /// No motion.
    Static,
}

impl HeroMode {
    #[must_use]
    pub fn select(reduced_motion: bool, narrow: bool) -> Self {
        match (reduced_motion, narrow) {
            (true, _) => Self::Static,
            (false, true) => Self::Narrow,
            (false, false) => Self::Wide,
        }
    }
}

/// Transform plus optional opacity for one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub transform: Transform3d,
    /// `None` leaves the stylesheet's opacity in place.
    pub opacity: Option<f64>,
}

impl LayerStyle {
    fn moved(transform: Transform3d) -> Self {
        Self { transform, opacity: None }
    }

    fn faded(transform: Transform3d, opacity: f64) -> Self {
        Self { transform, opacity: Some(clamp(opacity, 0.0, 1.0)) }
    }
}

/// Styles for every hero layer in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub progress: f64,
    pub media: LayerStyle,
    pub texture: LayerStyle,
    pub content: LayerStyle,
    pub feature: LayerStyle,
    pub accents: LayerStyle,
    /// The page has scrolled meaningfully past the top of the hero.
    pub after_hero: bool,
}

/// Progress of `y` through the hero's own height, in `[0, 1]`.
#[must_use]
pub fn hero_progress(y: f64, hero: Span) -> f64 {
    progress_between(y, hero.top, hero.top + hero.height.max(1.0))
}

/// Compute all layer styles for scroll progress `p` and pointer `m`.
#[must_use]
pub fn hero_frame(p: f64, m: PointerState, mode: HeroMode) -> HeroFrame {
    let after_hero = p > AFTER_HERO_PROGRESS;
    let still = |opacity: f64| LayerStyle::faded(Transform3d::IDENTITY, opacity);

    match mode {
        HeroMode::Static => HeroFrame {
            progress: p,
            media: LayerStyle::moved(Transform3d::IDENTITY),
            texture: LayerStyle::moved(Transform3d::IDENTITY),
            content: still(1.0),
            feature: still(1.0),
            accents: still(1.0),
            after_hero,
        },
        HeroMode::Narrow => HeroFrame {
            progress: p,
            media: LayerStyle::moved(Transform3d::translate(0.0, p * 10.0, -40.0).scaled(1.08)),
            texture: LayerStyle::moved(Transform3d::translate(0.0, -p * 6.0, 14.0).scaled(1.03)),
            content: LayerStyle::faded(Transform3d::translate(0.0, -p * 16.0, 36.0), 1.0 - p * 0.72),
            feature: still(1.0 - p * 0.25),
            accents: still(0.0),
            after_hero,
        },
        HeroMode::Wide => HeroFrame {
            progress: p,
            media: LayerStyle::moved(
                Transform3d::translate(m.x * -24.0, m.y * -10.0 + p * 24.0, -120.0).scaled(1.22),
            ),
            texture: LayerStyle::moved(Transform3d::translate(m.x * 12.0, m.y * 8.0 - p * 16.0, 20.0).scaled(1.05)),
            content: LayerStyle::faded(
                Transform3d::translate(m.x * 14.0, m.y * 10.0 - p * 38.0, 80.0),
                1.0 - p * 1.05,
            ),
            feature: LayerStyle::faded(
                Transform3d::translate(m.x * -8.0, m.y * 8.0 - p * 26.0, 180.0).scaled(1.0 - p * 0.07),
                1.0 - p * 0.92,
            ),
            accents: LayerStyle::faded(
                Transform3d::translate(m.x * 20.0, m.y * 16.0 - p * 20.0, 160.0),
                1.0 - p * 0.9,
            ),
            after_hero,
        },
    }
}
