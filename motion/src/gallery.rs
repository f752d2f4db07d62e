//! Pinned horizontal gallery.
//!
//! While the pinned section scrolls by, vertical progress becomes horizontal
//! travel of the track. Progress goes through a cubic ease so the track
//! starts and stops gently; each item bobs on a sine wave offset by index.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::f64::consts::PI;

use crate::consts::{GALLERY_WAVE_PHASE, GALLERY_WAVE_PX};
use crate::easing::{ease_in_out_cubic, progress_between};
use crate::layout::GalleryMetrics;
use crate::transform::Transform3d;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFrame {
    /// Eased progress through the pinned range.
    pub progress: f64,
    pub track: Transform3d,
    /// Per-item transforms; empty under reduced motion.
    pub items: Vec<Transform3d>,
}

/// Horizontal track offset at scroll `y`: 0 at the section start, `-travel`
/// at its end.
#[must_use]
pub fn track_offset(y: f64, metrics: &GalleryMetrics) -> (f64, f64) {
    let eased = ease_in_out_cubic(progress_between(y, metrics.start, metrics.end));
    (eased, -metrics.travel * eased)
}

/// Wave transform of item `index` at eased progress `eased`.
#[must_use]
pub fn item_wave(eased: f64, index: usize, depth: f64) -> Transform3d {
    #[allow(clippy::cast_precision_loss)]
    let phase = index as f64 * GALLERY_WAVE_PHASE;
    let wave = (eased * PI + phase).sin() * GALLERY_WAVE_PX;
    Transform3d::translate(0.0, wave, depth)
}

#[must_use]
pub fn gallery_frame(y: f64, metrics: &GalleryMetrics, reduced_motion: bool) -> GalleryFrame {
    let (progress, offset) = track_offset(y, metrics);
    let items = if reduced_motion {
        Vec::new()
    } else {
        metrics
            .item_depths
            .iter()
            .enumerate()
            .map(|(i, depth)| item_wave(progress, i, *depth))
            .collect()
    };
    GalleryFrame { progress, track: Transform3d::translate(offset, 0.0, 0.0), items }
}
