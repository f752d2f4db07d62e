//! Viewport and section geometry.
//!
//! Measured from the DOM on load, resize and orientation change, then held by
//! the controller until the next measurement. All offsets are document
//! coordinates in CSS pixels.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    GALLERY_EDGE_MARGIN_PX, GALLERY_HEIGHT_FACTOR, NARROW_MAX_WIDTH_PX, TIMELINE_END_VH, TIMELINE_START_VH,
    TIMELINE_STEP_VH,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub doc_height: f64,
}

impl Viewport {
    /// Narrow viewports get reduced-intensity layouts.
    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.width <= NARROW_MAX_WIDTH_PX
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

/// Viewport-relative rectangle as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// =============================================================================
// GALLERY
// =============================================================================

/// Pinned gallery geometry: scrolling from `start` to `end` moves the track
/// left by `travel`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryMetrics {
    pub start: f64,
    pub end: f64,
    pub travel: f64,
    /// Height the section must be given so the pin lasts for the travel.
    pub section_height: f64,
    /// Per-item `z` depth in px, in track order.
    pub item_depths: Vec<f64>,
}

impl GalleryMetrics {
    /// Derive the pin range from the section's top, the track's full width
    /// and the viewport.
    #[must_use]
    pub fn measure(section_top: f64, track_width: f64, viewport: &Viewport, item_depths: Vec<f64>) -> Self {
        let travel = (track_width - viewport.width + GALLERY_EDGE_MARGIN_PX).max(0.0);
        let base = viewport.height * GALLERY_HEIGHT_FACTOR;
        let section_height = base.max(travel + base);
        let start = section_top;
        let end = start + section_height - viewport.height;
        Self { start, end, travel, section_height, item_depths }
    }
}

// =============================================================================
// TIMELINE
// =============================================================================

/// Timeline fill range and per-step trigger offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineMetrics {
    pub start: f64,
    pub end: f64,
    /// Scroll offset at which each step activates, in step order.
    pub step_triggers: Vec<f64>,
}

impl TimelineMetrics {
    #[must_use]
    pub fn measure(timeline: Span, step_tops: &[f64], viewport: &Viewport) -> Self {
        let vh = viewport.height;
        Self {
            start: timeline.top - vh * TIMELINE_START_VH,
            end: timeline.top + timeline.height - vh * TIMELINE_END_VH,
            step_triggers: step_tops.iter().map(|top| top - vh * TIMELINE_STEP_VH).collect(),
        }
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Everything the controller needs from one layout measurement. Sections
/// absent from the page are `None` and their effects are skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub hero: Option<Span>,
    pub gallery: Option<GalleryMetrics>,
    pub timeline: Option<TimelineMetrics>,
    /// Document top of each nav link's target section, in link order.
    /// `None` for links whose target is missing.
    pub nav_sections: Vec<Option<f64>>,
}
