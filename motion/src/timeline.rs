//! Timeline fill and step activation.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::easing::progress_between;
use crate::layout::TimelineMetrics;
use crate::transform::AxisScale;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    /// Fill bar scale: vertical on wide screens, horizontal on narrow ones.
    pub fill: AxisScale,
    /// Activation flag per step, in step order.
    pub active: Vec<bool>,
}

/// Latches timeline steps once the page has scrolled past them.
///
/// Tracks the furthest smoothed position seen, so a step stays active after
/// the visitor scrolls back up. Re-measuring the layout keeps the latch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepTracker {
    furthest_y: Option<f64>,
}

impl StepTracker {
    /// Record position `y` and return the activation flags for `triggers`.
    pub fn observe(&mut self, y: f64, triggers: &[f64]) -> Vec<bool> {
        let furthest = self.furthest_y.map_or(y, |f| f.max(y));
        self.furthest_y = Some(furthest);
        triggers.iter().map(|&t| furthest >= t).collect()
    }

    #[must_use]
    pub fn furthest(&self) -> Option<f64> {
        self.furthest_y
    }
}

#[must_use]
pub fn timeline_progress(y: f64, metrics: &TimelineMetrics) -> f64 {
    progress_between(y, metrics.start, metrics.end)
}

#[must_use]
pub fn timeline_frame(y: f64, metrics: &TimelineMetrics, narrow: bool, tracker: &mut StepTracker) -> TimelineFrame {
    let progress = timeline_progress(y, metrics);
    let fill = if narrow { AxisScale::X(progress) } else { AxisScale::Y(progress) };
    TimelineFrame { fill, active: tracker.observe(y, &metrics.step_triggers) }
}
