#![allow(clippy::float_cmp)]

use super::*;

fn metrics() -> TimelineMetrics {
    TimelineMetrics { start: 1000.0, end: 2000.0, step_triggers: vec![1100.0, 1400.0, 1800.0] }
}

#[test]
fn progress_is_linear_and_clamped() {
    let m = metrics();
    assert_eq!(timeline_progress(500.0, &m), 0.0);
    assert_eq!(timeline_progress(1250.0, &m), 0.25);
    assert_eq!(timeline_progress(2500.0, &m), 1.0);
}

#[test]
fn fill_axis_follows_viewport() {
    let m = metrics();
    let mut tracker = StepTracker::default();
    assert_eq!(timeline_frame(1500.0, &m, false, &mut tracker).fill, AxisScale::Y(0.5));
    assert_eq!(timeline_frame(1500.0, &m, true, &mut tracker).fill, AxisScale::X(0.5));
}

#[test]
fn steps_activate_in_order_as_scroll_increases() {
    let m = metrics();
    let mut tracker = StepTracker::default();
    let mut prev_count = 0;
    let mut y = 0.0;
    while y < 2500.0 {
        let active = timeline_frame(y, &m, false, &mut tracker).active;
        let count = active.iter().filter(|a| **a).count();
        // Active steps always form a prefix.
        assert!(active.iter().take(count).all(|a| *a), "y = {y}: {active:?}");
        assert!(count >= prev_count);
        prev_count = count;
        y += 25.0;
    }
    assert_eq!(prev_count, 3);
}

#[test]
fn step_activates_exactly_at_trigger() {
    let mut tracker = StepTracker::default();
    assert_eq!(tracker.observe(1099.0, &[1100.0]), vec![false]);
    assert_eq!(tracker.observe(1100.0, &[1100.0]), vec![true]);
}

#[test]
fn steps_never_deactivate_when_scrolling_back() {
    let m = metrics();
    let mut tracker = StepTracker::default();
    timeline_frame(1500.0, &m, false, &mut tracker);
    let active = timeline_frame(0.0, &m, false, &mut tracker).active;
    assert_eq!(active, vec![true, true, false]);
    assert_eq!(tracker.furthest(), Some(1500.0));
}

#[test]
fn latch_survives_remeasure() {
    let mut tracker = StepTracker::default();
    tracker.observe(1500.0, &[1100.0]);
    // Layout moved the trigger further down; the latched position still counts.
    assert_eq!(tracker.observe(200.0, &[1450.0, 1600.0]), vec![true, false]);
}
