use super::*;
use crate::layout::{GalleryMetrics, Span, TimelineMetrics, Viewport};
use crate::transform::AxisScale;

fn wide() -> Viewport {
    Viewport { width: 1440.0, height: 900.0, doc_height: 5400.0 }
}

fn narrow() -> Viewport {
    Viewport { width: 390.0, height: 800.0, doc_height: 5400.0 }
}

fn full_layout(viewport: Viewport) -> LayoutSnapshot {
    LayoutSnapshot {
        viewport,
        hero: Some(Span { top: 0.0, height: 900.0 }),
        gallery: Some(GalleryMetrics::measure(1200.0, 3000.0, &viewport, vec![10.0, 40.0, 20.0])),
        timeline: Some(TimelineMetrics::measure(Span { top: 3000.0, height: 1000.0 }, &[3100.0, 3500.0], &viewport)),
        nav_sections: vec![Some(1200.0), Some(3000.0)],
    }
}

fn policy(viewport: Viewport) -> InteractionPolicy {
    InteractionPolicy { reduced_motion: false, coarse_pointer: false, viewport_width: viewport.width }
}

fn settle(core: &mut ControllerCore) -> Frame {
    let mut frame = core.tick();
    for _ in 0..2000 {
        if core.is_settled() {
            break;
        }
        frame = core.tick();
    }
    frame
}

// =============================================================================
// Smoothing
// =============================================================================

#[test]
fn tick_trails_target_then_settles() {
    let mut core = ControllerCore::new(0.0, false);
    core.refresh_layout(full_layout(wide()));
    core.on_scroll(1000.0);

    let first = core.tick();
    assert!(first.scroll_y > 0.0 && first.scroll_y < 1000.0);
    assert!(!core.is_settled());

    let last = settle(&mut core);
    assert!(core.is_settled());
    assert!((last.scroll_y - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn reduced_motion_jumps_in_one_tick() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));
    core.on_scroll(640.0);
    let frame = core.tick();
    assert!((frame.scroll_y - 640.0).abs() < f64::EPSILON);
    assert!(core.is_settled());
}

// =============================================================================
// Frame contents
// =============================================================================

#[test]
fn header_state_flips_past_threshold() {
    let mut core = ControllerCore::new(0.0, true);
    core.on_scroll(20.0);
    assert!(!core.tick().header_scrolled);
    core.on_scroll(21.0);
    assert!(core.tick().header_scrolled);
}

#[test]
fn page_progress_spans_scrollable_height() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));
    core.on_scroll(2250.0);
    assert!((core.tick().page_progress - 0.5).abs() < 1e-9);
    core.on_scroll(99_999.0);
    assert!((core.tick().page_progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn missing_sections_produce_no_effects() {
    let mut core = ControllerCore::new(0.0, false);
    core.refresh_layout(LayoutSnapshot { viewport: wide(), ..LayoutSnapshot::default() });
    let frame = core.tick();
    assert!(frame.hero.is_none());
    assert!(frame.gallery.is_none());
    assert!(frame.timeline.is_none());
    assert_eq!(frame.active_nav, None);
}

#[test]
fn reduced_motion_renders_static_hero_and_skips_wave() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));
    core.on_scroll(1500.0);
    let frame = core.tick();
    let hero = frame.hero.unwrap();
    assert_eq!(hero.content.opacity, Some(1.0));
    assert!(frame.gallery.unwrap().items.is_empty());
}

#[test]
fn timeline_axis_follows_viewport_width() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));
    assert!(matches!(core.tick().timeline.unwrap().fill, AxisScale::Y(_)));

    core.refresh_layout(full_layout(narrow()));
    assert!(matches!(core.tick().timeline.unwrap().fill, AxisScale::X(_)));
}

#[test]
fn timeline_steps_stay_active_after_scrolling_back() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));

    core.on_scroll(4000.0);
    assert_eq!(core.tick().timeline.unwrap().active, vec![true, true]);

    core.on_scroll(0.0);
    assert_eq!(core.tick().timeline.unwrap().active, vec![true, true]);

    core.refresh_layout(full_layout(wide()));
    assert_eq!(core.tick().timeline.unwrap().active, vec![true, true]);
}

#[test]
fn active_nav_tracks_sections() {
    let mut core = ControllerCore::new(0.0, true);
    core.refresh_layout(full_layout(wide()));
    assert_eq!(core.tick().active_nav, None);
    core.on_scroll(1000.0);
    assert_eq!(core.tick().active_nav, Some(0));
    core.on_scroll(2800.0);
    assert_eq!(core.tick().active_nav, Some(1));
}

// =============================================================================
// Pointer bindings
// =============================================================================

#[test]
fn pointer_ignored_until_hero_bound() {
    let mut core = ControllerCore::new(0.0, false);
    let bounds = Rect::new(0.0, 0.0, 1000.0, 800.0);
    core.on_pointer_move(bounds, 1000.0, 800.0);
    assert_eq!(core.pointer, PointerState::CENTER);

    core.update_interaction(policy(wide()), 0);
    core.on_pointer_move(bounds, 1000.0, 800.0);
    assert_eq!(core.pointer, PointerState { x: 1.0, y: 1.0 });
}

#[test]
fn pointer_leave_recenters() {
    let mut core = ControllerCore::new(0.0, false);
    core.update_interaction(policy(wide()), 0);
    core.on_pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 0.0);
    core.on_pointer_leave();
    assert_eq!(core.pointer, PointerState::CENTER);
}

#[test]
fn bindings_attach_once_and_detach_on_resize() {
    let mut core = ControllerCore::new(0.0, false);

    let changes = core.update_interaction(policy(wide()), 2);
    assert_eq!(changes.hero, BindingChange::Attach);
    assert_eq!(changes.tilt, vec![BindingChange::Attach, BindingChange::Attach]);
    assert!(core.hero_bound());

    let again = core.update_interaction(policy(wide()), 2);
    assert_eq!(again.hero, BindingChange::Keep);
    assert_eq!(again.tilt, vec![BindingChange::Keep, BindingChange::Keep]);

    core.on_pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), 100.0, 0.0);
    let shrunk = core.update_interaction(policy(narrow()), 2);
    assert_eq!(shrunk.hero, BindingChange::Detach);
    assert_eq!(shrunk.tilt, vec![BindingChange::Detach, BindingChange::Detach]);
    assert_eq!(core.pointer, PointerState::CENTER);
    assert!(!core.hero_bound());
}

#[test]
fn coarse_pointer_never_binds() {
    let mut core = ControllerCore::new(0.0, false);
    let touch = InteractionPolicy { coarse_pointer: true, ..policy(wide()) };
    let changes = core.update_interaction(touch, 1);
    assert_eq!(changes.hero, BindingChange::Keep);
    assert_eq!(changes.tilt, vec![BindingChange::Keep]);
}

#[test]
fn hero_moves_with_pointer_on_wide_screens() {
    let mut core = ControllerCore::new(0.0, false);
    core.refresh_layout(full_layout(wide()));
    core.update_interaction(policy(wide()), 0);
    let centered = core.tick().hero.unwrap();

    core.on_pointer_move(Rect::new(0.0, 0.0, 1000.0, 800.0), 1000.0, 400.0);
    let shifted = core.tick().hero.unwrap();
    assert!(shifted.media.transform.x < centered.media.transform.x);
}
