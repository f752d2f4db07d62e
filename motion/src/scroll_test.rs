#![allow(clippy::float_cmp)]

use super::*;

fn viewport(height: f64, doc_height: f64) -> Viewport {
    Viewport { width: 1280.0, height, doc_height }
}

#[test]
fn new_uses_fixed_ease() {
    let s = ScrollState::new(40.0, false);
    assert_eq!(s.ease, SCROLL_EASE);
    assert_eq!(s.current_y, 40.0);
    assert!(s.is_settled());
}

#[test]
fn reduced_motion_jumps_in_one_step() {
    let mut s = ScrollState::new(0.0, true);
    s.set_target(750.0);
    assert_eq!(s.step(), 750.0);
    assert!(s.is_settled());
}

#[test]
fn step_moves_fraction_of_residual() {
    let mut s = ScrollState::new(0.0, false);
    s.set_target(100.0);
    let y = s.step();
    assert!((y - 100.0 * SCROLL_EASE).abs() < 1e-9);
    assert!(!s.is_settled());
}

#[test]
fn step_snaps_below_threshold() {
    let mut s = ScrollState::new(0.0, false);
    s.set_target(0.05);
    assert_eq!(s.step(), 0.05);
    assert!(s.is_settled());
}

#[test]
fn smoothing_converges_without_overshoot() {
    for (start, target) in [(0.0, 5000.0), (3200.0, 12.0), (-40.0, 40.0), (10.0, 10.5)] {
        let mut s = ScrollState::new(start, false);
        s.set_target(target);
        let mut residual = (target - start).abs();
        let mut steps = 0;
        while !s.is_settled() {
            s.step();
            let next = (target - s.current_y).abs();
            assert!(next <= residual, "residual grew from {residual} to {next}");
            // Never crosses the target.
            assert!((target - s.current_y) * (target - start) >= 0.0);
            residual = next;
            steps += 1;
            assert!(steps < 1000, "did not converge from {start} to {target}");
        }
        assert_eq!(s.current_y, target);
    }
}

#[test]
fn smoothing_follows_moving_target() {
    let mut s = ScrollState::new(0.0, false);
    s.set_target(500.0);
    for _ in 0..5 {
        s.step();
    }
    s.set_target(100.0);
    for _ in 0..500 {
        s.step();
    }
    assert_eq!(s.current_y, 100.0);
}

#[test]
fn page_progress_clamped_and_monotonic() {
    let vp = viewport(800.0, 4800.0);
    let mut prev = 0.0;
    for i in 0..=400 {
        let y = f64::from(i) * 10.0;
        let p = page_progress(y, &vp);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(page_progress(0.0, &vp), 0.0);
    assert_eq!(page_progress(4000.0, &vp), 1.0);
    assert_eq!(page_progress(2000.0, &vp), 0.5);
}

#[test]
fn page_progress_handles_short_documents() {
    let vp = viewport(900.0, 600.0);
    assert_eq!(page_progress(0.0, &vp), 0.0);
    assert_eq!(page_progress(5.0, &vp), 1.0);
}
