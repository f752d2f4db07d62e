#![allow(clippy::float_cmp)]

use super::*;
use crate::layout::Viewport;

fn metrics(track_width: f64, viewport_width: f64) -> GalleryMetrics {
    let vp = Viewport { width: viewport_width, height: 800.0, doc_height: 8000.0 };
    GalleryMetrics::measure(2000.0, track_width, &vp, vec![0.0, 30.0, 60.0])
}

#[test]
fn offset_is_zero_at_start_and_minus_travel_at_end() {
    for (track, viewport) in [(3000.0, 1280.0), (5200.0, 1920.0), (900.0, 1280.0), (1400.0, 375.0)] {
        let m = metrics(track, viewport);
        let (_, at_start) = track_offset(m.start, &m);
        let (_, at_end) = track_offset(m.end, &m);
        assert!(at_start.abs() < 1e-9);
        assert!((at_end + m.travel).abs() < 1e-9, "track {track} viewport {viewport}");
    }
}

#[test]
fn offset_clamps_outside_range() {
    let m = metrics(3000.0, 1280.0);
    assert!(track_offset(0.0, &m).1.abs() < 1e-9);
    assert!((track_offset(m.end + 5000.0, &m).1 + m.travel).abs() < 1e-9);
}

#[test]
fn offset_midpoint_is_half_travel() {
    let m = metrics(3000.0, 1280.0);
    let mid = (m.start + m.end) / 2.0;
    let (eased, offset) = track_offset(mid, &m);
    assert!((eased - 0.5).abs() < 1e-9);
    assert!((offset + m.travel / 2.0).abs() < 1e-6);
}

#[test]
fn offset_moves_monotonically_left() {
    let m = metrics(3000.0, 1280.0);
    let mut prev = 0.0;
    let mut y = m.start;
    while y <= m.end {
        let (_, offset) = track_offset(y, &m);
        assert!(offset <= prev + 1e-9);
        prev = offset;
        y += 10.0;
    }
}

#[test]
fn item_wave_uses_index_phase_and_depth() {
    let first = item_wave(0.0, 0, 0.0);
    assert!(first.y.abs() < 1e-9);
    let second = item_wave(0.0, 1, 30.0);
    assert!((second.y - (0.55f64).sin() * 9.0).abs() < 1e-9);
    assert_eq!(second.z, 30.0);
    assert_eq!(second.x, 0.0);
}

#[test]
fn frame_has_item_per_depth() {
    let m = metrics(3000.0, 1280.0);
    let f = gallery_frame(m.start, &m, false);
    assert_eq!(f.items.len(), 3);
    assert_eq!(f.track.y, 0.0);
}

#[test]
fn reduced_motion_skips_item_wave() {
    let m = metrics(3000.0, 1280.0);
    let f = gallery_frame(m.end, &m, true);
    assert!(f.items.is_empty());
    assert!((f.track.x + m.travel).abs() < 1e-9);
}
