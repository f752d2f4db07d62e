//! Clamping, range progress and easing curves.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Clamp `value` into `[min, max]`. NaN maps to `min`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Linear progress of `value` through `[start, end]`, clamped to `[0, 1]`.
///
/// Degenerate ranges are widened to one pixel so the result stays finite.
#[must_use]
pub fn progress_between(value: f64, start: f64, end: f64) -> f64 {
    let range = (end - start).max(1.0);
    clamp((value - start) / range, 0.0, 1.0)
}

/// Symmetric cubic ease-in-out on `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
