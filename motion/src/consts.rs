//! Shared numeric constants for the motion crate.

// ── Scroll ──────────────────────────────────────────────────────

/// Fraction of the remaining distance covered per frame.
pub const SCROLL_EASE: f64 = 0.11;

/// Residual below which the smoothed position snaps to the target, in px.
pub const SNAP_THRESHOLD_PX: f64 = 0.08;

/// Scroll offset past which the header switches to its compact state.
pub const HEADER_SCROLLED_PX: f64 = 20.0;

// ── Layout ──────────────────────────────────────────────────────

/// Viewports at or below this width use the narrow layouts.
pub const NARROW_MAX_WIDTH_PX: f64 = 900.0;

// ── Hero ────────────────────────────────────────────────────────

/// Hero progress after which the body is marked as past the hero.
pub const AFTER_HERO_PROGRESS: f64 = 0.11;

// ── Gallery ─────────────────────────────────────────────────────

/// Extra horizontal travel so the last item clears the viewport edge.
pub const GALLERY_EDGE_MARGIN_PX: f64 = 96.0;

/// Pinned section height as a multiple of viewport height, before travel.
pub const GALLERY_HEIGHT_FACTOR: f64 = 1.24;

/// Peak vertical wave offset of gallery items, in px.
pub const GALLERY_WAVE_PX: f64 = 9.0;

/// Phase offset between consecutive gallery items, in radians.
pub const GALLERY_WAVE_PHASE: f64 = 0.55;

// ── Timeline ────────────────────────────────────────────────────

/// Timeline fill starts when its top is this far (in viewports) below the fold.
pub const TIMELINE_START_VH: f64 = 0.38;

/// Timeline fill ends when its bottom is this far below the viewport top.
pub const TIMELINE_END_VH: f64 = 0.35;

/// A step activates when its top reaches this fraction of the viewport.
pub const TIMELINE_STEP_VH: f64 = 0.6;

// ── Parallax / tilt ─────────────────────────────────────────────

/// Off-screen margin beyond which parallax media are left alone, in px.
pub const PARALLAX_MARGIN_PX: f64 = 120.0;

/// Speed used when a parallax element has no explicit value.
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.1;

/// Damping applied to every parallax speed.
pub const PARALLAX_DAMPING: f64 = 0.18;

/// Scale applied to parallax media so edges never show.
pub const PARALLAX_SCALE: f64 = 1.03;

/// Maximum card tilt in degrees at the card edge (half of this per side).
pub const TILT_MAX_DEG: f64 = 10.0;

// ── Navigation / reveal ─────────────────────────────────────────

/// Probe line for the active nav link, as a fraction of viewport height.
pub const NAV_PROBE_VH: f64 = 0.35;

/// Reveal stagger step in milliseconds.
pub const REVEAL_STAGGER_MS: u32 = 70;

/// Number of reveal targets per stagger cycle.
pub const REVEAL_STAGGER_CYCLE: usize = 7;

/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Root margin for the reveal observer (shrinks the viewport bottom).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -12% 0px";
