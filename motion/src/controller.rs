//! Scroll-animation controller.
//!
//! [`ControllerCore`] holds every piece of motion state and turns it into a
//! [`Frame`] once per animation frame. It never touches the DOM, so the whole
//! pipeline runs under `cargo test`; the `web` runtime measures the page,
//! forwards events, and writes each frame back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::binding::{Binding, BindingChange, InteractionPolicy};
use crate::consts::HEADER_SCROLLED_PX;
use crate::gallery::{GalleryFrame, gallery_frame};
use crate::hero::{HeroFrame, HeroMode, hero_frame, hero_progress};
use crate::layout::{LayoutSnapshot, Rect};
use crate::nav::active_link;
use crate::pointer::PointerState;
use crate::scroll::{ScrollState, page_progress};
use crate::timeline::{StepTracker, TimelineFrame, timeline_frame};

/// Everything the page needs to render for one smoothed scroll position.
/// Effects whose section is missing from the page are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub scroll_y: f64,
    pub header_scrolled: bool,
    pub page_progress: f64,
    pub hero: Option<HeroFrame>,
    pub gallery: Option<GalleryFrame>,
    pub timeline: Option<TimelineFrame>,
    pub active_nav: Option<usize>,
}

/// Listener changes the host must apply after a policy update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionChanges {
    pub hero: BindingChange,
    /// One entry per tilt card, in document order.
    pub tilt: Vec<BindingChange>,
}

#[derive(Debug, Clone)]
pub struct ControllerCore {
    pub scroll: ScrollState,
    pub layout: LayoutSnapshot,
    pub pointer: PointerState,
    steps: StepTracker,
    hero_binding: Binding,
    tilt_bindings: Vec<Binding>,
}

impl ControllerCore {
    /// Create a controller at rest at scroll offset `y`.
    #[must_use]
    pub fn new(y: f64, reduced_motion: bool) -> Self {
        Self {
            scroll: ScrollState::new(y, reduced_motion),
            layout: LayoutSnapshot::default(),
            pointer: PointerState::CENTER,
            steps: StepTracker::default(),
            hero_binding: Binding::Unbound,
            tilt_bindings: Vec::new(),
        }
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.scroll.reduced_motion
    }

    // --- Inputs ---

    /// The browser reported a new raw scroll offset.
    pub fn on_scroll(&mut self, y: f64) {
        self.scroll.set_target(y);
    }

    /// Replace the measured geometry. Latched timeline steps survive.
    pub fn refresh_layout(&mut self, layout: LayoutSnapshot) {
        self.layout = layout;
    }

    /// Pointer moved over the hero. Ignored while hero tracking is unbound.
    pub fn on_pointer_move(&mut self, bounds: Rect, client_x: f64, client_y: f64) {
        if self.hero_binding.is_bound() {
            self.pointer = PointerState::within(bounds, client_x, client_y);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.reset();
    }

    /// Re-evaluate pointer bindings against `policy` for `tilt_cards` cards.
    ///
    /// Detaching hero tracking recenters the pointer. Cards beyond the
    /// previous count start unbound.
    pub fn update_interaction(&mut self, policy: InteractionPolicy, tilt_cards: usize) -> InteractionChanges {
        let allowed = policy.allows_pointer_effects();
        let hero = self.hero_binding.reconcile(allowed);
        if hero == BindingChange::Detach {
            self.pointer.reset();
        }
        self.tilt_bindings.resize(tilt_cards, Binding::Unbound);
        let tilt = self.tilt_bindings.iter_mut().map(|b| b.reconcile(allowed)).collect();
        InteractionChanges { hero, tilt }
    }

    #[must_use]
    pub fn hero_bound(&self) -> bool {
        self.hero_binding.is_bound()
    }

    // --- Frame ---

    /// Advance smoothing by one step and compute the frame.
    pub fn tick(&mut self) -> Frame {
        let y = self.scroll.step();
        let viewport = self.layout.viewport;
        let narrow = viewport.is_narrow();
        let mode = HeroMode::select(self.reduced_motion(), narrow);

        let hero = self
            .layout
            .hero
            .map(|span| hero_frame(hero_progress(y, span), self.pointer, mode));
        let gallery = self
            .layout
            .gallery
            .as_ref()
            .map(|m| gallery_frame(y, m, self.reduced_motion()));
        let timeline = self
            .layout
            .timeline
            .as_ref()
            .map(|m| timeline_frame(y, m, narrow, &mut self.steps));

        Frame {
            scroll_y: y,
            header_scrolled: y > HEADER_SCROLLED_PX,
            page_progress: page_progress(y, &viewport),
            hero,
            gallery,
            timeline,
            active_nav: active_link(y, viewport.height, &self.layout.nav_sections),
        }
    }

    /// Smoothed scroll has converged on the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scroll.is_settled()
    }
}
