//! When pointer-driven effects are allowed, and the bound/unbound state
//! machine that tracks whether their listeners are attached.
//!
//! Hero pointer tracking and every tilt card each own a [`Binding`]. After
//! any layout-affecting event the host recomputes the [`InteractionPolicy`]
//! and calls [`Binding::reconcile`]; the returned [`BindingChange`] says
//! whether listeners must be attached or detached. Reconciling twice with the
//! same answer is a no-op.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::consts::NARROW_MAX_WIDTH_PX;

/// Inputs that decide whether pointer effects run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionPolicy {
    pub reduced_motion: bool,
    /// The primary pointer is coarse (touch).
    pub coarse_pointer: bool,
    pub viewport_width: f64,
}

impl InteractionPolicy {
    /// Pointer effects need motion, a fine pointer and a wide viewport.
    #[must_use]
    pub fn allows_pointer_effects(&self) -> bool {
        !self.reduced_motion && !self.coarse_pointer && self.viewport_width > NARROW_MAX_WIDTH_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binding {
    #[default]
    Unbound,
    Bound,
}

/// What the host must do to the element's listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingChange {
    Attach,
    /// Remove listeners and reset the effect to its neutral pose.
    Detach,
    Keep,
}

impl Binding {
    #[must_use]
    pub fn is_bound(self) -> bool {
        self == Self::Bound
    }

    /// Move toward `allowed`, reporting the listener change required.
    pub fn reconcile(&mut self, allowed: bool) -> BindingChange {
        match (*self, allowed) {
            (Self::Unbound, true) => {
                *self = Self::Bound;
                BindingChange::Attach
            }
            (Self::Bound, false) => {
                *self = Self::Unbound;
                BindingChange::Detach
            }
            _ => BindingChange::Keep,
        }
    }
}
