//! Frame request coalescing.
//!
//! Scroll, resize and pointer events can fire many times per display refresh.
//! The scheduler guarantees at most one outstanding animation-frame request
//! and lets the loop go idle once the page is at rest, reviving it on the
//! next input.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScheduler {
    /// A frame request is outstanding.
    pending: bool,
    /// Input arrived since the current frame began.
    dirty: bool,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note new input. Returns `true` when the caller must request a frame;
    /// `false` when one is already on the way.
    pub fn request(&mut self) -> bool {
        self.dirty = true;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Call at the top of the frame callback.
    pub fn begin_frame(&mut self) {
        self.pending = false;
        self.dirty = false;
    }

    /// Call at the end of the frame callback. Returns `true` when the caller
    /// must request another frame.
    pub fn end_frame(&mut self, settled: bool) -> bool {
        if settled && !self.dirty {
            return false;
        }
        self.request()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
