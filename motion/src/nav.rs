//! Navigation: mobile menu, active link and in-page anchors.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::NAV_PROBE_VH;

/// Collapsible menu state mirrored into `aria-expanded` and `.is-open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click landed somewhere on the page. Clicks inside the menu or on the
    /// toggle leave it alone; anything else closes an open menu.
    pub fn click(&mut self, inside_menu: bool, on_toggle: bool) -> bool {
        if !self.open || inside_menu || on_toggle {
            return false;
        }
        self.close()
    }
}

/// Index of the nav link whose section is under the probe line, if any.
///
/// The probe sits a fixed fraction down the viewport; the active section is
/// the lowest one whose top has passed it.
#[must_use]
pub fn active_link(y: f64, viewport_height: f64, section_tops: &[Option<f64>]) -> Option<usize> {
    let probe = y + viewport_height * NAV_PROBE_VH;
    section_tops
        .iter()
        .enumerate()
        .filter_map(|(i, top)| top.filter(|t| *t <= probe).map(|t| (i, t)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Element id targeted by an in-page link, or `None` for links the browser
/// should handle itself (`#`, external URLs, empty fragments).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}
