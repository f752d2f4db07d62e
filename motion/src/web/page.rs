//! Page furniture: split headings, reveal-on-scroll, the mobile menu and
//! smooth in-page anchors.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::{self, set_style, toggle_class};
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::nav::{NavMenu, anchor_target};
use crate::reveal::{reveal_delay_ms, split_chars};

// =============================================================================
// SPLIT TEXT
// =============================================================================

/// Replace each `.split-text` heading's text with one span per character.
/// Already-split headings (`data-split="true"`) are left alone.
pub fn split_text(document: &Document) {
    for el in dom::all::<Element>(document, ".split-text") {
        if el.get_attribute("data-split").as_deref() == Some("true") {
            continue;
        }
        let text = el.text_content().unwrap_or_default();
        let fragment = document.create_document_fragment();
        for ch in split_chars(&text) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_class_name(if ch.is_space { "char space" } else { "char" });
            span.set_text_content(Some(&ch.text));
            if let Some(span) = span.dyn_ref::<HtmlElement>() {
                set_style(span, "--char-index", &ch.index.to_string());
            }
            let _ = fragment.append_child(&span);
        }
        el.set_text_content(None);
        let _ = el.append_child(&fragment);
        let _ = el.set_attribute("data-split", "true");
    }
}

// =============================================================================
// REVEALS
// =============================================================================

/// Stagger `.reveal` and `.split-text` targets and mark each visible the
/// first time it enters the viewport.
pub fn setup_reveals(document: &Document) {
    let targets = dom::all::<HtmlElement>(document, ".reveal, .split-text");
    for (i, el) in targets.iter().enumerate() {
        set_style(el, "transition-delay", &format!("{}ms", reveal_delay_ms(i)));
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("is-visible");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(_) => {
            log::warn!("IntersectionObserver unavailable; revealing everything");
            for el in &targets {
                let _ = el.class_list().add_1("is-visible");
            }
        }
    }
}

// =============================================================================
// NAV
// =============================================================================

/// The mobile menu's toggle, link list and shared open state.
#[derive(Clone)]
pub struct Nav {
    menu: Rc<Cell<NavMenu>>,
    toggle: Element,
    links: Element,
}

impl Nav {
    fn sync(&self) {
        let open = self.menu.get().is_open();
        let _ = self.toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        toggle_class(&self.links, "is-open", open);
    }

    fn close(&self) {
        let mut menu = self.menu.get();
        if menu.close() {
            self.menu.set(menu);
            self.sync();
        }
    }
}

/// Wire the menu toggle and close-on-outside-click.
pub fn setup_nav(document: &Document) -> Option<Nav> {
    let toggle = dom::one::<Element>(document, ".nav-toggle")?;
    let links = document.get_element_by_id("nav-links")?;
    let nav = Nav { menu: Rc::new(Cell::new(NavMenu::default())), toggle, links };

    let on_toggle = nav.clone();
    dom::listen(&nav.toggle, "click", false, move |_| {
        let mut menu = on_toggle.menu.get();
        menu.toggle();
        on_toggle.menu.set(menu);
        on_toggle.sync();
    });

    let on_document = nav.clone();
    dom::listen(document, "click", false, move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let inside = on_document.links.contains(Some(&target));
        let on_toggle = on_document.toggle.contains(Some(&target));
        let mut menu = on_document.menu.get();
        if menu.click(inside, on_toggle) {
            on_document.menu.set(menu);
            on_document.sync();
        }
    });

    Some(nav)
}

// =============================================================================
// ANCHORS
// =============================================================================

/// Scroll smoothly to in-page targets and close the menu afterwards. Links
/// without an existing target keep the browser's default behavior.
pub fn setup_anchors(document: &Document, nav: Option<Nav>) {
    for anchor in dom::all::<Element>(document, "a[href^=\"#\"]") {
        let link = anchor.clone();
        let doc = document.clone();
        let nav = nav.clone();
        dom::listen(&anchor, "click", false, move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            if let Some(nav) = &nav {
                nav.close();
            }
        });
    }
}
