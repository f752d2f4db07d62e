//! Small DOM helpers. Lookups return `Option`/`Vec` and writes ignore
//! failures, so a page without some section simply loses that effect.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::layout::Rect;

pub fn one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

pub fn all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document.query_selector_all(selector).map(collect).unwrap_or_default()
}

pub fn one_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Top of `el` in document coordinates.
pub fn doc_top(el: &Element, scroll_y: f64) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, passive: bool, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Pointer listeners that are removed again when dropped.
pub struct PointerListeners {
    target: EventTarget,
    on_move: Closure<dyn FnMut(Event)>,
    on_leave: Closure<dyn FnMut(Event)>,
}

const LEAVE_EVENTS: [&str; 2] = ["pointerleave", "pointercancel"];

impl PointerListeners {
    pub fn attach(
        target: &EventTarget,
        on_move: impl FnMut(Event) + 'static,
        on_leave: impl FnMut(Event) + 'static,
    ) -> Self {
        let on_move = Closure::<dyn FnMut(Event)>::new(on_move);
        let on_leave = Closure::<dyn FnMut(Event)>::new(on_leave);
        let _ = target.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
        for event in LEAVE_EVENTS {
            let _ = target.add_event_listener_with_callback(event, on_leave.as_ref().unchecked_ref());
        }
        Self { target: target.clone(), on_move, on_leave }
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        for event in LEAVE_EVENTS {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, self.on_leave.as_ref().unchecked_ref());
        }
    }
}
