//! Browser bindings.
//!
//! Everything here is glue: look elements up, measure them, forward events to
//! [`crate::controller::ControllerCore`] and [`crate::form::LeadForm`], and
//! write results back. Missing elements are skipped; nothing in this layer
//! reports errors to the visitor except the lead form.

mod dom;
mod form;
mod page;
mod render;
mod runtime;

use wasm_bindgen::prelude::*;

/// Entry point run once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.class_list().add_1("js");
    }

    page::split_text(&document);
    page::setup_reveals(&document);
    let nav = page::setup_nav(&document);
    page::setup_anchors(&document, nav);
    form::setup(&document);
    runtime::Runtime::install(window, document);
    log::debug!("motion runtime installed");
}
