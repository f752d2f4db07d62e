//! Scroll-driven motion engine for the marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Everything
//! that decides *what* the page should look like lives in plain Rust that
//! runs natively under `cargo test`: scroll smoothing, easing, hero depth
//! layers, the pinned gallery, the timeline, parallax and tilt, plus the lead
//! form's state. The [`web`] module (feature `hydrate`) only measures the DOM,
//! feeds [`controller::ControllerCore`], and writes the resulting
//! [`controller::Frame`] back as styles and classes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable [`controller::ControllerCore`] and its per-frame output |
//! | [`scroll`] | Smoothed scroll position and page progress |
//! | [`easing`] | Clamping, range progress and easing curves |
//! | [`layout`] | Viewport and section geometry measured from the DOM |
//! | [`hero`] | Depth-layer transforms for the hero |
//! | [`gallery`] | Horizontal track offset and item wave |
//! | [`timeline`] | Timeline fill and latched step activation |
//! | [`parallax`] | Parallax media and tilt cards |
//! | [`pointer`] | Normalized hero pointer |
//! | [`binding`] | Interaction policy and the bound/unbound state machine |
//! | [`scheduler`] | Frame request coalescing and idle shutdown |
//! | [`nav`] | Menu toggle, active link, anchor targets |
//! | [`reveal`] | Split text and staggered reveal delays |
//! | [`form`] | Lead form state and messages |
//! | [`transform`] | CSS transform values |
//! | [`consts`] | Shared numeric constants |

pub mod binding;
pub mod consts;
pub mod controller;
pub mod easing;
pub mod form;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod timeline;
pub mod transform;
#[cfg(feature = "hydrate")]
pub mod web;
