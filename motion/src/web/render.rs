//! Element cache and frame writer.

use web_sys::{Document, Element, HtmlElement};

use super::dom::{self, set_style, toggle_class};
use crate::controller::Frame;
use crate::hero::LayerStyle;
use crate::parallax::{parallax_transform, parse_speed};
use crate::transform::{AxisScale, fixed};

pub struct HeroLayers {
    pub media: Option<HtmlElement>,
    pub texture: Option<HtmlElement>,
    pub content: Option<HtmlElement>,
    pub feature: Option<HtmlElement>,
    pub accents: Option<HtmlElement>,
}

/// Elements the runtime reads and writes, looked up once at start.
pub struct PageElements {
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,
    pub header: Option<Element>,
    pub progress_bar: Option<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub hero_layers: HeroLayers,
    pub gallery_section: Option<HtmlElement>,
    pub gallery_track: Option<HtmlElement>,
    pub gallery_items: Vec<HtmlElement>,
    pub timeline: Option<HtmlElement>,
    pub timeline_progress: Option<HtmlElement>,
    pub timeline_steps: Vec<Element>,
    /// Parallax media with its parsed speed.
    pub parallax: Vec<(HtmlElement, f64)>,
    pub tilt_cards: Vec<HtmlElement>,
    /// In-page nav links, in menu order.
    pub nav_links: Vec<Element>,
}

impl PageElements {
    pub fn query(document: &Document) -> Self {
        let layer = |name: &str| dom::one::<HtmlElement>(document, &format!("[data-depth-layer=\"{name}\"]"));
        let parallax = dom::all::<HtmlElement>(document, "[data-parallax]")
            .into_iter()
            .map(|el| {
                let speed = parse_speed(el.get_attribute("data-parallax").as_deref());
                (el, speed)
            })
            .collect();
        Self {
            root: document.document_element(),
            body: document.body(),
            header: document.get_element_by_id("site-header"),
            progress_bar: dom::one(document, ".scroll-progress__bar"),
            hero: dom::one(document, "#hero"),
            hero_layers: HeroLayers {
                media: layer("media"),
                texture: layer("texture"),
                content: layer("content"),
                feature: layer("feature"),
                accents: layer("accents"),
            },
            gallery_section: dom::one(document, ".gallery-section"),
            gallery_track: dom::one(document, "[data-gallery-track]"),
            gallery_items: dom::all(document, ".gallery-item"),
            timeline: dom::one(document, "[data-timeline]"),
            timeline_progress: dom::one(document, "[data-timeline-progress]"),
            timeline_steps: dom::all(document, "[data-step]"),
            parallax,
            tilt_cards: dom::all(document, "[data-tilt]"),
            nav_links: dom::all(document, "#nav-links a[href^=\"#\"]"),
        }
    }
}

/// Write one frame to the page.
pub fn apply(els: &PageElements, frame: &Frame) {
    if let Some(header) = &els.header {
        toggle_class(header, "is-scrolled", frame.header_scrolled);
    }
    if let Some(bar) = &els.progress_bar {
        set_style(bar, "transform", &AxisScale::X(frame.page_progress).css());
    }

    if let Some(hero) = &frame.hero {
        let layers = &els.hero_layers;
        apply_layer(layers.media.as_ref(), &hero.media);
        apply_layer(layers.texture.as_ref(), &hero.texture);
        apply_layer(layers.content.as_ref(), &hero.content);
        apply_layer(layers.feature.as_ref(), &hero.feature);
        apply_layer(layers.accents.as_ref(), &hero.accents);
        if let Some(body) = &els.body {
            toggle_class(body, "is-after-hero", hero.after_hero);
        }
    }

    if let Some(gallery) = &frame.gallery {
        if let Some(track) = &els.gallery_track {
            set_style(track, "transform", &gallery.track.css());
        }
        for (item, transform) in els.gallery_items.iter().zip(&gallery.items) {
            set_style(item, "transform", &transform.css());
        }
    }

    if let Some(timeline) = &frame.timeline {
        if let Some(fill) = &els.timeline_progress {
            set_style(fill, "transform", &timeline.fill.css());
        }
        for (step, active) in els.timeline_steps.iter().zip(&timeline.active) {
            toggle_class(step, "is-active", *active);
        }
    }

    for (i, link) in els.nav_links.iter().enumerate() {
        toggle_class(link, "is-active", frame.active_nav == Some(i));
    }
}

fn apply_layer(el: Option<&HtmlElement>, style: &LayerStyle) {
    let Some(el) = el else {
        return;
    };
    set_style(el, "transform", &style.transform.css());
    if let Some(opacity) = style.opacity {
        set_style(el, "opacity", &fixed(opacity, 3));
    }
}

/// Move parallax media that is near the viewport.
pub fn apply_parallax(els: &PageElements, viewport_height: f64) {
    for (el, speed) in &els.parallax {
        if let Some(transform) = parallax_transform(dom::rect(el), viewport_height, *speed) {
            set_style(el, "transform", &transform.css());
        }
    }
}
