//! Animation loop and event wiring.
//!
//! One [`Runtime`] per page, shared as `Rc<RefCell<_>>` between the
//! `requestAnimationFrame` callback and the window listeners. The frame
//! callback holds only a weak reference so the runtime is kept alive by its
//! listeners alone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, MouseEvent, Window};

use super::dom::{self, PointerListeners, set_style};
use super::render::{self, PageElements};
use crate::binding::{BindingChange, InteractionPolicy};
use crate::controller::ControllerCore;
use crate::layout::{GalleryMetrics, LayoutSnapshot, Span, TimelineMetrics, Viewport};
use crate::nav::anchor_target;
use crate::parallax::Tilt;
use crate::scheduler::FrameScheduler;

pub type Handle = Rc<RefCell<Runtime>>;

pub struct Runtime {
    window: Window,
    document: Document,
    els: PageElements,
    core: ControllerCore,
    scheduler: FrameScheduler,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    hero_listeners: Option<PointerListeners>,
    tilt_listeners: Vec<Option<PointerListeners>>,
}

impl Runtime {
    /// Measure the page, bind listeners and start the loop.
    pub fn install(window: Window, document: Document) -> Handle {
        let reduced_motion = dom::media_matches(&window, "(prefers-reduced-motion: reduce)");
        let core = ControllerCore::new(dom::scroll_y(&window), reduced_motion);
        let els = PageElements::query(&document);
        let tilt_listeners = els.tilt_cards.iter().map(|_| None).collect();

        let rt = Rc::new(RefCell::new(Self {
            window: window.clone(),
            document,
            els,
            core,
            scheduler: FrameScheduler::new(),
            on_frame: None,
            hero_listeners: None,
            tilt_listeners,
        }));

        let weak = Rc::downgrade(&rt);
        rt.borrow_mut().on_frame = Some(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
            if let Some(rt) = weak.upgrade() {
                rt.borrow_mut().frame();
            }
        }));

        refresh(&rt);

        let scroll_rt = rt.clone();
        dom::listen(&window, "scroll", true, move |_| scroll_rt.borrow_mut().on_scroll());
        let resize_rt = rt.clone();
        dom::listen(&window, "resize", true, move |_| refresh(&resize_rt));
        let orientation_rt = rt.clone();
        dom::listen(&window, "orientationchange", false, move |_| refresh(&orientation_rt));
        let load_rt = rt.clone();
        dom::listen(&window, "load", false, move |_| {
            refresh(&load_rt);
            load_rt.borrow_mut().on_scroll();
        });

        rt.borrow_mut().request_frame();
        rt
    }

    fn on_scroll(&mut self) {
        self.core.on_scroll(dom::scroll_y(&self.window));
        self.request_frame();
    }

    fn request_frame(&mut self) {
        if self.scheduler.request() {
            self.schedule();
        }
    }

    fn schedule(&mut self) {
        let Some(callback) = &self.on_frame else {
            return;
        };
        if self.window.request_animation_frame(callback.as_ref().unchecked_ref()).is_err() {
            // Nothing is pending; let the next input retry.
            self.scheduler.begin_frame();
        }
    }

    fn frame(&mut self) {
        self.scheduler.begin_frame();
        let frame = self.core.tick();
        render::apply(&self.els, &frame);
        if !self.core.reduced_motion() {
            render::apply_parallax(&self.els, self.core.layout.viewport.height);
        }
        if self.scheduler.end_frame(self.core.is_settled()) {
            self.schedule();
        }
    }

    /// Measure geometry. The gallery section is resized first because its
    /// height moves everything below it.
    fn measure(&self) -> LayoutSnapshot {
        let scroll_y = dom::scroll_y(&self.window);
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let mut viewport = Viewport { width, height, doc_height: 0.0 };

        let gallery = match (&self.els.gallery_section, &self.els.gallery_track) {
            (Some(section), Some(track)) => {
                let depths = self
                    .els
                    .gallery_items
                    .iter()
                    .map(|item| {
                        item.get_attribute("data-depth")
                            .and_then(|d| d.trim().parse::<f64>().ok())
                            .unwrap_or(0.0)
                    })
                    .collect();
                let metrics = GalleryMetrics::measure(
                    f64::from(section.offset_top()),
                    f64::from(track.scroll_width()),
                    &viewport,
                    depths,
                );
                set_style(section, "height", &format!("{}px", metrics.section_height));
                Some(metrics)
            }
            _ => None,
        };

        let timeline = self.els.timeline.as_ref().map(|el| {
            let span = Span { top: dom::doc_top(el, scroll_y), height: f64::from(el.offset_height()) };
            let step_tops: Vec<f64> = self
                .els
                .timeline_steps
                .iter()
                .map(|step| dom::doc_top(step, scroll_y))
                .collect();
            TimelineMetrics::measure(span, &step_tops, &viewport)
        });

        let hero = self
            .els
            .hero
            .as_ref()
            .map(|el| Span { top: f64::from(el.offset_top()), height: f64::from(el.offset_height()) });

        let nav_sections = self
            .els
            .nav_links
            .iter()
            .map(|link| {
                let href = link.get_attribute("href")?;
                let target = self.document.get_element_by_id(anchor_target(&href)?)?;
                Some(dom::doc_top(&target, scroll_y))
            })
            .collect();

        let root_height = self.els.root.as_ref().map_or(0, web_sys::Element::scroll_height);
        let body_height = self.els.body.as_ref().map_or(0, |b| b.scroll_height());
        viewport.doc_height = f64::from(root_height.max(body_height));

        LayoutSnapshot { viewport, hero, gallery, timeline, nav_sections }
    }

    fn policy(&self) -> InteractionPolicy {
        InteractionPolicy {
            reduced_motion: self.core.reduced_motion(),
            coarse_pointer: dom::media_matches(&self.window, "(pointer: coarse)"),
            viewport_width: self.core.layout.viewport.width,
        }
    }
}

/// Re-measure and reconcile pointer bindings. Runs at start and on every
/// resize, orientation change and load.
fn refresh(rt: &Handle) {
    let mut this = rt.borrow_mut();
    let layout = this.measure();
    this.core.refresh_layout(layout);

    let policy = this.policy();
    let cards = this.els.tilt_cards.len();
    let changes = this.core.update_interaction(policy, cards);

    match changes.hero {
        BindingChange::Attach => {
            this.hero_listeners = this.els.hero.as_ref().map(|hero| bind_hero(Rc::downgrade(rt), hero));
        }
        BindingChange::Detach => this.hero_listeners = None,
        BindingChange::Keep => {}
    }

    for (i, change) in changes.tilt.into_iter().enumerate() {
        let Some(card) = this.els.tilt_cards.get(i).cloned() else {
            continue;
        };
        match change {
            BindingChange::Attach => this.tilt_listeners[i] = Some(bind_tilt(card)),
            BindingChange::Detach => {
                this.tilt_listeners[i] = None;
                write_tilt(&card, Tilt::FLAT);
            }
            BindingChange::Keep => {}
        }
    }

    this.request_frame();
}

fn client_point(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn bind_hero(rt: Weak<RefCell<Runtime>>, hero: &web_sys::HtmlElement) -> PointerListeners {
    let bounds_el = hero.clone();
    let move_rt = rt.clone();
    PointerListeners::attach(
        hero,
        move |event| {
            let (Some(rt), Some((x, y))) = (move_rt.upgrade(), client_point(&event)) else {
                return;
            };
            let mut rt = rt.borrow_mut();
            rt.core.on_pointer_move(dom::rect(&bounds_el), x, y);
            rt.request_frame();
        },
        move |_| {
            if let Some(rt) = rt.upgrade() {
                let mut rt = rt.borrow_mut();
                rt.core.on_pointer_leave();
                rt.request_frame();
            }
        },
    )
}

fn bind_tilt(card: web_sys::HtmlElement) -> PointerListeners {
    let move_card = card.clone();
    let leave_card = card.clone();
    PointerListeners::attach(
        &card,
        move |event| {
            if let Some((x, y)) = client_point(&event) {
                write_tilt(&move_card, Tilt::toward(dom::rect(&move_card), x, y));
            }
        },
        move |_| write_tilt(&leave_card, Tilt::FLAT),
    )
}

fn write_tilt(card: &web_sys::HtmlElement, tilt: Tilt) {
    set_style(card, "--rx", &tilt.rx_css());
    set_style(card, "--ry", &tilt.ry_css());
}
