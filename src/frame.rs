use crate::constants::*;
use crate::core::{
    EntrancePreset, EntranceTween, FloatPreset, PointerSample, PointerTracker, Pose,
    RevealController, SectionRect,
};
use crate::dom::{self, set_style};
use crate::render::FieldView;
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An element animated by an entrance tween.
pub struct RevealTarget {
    pub el: web::HtmlElement,
    /// Owning section id; `None` plays from mount time.
    pub section: Option<String>,
    pub tween: EntranceTween,
    pub done: bool,
}

pub struct ScrollLinked {
    pub el: web::HtmlElement,
    pub section: String,
}

pub struct FrameContext {
    pub pointer: PointerTracker,
    pub raw_pointer: Option<(f32, f32)>,
    pub field: Option<FieldView>,

    pub reveal: RevealController,
    pub sections: Vec<(String, web::Element)>,
    pub entered_at: FnvHashMap<String, Instant>,
    pub reveals: Vec<RevealTarget>,
    pub scroll_linked: Vec<ScrollLinked>,
    pub floats: Vec<(web::HtmlElement, FloatPreset)>,

    pub mounted_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(field: Option<FieldView>) -> Self {
        let now = Instant::now();
        Self {
            pointer: PointerTracker::default(),
            raw_pointer: None,
            field,
            reveal: RevealController::default(),
            sections: Vec::new(),
            entered_at: FnvHashMap::default(),
            reveals: Vec::new(),
            scroll_linked: Vec::new(),
            floats: Vec::new(),
            mounted_at: now,
            last_instant: now,
        }
    }

    /// Collect sections and animated elements from the document.
    pub fn discover(&mut self, document: &web::Document) {
        for el in dom::query_all(document, SECTION_SELECTOR) {
            let id = el.id();
            if id.is_empty() {
                log::warn!("[reveal] tracked section without id skipped");
                continue;
            }
            self.reveal.register(&id);
            self.sections.push((id, el));
        }

        for el in dom::query_all(document, REVEAL_SELECTOR) {
            let Some(preset) = el
                .get_attribute(ATTR_REVEAL)
                .and_then(|v| EntrancePreset::from_attr(&v))
            else {
                log::debug!("[reveal] unknown preset on #{}", el.id());
                continue;
            };
            let delay = el
                .get_attribute(ATTR_REVEAL_DELAY)
                .and_then(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(0.0);
            let section = if el.has_attribute(ATTR_REVEAL_ON_MOUNT) {
                None
            } else {
                match self.owning_section(&el) {
                    Some(id) => Some(id),
                    None => continue,
                }
            };
            let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let tween = EntranceTween::new(preset, delay);
            apply_pose(&el, tween.sample(None));
            self.reveals.push(RevealTarget {
                el,
                section,
                tween,
                done: false,
            });
        }

        for el in dom::query_all(document, SCROLL_LINKED_SELECTOR) {
            let section = el
                .get_attribute(ATTR_SCROLL_LINKED)
                .filter(|v| !v.is_empty())
                .or_else(|| self.owning_section(&el));
            if let (Some(section), Ok(el)) = (section, el.dyn_into::<web::HtmlElement>()) {
                self.scroll_linked.push(ScrollLinked { el, section });
            }
        }

        for el in dom::query_all(document, FLOAT_SELECTOR) {
            let preset = el
                .get_attribute(ATTR_FLOAT)
                .and_then(|v| FloatPreset::from_attr(&v));
            if let (Some(preset), Ok(el)) = (preset, el.dyn_into::<web::HtmlElement>()) {
                self.floats.push((el, preset));
            }
        }

        log::info!(
            "[reveal] sections={} reveals={} scroll_linked={} floats={}",
            self.sections.len(),
            self.reveals.len(),
            self.scroll_linked.len(),
            self.floats.len()
        );
    }

    fn owning_section(&self, el: &web::Element) -> Option<String> {
        let node: &web::Node = el;
        self.sections
            .iter()
            .find(|(_, section)| section.contains(Some(node)))
            .map(|(id, _)| id.clone())
    }

    /// Turn the newest raw pointer position into a sample for the tracker.
    pub fn apply_pointer(&mut self) {
        if let Some((cx, cy)) = self.raw_pointer.take() {
            let (w, h) = dom::viewport_size();
            self.pointer.record(PointerSample::from_client(cx, cy, w, h));
        }
    }

    /// Re-measure tracked sections after scroll or resize.
    pub fn refresh_sections(&mut self) {
        let (_, viewport_h) = dom::viewport_size();
        let now = Instant::now();
        for (id, el) in &self.sections {
            let r = el.get_bounding_client_rect();
            let rect = SectionRect {
                top: r.top() as f32,
                height: r.height() as f32,
            };
            if self.reveal.update(id, rect, viewport_h) {
                log::info!("[reveal] #{id} entered viewport");
                self.entered_at.insert(id.clone(), now);
            }
        }
        for linked in &self.scroll_linked {
            if let Some(fx) = self.reveal.effects(&linked.section) {
                set_style(&linked.el, "opacity", &format!("{:.3}", fx.opacity));
                set_style(
                    &linked.el,
                    "transform",
                    &format!("translateY({:.2}%)", fx.shift_pct),
                );
            }
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let t = (now - self.mounted_at).as_secs_f32();

        let smoothed = self.pointer.advance(dt_sec);
        if let Some(view) = &self.field {
            let layout = view.field().layout(smoothed, t);
            view.apply(&layout);
        }

        for target in self.reveals.iter_mut().filter(|r| !r.done) {
            let started = match &target.section {
                None => Some(self.mounted_at),
                Some(id) => self.entered_at.get(id).copied(),
            };
            let Some(started) = started else {
                continue;
            };
            let elapsed = (now - started).as_secs_f32();
            apply_pose(&target.el, target.tween.sample(Some(elapsed)));
            target.done = target.tween.is_finished(elapsed);
        }

        for (el, preset) in &self.floats {
            let offset = preset.offset(t);
            set_style(
                el,
                "transform",
                &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
            );
        }
    }
}

fn apply_pose(el: &web::HtmlElement, pose: Pose) {
    set_style(el, "opacity", &format!("{:.3}", pose.opacity));
    set_style(el, "transform", &pose.to_css_transform());
}

/// Self-rescheduling `requestAnimationFrame` loop. Dropping it cancels the
/// pending frame and releases the tick closure.
pub struct RafLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        _ = self.tick.borrow_mut().take();
    }
}

fn schedule(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            request_id.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RafLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let request_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let request_clone = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_clone.set(None);
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone, &request_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &request_id);
    RafLoop { tick, request_id }
}
