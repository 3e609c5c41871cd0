use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS px; `(0, 0)` when unavailable.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// A registered DOM listener, removed from its target on drop.
pub struct EventListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Option<EventListenerHandle> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => Some(EventListenerHandle {
            target: target.clone(),
            event,
            closure,
        }),
        Err(e) => {
            log::warn!("[dom] could not listen for {event}: {e:?}");
            None
        }
    }
}

#[inline]
pub fn add_click_listener(
    el: &web::Element,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListenerHandle> {
    listen(el, "click", move |_ev| handler())
}

/// Runs a callback on the next animation frame, at most once per frame.
///
/// Every `request` cancels a not-yet-fired earlier request before scheduling,
/// so only the newest input is processed. Dropping the throttle cancels any
/// pending frame.
pub struct FrameThrottle {
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameThrottle {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            on_frame();
        }) as Box<dyn FnMut()>);
        Self { pending, callback }
    }

    pub fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(id) = self.pending.take() {
            _ = w.cancel_animation_frame(id);
        }
        match w.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("[dom] requestAnimationFrame failed: {e:?}"),
        }
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameThrottle {
    fn drop(&mut self) {
        self.cancel();
    }
}
