use crate::dom::{self, EventListenerHandle, FrameThrottle};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window.
///
/// Moves only store the newest client position; one throttled frame turns it
/// into a normalized sample for the spring.
pub fn wire_pointer_tracking(
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> Option<(EventListenerHandle, Rc<FrameThrottle>)> {
    let window = web::window()?;

    let ctx_frame = frame_ctx.clone();
    let throttle = Rc::new(FrameThrottle::new(move || {
        ctx_frame.borrow_mut().apply_pointer();
    }));

    let ctx_move = frame_ctx.clone();
    let throttle_move = throttle.clone();
    let handle = dom::listen(&window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        ctx_move.borrow_mut().raw_pointer = Some((ev.client_x() as f32, ev.client_y() as f32));
        throttle_move.request();
    })?;
    log::info!("[pointer] tracking wired");
    Some((handle, throttle))
}
