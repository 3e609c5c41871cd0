use crate::dom::{self, EventListenerHandle, FrameThrottle};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-measure tracked sections on scroll and resize, at most once per frame.
pub fn wire_scroll_tracking(
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> (Vec<EventListenerHandle>, Option<Rc<FrameThrottle>>) {
    let Some(window) = web::window() else {
        return (Vec::new(), None);
    };

    let ctx_frame = frame_ctx.clone();
    let throttle = Rc::new(FrameThrottle::new(move || {
        ctx_frame.borrow_mut().refresh_sections();
    }));

    let mut handles = Vec::new();
    for event in ["scroll", "resize"] {
        let throttle_ev = throttle.clone();
        if let Some(h) = dom::listen(&window, event, move |_ev| throttle_ev.request()) {
            handles.push(h);
        }
    }

    // sections already on screen at load
    throttle.request();
    (handles, Some(throttle))
}
