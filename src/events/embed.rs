use crate::constants::EMBED_FRAME_ID;
use crate::core::constants::EMBED_SCENE_URL;
use crate::core::EmbedState;
use crate::dom::{self, EventListenerHandle};
use crate::overlay;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach load/error handling to the hosted scene frame.
///
/// Success dismisses the loading overlay; failure swaps in the static fallback
/// panel. Nothing is retried or propagated.
pub fn wire_embed_frame(document: &web::Document) -> Vec<EventListenerHandle> {
    let Some(frame) = document
        .get_element_by_id(EMBED_FRAME_ID)
        .and_then(|el| el.dyn_into::<web::HtmlIFrameElement>().ok())
    else {
        log::debug!("[embed] no #{EMBED_FRAME_ID}, skipping");
        return Vec::new();
    };

    let state = Rc::new(Cell::new(EmbedState::new()));
    overlay::apply_embed_state(document, state.get());

    let mut handles = Vec::new();
    let (doc_ok, state_ok) = (document.clone(), state.clone());
    handles.extend(dom::listen(&frame, "load", move |_ev| {
        let mut s = state_ok.get();
        if s.on_load() {
            state_ok.set(s);
            log::info!("[embed] scene loaded");
            overlay::apply_embed_state(&doc_ok, s);
        }
    }));
    let (doc_err, state_err) = (document.clone(), state);
    handles.extend(dom::listen(&frame, "error", move |_ev| {
        let mut s = state_err.get();
        if s.on_error() {
            state_err.set(s);
            log::warn!("[embed] scene failed to load, showing fallback");
            overlay::apply_embed_state(&doc_err, s);
        }
    }));

    // listeners first so a cached load is not missed
    if frame.src().is_empty() {
        frame.set_src(EMBED_SCENE_URL);
    }
    handles
}
