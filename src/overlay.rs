use crate::constants::{EMBED_FALLBACK_ID, EMBED_LOADING_ID, HIDDEN_CLASS};
use crate::core::{overlay_style, EmbedState};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", &overlay_style(true));
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", &overlay_style(false));
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .is_some_and(|el| el.class_list().contains(HIDDEN_CLASS))
}

/// Reflect the scene frame's load state onto the loading overlay and fallback.
pub fn apply_embed_state(document: &web::Document, state: EmbedState) {
    if state.shows_loading() {
        show(document, EMBED_LOADING_ID);
    } else {
        hide(document, EMBED_LOADING_ID);
    }
    if state.shows_fallback() {
        show(document, EMBED_FALLBACK_ID);
    } else if !is_hidden(document, EMBED_FALLBACK_ID) {
        hide(document, EMBED_FALLBACK_ID);
    }
}
