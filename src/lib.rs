#![cfg(target_arch = "wasm32")]
use crate::core::constants::{CONTACT_EMAIL, PROFILE_URL};
use crate::core::{FieldConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Everything the mounted page holds on to. Dropping it releases listeners,
/// pending frames and the generated background elements.
struct Page {
    _listeners: Vec<dom::EventListenerHandle>,
    _throttles: Vec<Rc<dom::FrameThrottle>>,
    _loop: frame::RafLoop,
    _frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn wire_contact_links(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::CONTACT_EMAIL_ID) {
        _ = el.set_attribute("href", &format!("mailto:{CONTACT_EMAIL}"));
    }
    if let Some(el) = document.get_element_by_id(constants::CONTACT_PROFILE_ID) {
        _ = el.set_attribute("href", PROFILE_URL);
        _ = el.set_attribute("target", "_blank");
        _ = el.set_attribute("rel", "noopener noreferrer");
    }
}

fn build_field(document: &web::Document) -> anyhow::Result<Option<render::FieldView>> {
    let Some(container) = document.get_element_by_id(constants::FIELD_CONTAINER_ID) else {
        log::warn!("[field] missing #{}", constants::FIELD_CONTAINER_ID);
        return Ok(None);
    };
    let config = FieldConfig::default().with_overrides(|key| {
        container.get_attribute(&format!("data-{key}"))
    });
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let field = ParticleField::generate(&config, &mut rng);
    Ok(Some(render::FieldView::build(document, &container, field)?))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Unmount the page: remove listeners, cancel frames, drop the background.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("[page] torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::debug!("[page] already mounted");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    wire_contact_links(&document);

    let field = match build_field(&document) {
        Ok(f) => f,
        Err(e) => {
            log::error!("[field] build failed: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(field)));
    frame_ctx.borrow_mut().discover(&document);

    let mut listeners = Vec::new();
    let mut throttles = Vec::new();

    if let Some((handle, throttle)) = events::wire_pointer_tracking(&frame_ctx) {
        listeners.push(handle);
        throttles.push(throttle);
    }
    let (scroll_handles, scroll_throttle) = events::wire_scroll_tracking(&frame_ctx);
    listeners.extend(scroll_handles);
    throttles.extend(scroll_throttle);
    listeners.extend(events::wire_navigation(&document));
    listeners.extend(events::wire_embed_frame(&document));

    let raf = frame::start_loop(frame_ctx.clone());
    log::info!("[page] mounted with {} listeners", listeners.len());

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _listeners: listeners,
            _throttles: throttles,
            _loop: raf,
            _frame_ctx: frame_ctx,
        });
    });
    Ok(())
}
