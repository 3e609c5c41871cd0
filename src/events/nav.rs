use crate::constants::{ATTR_SCROLL_TARGET, SCROLL_TARGET_SELECTOR};
use crate::core::{scroll_to_section, ScrollHost};
use crate::dom::{self, EventListenerHandle};
use web_sys as web;

/// Smooth-scroll host backed by the live document.
pub struct DocumentHost(pub web::Document);

impl ScrollHost for DocumentHost {
    type Section = web::Element;

    fn find_section(&self, id: &str) -> Option<web::Element> {
        self.0.get_element_by_id(id)
    }

    fn smooth_scroll_to(&self, section: &web::Element) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Wire every `[data-scroll-target]` button to its section.
pub fn wire_navigation(document: &web::Document) -> Vec<EventListenerHandle> {
    let mut handles = Vec::new();
    for el in dom::query_all(document, SCROLL_TARGET_SELECTOR) {
        let Some(target) = el.get_attribute(ATTR_SCROLL_TARGET) else {
            continue;
        };
        let host = DocumentHost(document.clone());
        let handle = dom::add_click_listener(&el, move || {
            if !scroll_to_section(&host, &target) {
                log::debug!("[nav] no section #{target}");
            }
        });
        handles.extend(handle);
    }
    log::info!("[nav] wired {} scroll buttons", handles.len());
    handles
}
