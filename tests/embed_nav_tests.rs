// Host-side tests for the scene frame lifecycle and in-page navigation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod embed {
        include!("../src/core/embed.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use crate::core::embed::*;
use crate::core::nav::*;
use std::cell::RefCell;

#[test]
fn embed_starts_loading_without_fallback() {
    let s = EmbedState::new();
    assert_eq!(s, EmbedState::Loading);
    assert!(s.shows_loading());
    assert!(!s.shows_fallback());
}

#[test]
fn embed_load_dismisses_overlay() {
    let mut s = EmbedState::new();
    assert!(s.on_load());
    assert!(!s.shows_loading());
    assert!(!s.shows_fallback());
}

#[test]
fn embed_error_swaps_in_fallback() {
    let mut s = EmbedState::new();
    assert!(s.on_error());
    assert_eq!(s, EmbedState::Failed);
    assert!(!s.shows_loading());
    assert!(s.shows_fallback());
}

#[test]
fn embed_first_outcome_wins() {
    let mut failed = EmbedState::new();
    failed.on_error();
    assert!(!failed.on_load());
    assert!(failed.shows_fallback());

    let mut loaded = EmbedState::new();
    loaded.on_load();
    assert!(!loaded.on_error());
    assert!(!loaded.on_load());
    assert_eq!(loaded, EmbedState::Loaded);
}

struct FakeHost {
    sections: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
}

impl FakeHost {
    fn new(sections: &[&'static str]) -> Self {
        Self {
            sections: sections.to_vec(),
            scrolled: RefCell::new(Vec::new()),
        }
    }
}

impl ScrollHost for FakeHost {
    type Section = String;

    fn find_section(&self, id: &str) -> Option<String> {
        self.sections
            .iter()
            .find(|s| **s == id)
            .map(|s| s.to_string())
    }

    fn smooth_scroll_to(&self, section: &String) {
        self.scrolled.borrow_mut().push(section.clone());
    }
}

#[test]
fn scrolls_to_existing_section() {
    let host = FakeHost::new(&["home", "about", "contact"]);
    assert!(scroll_to_section(&host, "about"));
    assert_eq!(*host.scrolled.borrow(), vec!["about".to_string()]);
}

#[test]
fn accepts_hash_prefixed_ids() {
    let host = FakeHost::new(&["contact"]);
    assert!(scroll_to_section(&host, "#contact"));
    assert_eq!(host.scrolled.borrow().len(), 1);
}

#[test]
fn missing_section_is_a_silent_no_op() {
    let host = FakeHost::new(&["home", "about"]);
    assert!(!scroll_to_section(&host, "portfolio"));
    assert!(!scroll_to_section(&host, ""));
    assert!(!scroll_to_section(&host, "#"));
    assert!(host.scrolled.borrow().is_empty());
}

#[test]
fn overlays_fade_out_instead_of_vanishing() {
    let hidden = overlay_style(false);
    assert!(hidden.contains("opacity:0"));
    assert!(hidden.contains("transition:opacity 1s"));
    assert!(!hidden.contains("display:none"));
    assert!(overlay_style(true).contains("opacity:1"));
}
