// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive_and_stable() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_SPEED > 0.0);
    // substeps must be finer than the frame clamp
    assert!(SPRING_MAX_SUBSTEP_SEC < SPRING_MAX_FRAME_SEC);
    // explicit integration stays stable when c*h < 2
    assert!(SPRING_DAMPING / SPRING_MASS * SPRING_MAX_SUBSTEP_SEC < 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_ranges_are_ordered() {
    for (lo, hi) in [
        POSITION_PCT,
        ORBITAL_CENTER_PCT,
        NODE_SIZE_PX,
        NODE_DELAY_SEC,
        NODE_SPEED,
        CONNECTION_DELAY_SEC,
        CONNECTION_DURATION_SEC,
        ORBITAL_RADIUS_PX,
        ORBITAL_SPEED,
        LABEL_DELAY_SEC,
        LABEL_DURATION_SEC,
    ] {
        assert!(lo < hi, "range ({lo}, {hi}) is empty");
        assert!(lo >= 0.0);
    }
    assert!(ORBITAL_SATELLITES.0 <= ORBITAL_SATELLITES.1);
    assert!(ORBITAL_SATELLITES.1 <= 5, "satellite frames hold at most five inline");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_counts_cover_every_label() {
    assert_eq!(LABEL_TEXTS.len(), LABEL_COUNT);
    assert!(NODE_COUNT > CONNECTION_COUNT);
    assert!(ORBITAL_COUNT > 0);
}

#[test]
fn parallax_depth_layers_are_ordered() {
    for axis in 0..2 {
        assert!(NODE_PARALLAX[axis] > CONNECTION_PARALLAX[axis]);
        assert!(CONNECTION_PARALLAX[axis] > LABEL_PARALLAX[axis]);
    }
}

#[test]
fn keyframe_tables_are_well_formed() {
    assert_eq!(SCROLL_OPACITY_INPUT.len(), SCROLL_OPACITY_OUTPUT.len());
    assert_eq!(SCROLL_SHIFT_INPUT.len(), SCROLL_SHIFT_OUTPUT_PCT.len());
    assert!(SCROLL_OPACITY_INPUT.windows(2).all(|w| w[0] < w[1]));
    assert!(SCROLL_SHIFT_INPUT.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(SCROLL_OPACITY_INPUT[0], 0.0);
    assert_eq!(*SCROLL_OPACITY_INPUT.last().unwrap_or(&0.0), 1.0);
    // loops return to where they started
    assert_eq!(NODE_SCALE_KEYS[0], NODE_SCALE_KEYS[2]);
    assert_eq!(NODE_OPACITY_KEYS[0], NODE_OPACITY_KEYS[2]);
    assert_eq!(LABEL_BOB_KEYS_PX[0], LABEL_BOB_KEYS_PX[2]);
    assert_eq!(LABEL_OPACITY_KEYS[0], LABEL_OPACITY_KEYS[2]);
}

#[test]
fn external_links_are_well_formed() {
    assert!(EMBED_SCENE_URL.starts_with("https://"));
    assert!(PROFILE_URL.starts_with("https://"));
    assert!(CONTACT_EMAIL.contains('@') && !CONTACT_EMAIL.starts_with("mailto:"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_consistent() {
    for sel in [
        SECTION_SELECTOR,
        REVEAL_SELECTOR,
        FLOAT_SELECTOR,
        SCROLL_LINKED_SELECTOR,
        SCROLL_TARGET_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'));
    }
    assert_eq!(REVEAL_SELECTOR, format!("[{ATTR_REVEAL}]"));
    assert_eq!(FLOAT_SELECTOR, format!("[{ATTR_FLOAT}]"));
    assert_eq!(SCROLL_TARGET_SELECTOR, format!("[{ATTR_SCROLL_TARGET}]"));
    assert_eq!(SCROLL_LINKED_SELECTOR, format!("[{ATTR_SCROLL_LINKED}]"));
    assert!(EMBED_FADE_SEC > 0.0);
    assert_ne!(EMBED_LOADING_ID, EMBED_FALLBACK_ID);
}
