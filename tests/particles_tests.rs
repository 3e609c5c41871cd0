// Host-side tests for the decorative particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod keyframes {
        include!("../src/core/keyframes.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::constants::*;
use crate::core::particles::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn make_field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::generate(&FieldConfig::default(), &mut rng)
}

fn in_range(v: f32, (lo, hi): (f32, f32)) -> bool {
    v >= lo && v <= hi
}

#[test]
fn default_counts_match_reference_page() {
    let f = make_field(7);
    assert_eq!(f.nodes().len(), 25);
    assert_eq!(f.connections().len(), 12);
    assert_eq!(f.orbitals().len(), 8);
    assert_eq!(f.labels().len(), 15);
}

#[test]
fn generated_values_respect_ranges() {
    let f = make_field(11);
    for n in f.nodes() {
        assert!(in_range(n.position.x, POSITION_PCT) && in_range(n.position.y, POSITION_PCT));
        assert!(in_range(n.size, NODE_SIZE_PX));
        assert!(in_range(n.delay, NODE_DELAY_SEC));
        assert!(in_range(n.speed, NODE_SPEED));
    }
    for c in f.connections() {
        assert!(in_range(c.p1.x, POSITION_PCT) && in_range(c.p2.y, POSITION_PCT));
        assert!(in_range(c.delay, CONNECTION_DELAY_SEC));
        assert!(in_range(c.duration, CONNECTION_DURATION_SEC));
    }
    for o in f.orbitals() {
        assert!(in_range(o.center.x, ORBITAL_CENTER_PCT));
        assert!(in_range(o.center.y, ORBITAL_CENTER_PCT));
        assert!(in_range(o.radius, ORBITAL_RADIUS_PX));
        assert!((2..=5).contains(&o.satellites));
        assert!(in_range(o.speed, ORBITAL_SPEED));
    }
    for l in f.labels() {
        assert!(in_range(l.delay, LABEL_DELAY_SEC));
        assert!(in_range(l.duration, LABEL_DURATION_SEC));
    }
}

#[test]
fn labels_use_fixed_texts_in_order() {
    let f = make_field(3);
    let texts: Vec<&str> = f.labels().iter().map(|l| l.text).collect();
    assert_eq!(texts, LABEL_TEXTS.to_vec());
}

#[test]
fn label_texts_cycle_past_the_list() {
    let config = FieldConfig {
        labels: 17,
        ..FieldConfig::default()
    };
    let f = ParticleField::generate(&config, &mut StdRng::seed_from_u64(1));
    assert_eq!(f.labels()[15].text, "CI/CD");
    assert_eq!(f.labels()[16].text, "K8s");
}

#[test]
fn same_seed_gives_same_field() {
    assert_eq!(make_field(42), make_field(42));
    assert_ne!(make_field(42), make_field(43));
}

#[test]
fn layout_never_regenerates_elements() {
    let field = make_field(5);
    let snapshot = field.clone();
    let nodes_ptr = field.nodes().as_ptr();
    for i in 0..240 {
        let pointer = Vec2::new((i as f32 * 0.1).sin(), (i as f32 * 0.07).cos());
        let _ = field.layout(pointer, i as f32 / 60.0);
    }
    assert_eq!(field, snapshot);
    assert_eq!(field.nodes().as_ptr(), nodes_ptr);
}

#[test]
fn layout_positions_are_stable_for_same_inputs() {
    let field = make_field(9);
    let a = field.layout(Vec2::new(0.3, -0.2), 2.5);
    let b = field.layout(Vec2::new(0.3, -0.2), 2.5);
    assert_eq!(a, b);
    for (frame, node) in a.nodes.iter().zip(field.nodes()) {
        assert_eq!(frame.base_pct, node.position);
    }
}

#[test]
fn parallax_scales_differ_per_layer() {
    let field = make_field(13);
    let frame = field.layout(Vec2::new(1.0, 1.0), 0.0);
    assert_eq!(frame.nodes[0].offset_px, Vec2::new(40.0, 30.0));
    assert_eq!(frame.connection_offset_px, Vec2::new(25.0, 20.0));
    // labels hold their first bob key (-10px) at t=0
    assert_eq!(frame.labels[0].offset_px, Vec2::new(15.0, 12.0 - 10.0));
}

#[test]
fn centered_pointer_gives_no_parallax() {
    let field = make_field(13);
    let frame = field.layout(Vec2::ZERO, 0.0);
    assert!(frame.nodes.iter().all(|n| n.offset_px == Vec2::ZERO));
    assert_eq!(frame.connection_offset_px, Vec2::ZERO);
    assert_eq!(Layer::Orbitals.parallax(Vec2::ONE), Vec2::ZERO);
}

#[test]
fn oscillations_stay_within_keyframe_bounds() {
    let field = make_field(21);
    for step in 0..600 {
        let t = step as f32 * 0.05;
        let frame = field.layout(Vec2::ZERO, t);
        for n in &frame.nodes {
            assert!(n.scale >= 1.0 - 1e-5 && n.scale <= 1.2 + 1e-5);
            assert!(n.opacity >= 0.3 - 1e-5 && n.opacity <= 0.7 + 1e-5);
        }
        for c in &frame.connections {
            assert!((0.0..1.0).contains(&c.progress));
        }
        for l in &frame.labels {
            let bob = l.offset_px.y;
            assert!((-10.0 - 1e-4..=10.0 + 1e-4).contains(&bob));
            assert!(l.opacity >= 0.2 - 1e-5 && l.opacity <= 0.6 + 1e-5);
        }
    }
}

#[test]
fn elements_hold_first_keyframe_before_their_delay() {
    let field = make_field(17);
    let frame = field.layout(Vec2::ZERO, 0.0);
    for (n, node) in frame.nodes.iter().zip(field.nodes()) {
        if node.delay > 0.0 {
            assert_eq!(n.scale, 1.0);
            assert_eq!(n.opacity, 0.3);
        }
    }
    for (c, conn) in frame.connections.iter().zip(field.connections()) {
        if conn.delay > 0.0 {
            assert_eq!(c.progress, 0.0);
        }
    }
}

#[test]
fn elements_are_not_synchronized() {
    let field = make_field(23);
    let frame = field.layout(Vec2::ZERO, 7.3);
    let first = frame.nodes[0].opacity;
    assert!(frame.nodes.iter().any(|n| (n.opacity - first).abs() > 1e-3));
}

#[test]
fn satellites_sit_on_their_orbit_and_rotate() {
    let field = make_field(29);
    let a = field.layout(Vec2::ZERO, 0.0);
    let b = field.layout(Vec2::ZERO, 1.0);
    for ((oa, ob), sys) in a.orbitals.iter().zip(&b.orbitals).zip(field.orbitals()) {
        assert_eq!(oa.satellites_px.len(), sys.satellites);
        for p in &oa.satellites_px {
            assert!((p.length() - sys.radius).abs() < 1e-3);
        }
        assert!(ob.rotation_deg > oa.rotation_deg);
        assert!((oa.satellites_px[0] - ob.satellites_px[0]).length() > 1e-3);
    }
    assert_eq!(
        field.satellite_count(),
        field.orbitals().iter().map(|o| o.satellites).sum::<usize>()
    );
}

#[test]
fn overrides_replace_counts_and_ignore_garbage() {
    let attrs: HashMap<&str, &str> = [
        ("nodes", "5"),
        ("connections", "not-a-number"),
        ("labels", " 3 "),
        ("seed", "99"),
    ]
    .into_iter()
    .collect();
    let config = FieldConfig::default().with_overrides(|k| attrs.get(k).map(|v| v.to_string()));
    assert_eq!(config.nodes, 5);
    assert_eq!(config.connections, CONNECTION_COUNT);
    assert_eq!(config.orbitals, ORBITAL_COUNT);
    assert_eq!(config.labels, 3);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn empty_config_builds_empty_field() {
    let config = FieldConfig {
        nodes: 0,
        connections: 0,
        orbitals: 0,
        labels: 0,
        seed: None,
    };
    let f = ParticleField::generate(&config, &mut StdRng::seed_from_u64(0));
    let frame = f.layout(Vec2::ONE, 1.0);
    assert!(frame.nodes.is_empty() && frame.labels.is_empty());
    assert_eq!(f.satellite_count(), 0);
}

#[test]
fn oversized_overrides_are_capped() {
    let attrs: HashMap<&str, &str> = [
        ("nodes", "4000000000"),
        ("connections", "99999999999999999999999"),
        ("orbitals", "64"),
        ("labels", "120"),
    ]
    .into_iter()
    .collect();
    let config = FieldConfig::default().with_overrides(|k| attrs.get(k).map(|v| v.to_string()));
    assert_eq!(config.nodes, NODE_COUNT * OVERRIDE_COUNT_FACTOR);
    // does not even parse as u64, so the default stays
    assert_eq!(config.connections, CONNECTION_COUNT);
    assert_eq!(config.orbitals, ORBITAL_COUNT * OVERRIDE_COUNT_FACTOR);
    assert_eq!(config.labels, LABEL_COUNT * OVERRIDE_COUNT_FACTOR);
}
