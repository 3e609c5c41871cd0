use super::constants::*;
use super::keyframes::{loop_phase, looping};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// Element counts for each decorative layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub nodes: usize,
    pub connections: usize,
    pub orbitals: usize,
    pub labels: usize,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            nodes: NODE_COUNT,
            connections: CONNECTION_COUNT,
            orbitals: ORBITAL_COUNT,
            labels: LABEL_COUNT,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Apply `data-*` style overrides; values that fail to parse are ignored
    /// and counts are capped at [`OVERRIDE_COUNT_FACTOR`] times the default.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let count = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|n| n.min((default * OVERRIDE_COUNT_FACTOR) as u64) as usize)
        };
        if let Some(n) = count("nodes", NODE_COUNT) {
            self.nodes = n;
        }
        if let Some(n) = count("connections", CONNECTION_COUNT) {
            self.connections = n;
        }
        if let Some(n) = count("orbitals", ORBITAL_COUNT) {
            self.orbitals = n;
        }
        if let Some(n) = count("labels", LABEL_COUNT) {
            self.labels = n;
        }
        if let Some(seed) = lookup("seed").and_then(|v| v.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        self
    }
}

/// Depth layer; each moves at its own parallax rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Nodes,
    Connections,
    Orbitals,
    Labels,
}

impl Layer {
    pub fn parallax_scale(self) -> Vec2 {
        match self {
            Layer::Nodes => Vec2::from(NODE_PARALLAX),
            Layer::Connections => Vec2::from(CONNECTION_PARALLAX),
            Layer::Labels => Vec2::from(LABEL_PARALLAX),
            Layer::Orbitals => Vec2::ZERO,
        }
    }

    /// Pixel offset for a smoothed pointer in `[-1, 1]`.
    #[inline]
    pub fn parallax(self, pointer: Vec2) -> Vec2 {
        pointer * self.parallax_scale()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
    /// Percent of the viewport.
    pub position: Vec2,
    pub size: f32,
    pub delay: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub p1: Vec2,
    pub p2: Vec2,
    pub delay: f32,
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalSystem {
    pub center: Vec2,
    pub radius: f32,
    pub satellites: usize,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingLabel {
    pub position: Vec2,
    pub text: &'static str,
    pub delay: f32,
    pub duration: f32,
}

#[inline]
fn draw(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

#[inline]
fn draw_point(rng: &mut impl Rng, range: (f32, f32)) -> Vec2 {
    let x = draw(rng, range);
    let y = draw(rng, range);
    Vec2::new(x, y)
}

/// The decorative background, drawn once and then only read.
///
/// A field cannot be re-rolled; owners build it when the layer mounts and keep
/// it for the layer's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    nodes: Vec<NetworkNode>,
    connections: Vec<Connection>,
    orbitals: Vec<OrbitalSystem>,
    labels: Vec<FloatingLabel>,
}

impl ParticleField {
    pub fn generate(config: &FieldConfig, rng: &mut impl Rng) -> Self {
        let nodes = (0..config.nodes)
            .map(|_| NetworkNode {
                position: draw_point(rng, POSITION_PCT),
                size: draw(rng, NODE_SIZE_PX),
                delay: draw(rng, NODE_DELAY_SEC),
                speed: draw(rng, NODE_SPEED),
            })
            .collect();
        let connections = (0..config.connections)
            .map(|_| Connection {
                p1: draw_point(rng, POSITION_PCT),
                p2: draw_point(rng, POSITION_PCT),
                delay: draw(rng, CONNECTION_DELAY_SEC),
                duration: draw(rng, CONNECTION_DURATION_SEC),
            })
            .collect();
        let orbitals = (0..config.orbitals)
            .map(|_| OrbitalSystem {
                center: draw_point(rng, ORBITAL_CENTER_PCT),
                radius: draw(rng, ORBITAL_RADIUS_PX),
                satellites: rng.gen_range(ORBITAL_SATELLITES.0..=ORBITAL_SATELLITES.1),
                speed: draw(rng, ORBITAL_SPEED),
            })
            .collect();
        let labels = (0..config.labels)
            .map(|i| FloatingLabel {
                position: draw_point(rng, POSITION_PCT),
                text: LABEL_TEXTS[i % LABEL_TEXTS.len()],
                delay: draw(rng, LABEL_DELAY_SEC),
                duration: draw(rng, LABEL_DURATION_SEC),
            })
            .collect();
        Self {
            nodes,
            connections,
            orbitals,
            labels,
        }
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn orbitals(&self) -> &[OrbitalSystem] {
        &self.orbitals
    }

    pub fn labels(&self) -> &[FloatingLabel] {
        &self.labels
    }

    pub fn satellite_count(&self) -> usize {
        self.orbitals.iter().map(|o| o.satellites).sum()
    }

    /// Per-frame placement of every element for a smoothed pointer and time.
    pub fn layout(&self, pointer: Vec2, t: f32) -> FieldFrame {
        let node_shift = Layer::Nodes.parallax(pointer);
        let connection_shift = Layer::Connections.parallax(pointer);
        let label_shift = Layer::Labels.parallax(pointer);

        let nodes = self
            .nodes
            .iter()
            .map(|n| {
                let period = n.speed * NODE_PERIOD_PER_SPEED;
                NodeFrame {
                    base_pct: n.position,
                    offset_px: node_shift,
                    size: n.size,
                    scale: looping(&NODE_SCALE_KEYS, t, n.delay, period),
                    opacity: looping(&NODE_OPACITY_KEYS, t, n.delay, period),
                }
            })
            .collect();

        let connections = self
            .connections
            .iter()
            .map(|c| ConnectionFrame {
                p1_pct: c.p1,
                p2_pct: c.p2,
                progress: loop_phase(t, c.delay, c.duration).unwrap_or(0.0),
            })
            .collect();

        let orbitals = self
            .orbitals
            .iter()
            .map(|o| {
                let turn = loop_phase(t, 0.0, o.speed * ORBIT_PERIOD_PER_SPEED).unwrap_or(0.0);
                let rotation = turn * std::f32::consts::TAU;
                let satellites = (0..o.satellites)
                    .map(|i| {
                        let angle = (i as f32 / o.satellites as f32) * std::f32::consts::TAU
                            + rotation;
                        Vec2::new(o.radius * angle.cos(), o.radius * angle.sin())
                    })
                    .collect();
                OrbitalFrame {
                    center_pct: o.center,
                    rotation_deg: turn * 360.0,
                    satellites_px: satellites,
                }
            })
            .collect();

        let labels = self
            .labels
            .iter()
            .map(|l| {
                let bob = looping(&LABEL_BOB_KEYS_PX, t, l.delay, l.duration);
                LabelFrame {
                    base_pct: l.position,
                    offset_px: label_shift + Vec2::new(0.0, bob),
                    opacity: looping(&LABEL_OPACITY_KEYS, t, l.delay, l.duration),
                }
            })
            .collect();

        FieldFrame {
            connection_offset_px: connection_shift,
            nodes,
            connections,
            orbitals,
            labels,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeFrame {
    pub base_pct: Vec2,
    pub offset_px: Vec2,
    pub size: f32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionFrame {
    pub p1_pct: Vec2,
    pub p2_pct: Vec2,
    /// Drawn fraction of the line, 0..1.
    pub progress: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalFrame {
    pub center_pct: Vec2,
    pub rotation_deg: f32,
    pub satellites_px: SmallVec<[Vec2; 5]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelFrame {
    pub base_pct: Vec2,
    pub offset_px: Vec2,
    pub opacity: f32,
}

/// Output of [`ParticleField::layout`]; connections share one layer offset.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldFrame {
    pub connection_offset_px: Vec2,
    pub nodes: Vec<NodeFrame>,
    pub connections: Vec<ConnectionFrame>,
    pub orbitals: Vec<OrbitalFrame>,
    pub labels: Vec<LabelFrame>,
}
