pub mod constants;
pub mod embed;
pub mod keyframes;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod spring;

pub use embed::{overlay_style, EmbedState};
pub use motion::{EntrancePreset, EntranceTween, FloatPreset, Pose};
pub use nav::{scroll_to_section, ScrollHost};
pub use particles::{FieldConfig, FieldFrame, ParticleField};
pub use pointer::{PointerSample, PointerTracker};
pub use reveal::{RevealController, ScrollEffects, SectionRect};
pub use spring::SpringParams;
