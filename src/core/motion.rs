use super::keyframes::{ease_out_cubic, looping};
use glam::Vec2;

/// Visual pose applied to an element's inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub translate: Vec2,
    pub scale: f32,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            translate: self.translate.lerp(to.translate, t),
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    pub fn to_css_transform(self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Entrance animation styles, named after the `data-reveal` attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePreset {
    FadeUp,
    FadeUpMedium,
    FadeUpSmall,
    SlideLeft,
    SlideRight,
    Pop,
    Card,
}

impl EntrancePreset {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "fade-up" => Some(Self::FadeUp),
            "fade-up-medium" => Some(Self::FadeUpMedium),
            "fade-up-small" => Some(Self::FadeUpSmall),
            "slide-left" => Some(Self::SlideLeft),
            "slide-right" => Some(Self::SlideRight),
            "pop" => Some(Self::Pop),
            "card" => Some(Self::Card),
            _ => None,
        }
    }

    pub fn hidden_pose(self) -> Pose {
        let (translate, scale) = match self {
            Self::FadeUp => (Vec2::new(0.0, 50.0), 1.0),
            Self::FadeUpMedium => (Vec2::new(0.0, 30.0), 1.0),
            Self::FadeUpSmall => (Vec2::new(0.0, 20.0), 1.0),
            Self::SlideLeft => (Vec2::new(-50.0, 0.0), 1.0),
            Self::SlideRight => (Vec2::new(50.0, 0.0), 1.0),
            Self::Pop => (Vec2::ZERO, 0.8),
            Self::Card => (Vec2::new(0.0, 20.0), 0.9),
        };
        Pose {
            opacity: 0.0,
            translate,
            scale,
        }
    }

    pub fn duration_sec(self) -> f32 {
        match self {
            Self::FadeUp | Self::FadeUpMedium | Self::SlideLeft | Self::SlideRight => 0.8,
            Self::FadeUpSmall | Self::Card => 0.6,
            Self::Pop => 0.5,
        }
    }
}

/// One-shot tween from a preset's hidden pose to [`Pose::VISIBLE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTween {
    pub preset: EntrancePreset,
    pub delay_sec: f32,
}

impl EntranceTween {
    pub fn new(preset: EntrancePreset, delay_sec: f32) -> Self {
        Self {
            preset,
            delay_sec: delay_sec.max(0.0),
        }
    }

    /// Pose at `elapsed` seconds since the trigger; `None` means not triggered.
    pub fn sample(&self, elapsed: Option<f32>) -> Pose {
        let hidden = self.preset.hidden_pose();
        let Some(elapsed) = elapsed else {
            return hidden;
        };
        let t = ((elapsed - self.delay_sec) / self.preset.duration_sec()).clamp(0.0, 1.0);
        hidden.lerp(Pose::VISIBLE, ease_out_cubic(t))
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay_sec + self.preset.duration_sec()
    }
}

/// Never-ending hover loops on hero decorations (`data-float`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPreset {
    Portrait,
    ScrollCue,
}

impl FloatPreset {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "portrait" => Some(Self::Portrait),
            "scroll-cue" => Some(Self::ScrollCue),
            _ => None,
        }
    }

    pub fn period_sec(self) -> f32 {
        match self {
            Self::Portrait => 6.0,
            Self::ScrollCue => 1.5,
        }
    }

    pub fn offset(self, t: f32) -> Vec2 {
        let period = self.period_sec();
        match self {
            Self::Portrait => Vec2::new(
                looping(&[0.0, 8.0, 0.0, -8.0, 0.0], t, 0.0, period),
                looping(&[0.0, -15.0, 0.0], t, 0.0, period),
            ),
            Self::ScrollCue => Vec2::new(0.0, looping(&[0.0, 5.0, 0.0], t, 0.0, period)),
        }
    }
}
