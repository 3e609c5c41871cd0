use super::spring::{SmoothedPointer, SpringParams};
use glam::Vec2;

/// Pointer position mapped to `[-1, 1]` per axis, centered on the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        if !(viewport_w > 0.0 && viewport_h > 0.0) {
            return Self::default();
        }
        let x = (client_x / viewport_w) * 2.0 - 1.0;
        let y = (client_y / viewport_h) * 2.0 - 1.0;
        Self {
            x: if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 },
            y: if y.is_finite() { y.clamp(-1.0, 1.0) } else { 0.0 },
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Latest raw sample plus its smoothed follower.
///
/// Raw events only record; the frame loop calls [`PointerTracker::advance`]
/// once per animation frame, so a burst of moves costs one spring update.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    pending: Option<PointerSample>,
    last: PointerSample,
    smoothed: SmoothedPointer,
}

impl PointerTracker {
    pub fn new(params: SpringParams) -> Self {
        Self {
            pending: None,
            last: PointerSample::default(),
            smoothed: SmoothedPointer::new(params),
        }
    }

    /// Store a raw sample; a newer call before the next frame replaces it.
    #[inline]
    pub fn record(&mut self, sample: PointerSample) {
        self.pending = Some(sample);
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Most recent sample applied as the spring target.
    #[inline]
    pub fn last_sample(&self) -> PointerSample {
        self.last
    }

    pub fn advance(&mut self, dt_sec: f32) -> Vec2 {
        if let Some(sample) = self.pending.take() {
            self.last = sample;
            self.smoothed.set_target(sample.as_vec2());
        }
        self.smoothed.step(dt_sec)
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed.value()
    }
}
