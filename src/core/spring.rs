use super::constants::*;
use glam::Vec2;

/// Spring constants for a damped second-order follower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    /// Damping ratio; 1.0 is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One axis of a smoothed signal. Stepped explicitly once per frame so the
/// output is a pure function of previous state, target and `dt`.
#[derive(Clone, Debug)]
pub struct Spring {
    pub params: SpringParams,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by `dt_sec` using semi-implicit Euler sub-steps.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return self.position;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }
        let dt = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringParams {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.params;
        let m = m.max(1e-4);
        for _ in 0..steps {
            let accel = (k * (self.target - self.position) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// Two independent springs following the normalized pointer.
#[derive(Clone, Debug)]
pub struct SmoothedPointer {
    pub x: Spring,
    pub y: Spring,
}

impl Default for SmoothedPointer {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

impl SmoothedPointer {
    pub fn new(params: SpringParams) -> Self {
        Self {
            x: Spring::new(params, 0.0),
            y: Spring::new(params, 0.0),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        Vec2::new(self.x.step(dt_sec), self.y.step(dt_sec))
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }
}
