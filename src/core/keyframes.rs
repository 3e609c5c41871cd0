// Piecewise keyframe helpers used by scroll curves and looping decorations.

/// Piecewise-linear map of `t` through `inputs -> outputs`, clamped at both ends.
///
/// `inputs` must be ascending and the same length as `outputs`. An empty table
/// yields 0.0.
pub fn interpolate(inputs: &[f32], outputs: &[f32], t: f32) -> f32 {
    let n = inputs.len().min(outputs.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || t.is_nan() || t <= inputs[0] {
        return outputs[0];
    }
    if t >= inputs[n - 1] {
        return outputs[n - 1];
    }
    for i in 1..n {
        if t <= inputs[i] {
            let (x0, x1) = (inputs[i - 1], inputs[i]);
            let (y0, y1) = (outputs[i - 1], outputs[i]);
            let span = x1 - x0;
            if span <= f32::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * ((t - x0) / span);
        }
    }
    outputs[n - 1]
}

#[inline]
pub fn ease_in_out(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f32::consts::PI * x).cos()
}

#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    let inv = 1.0 - x.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Phase in `[0, 1)` of an infinitely repeating cycle that starts after
/// `delay`. Returns `None` while still waiting for the first cycle.
pub fn loop_phase(t: f32, delay: f32, period: f32) -> Option<f32> {
    if !(period > 0.0) || t < delay {
        return None;
    }
    Some(((t - delay) / period).fract())
}

/// Sample evenly spaced keyframes at `phase`, easing each segment.
pub fn sample_loop(keys: &[f32], phase: f32) -> f32 {
    match keys.len() {
        0 => 0.0,
        1 => keys[0],
        n => {
            let segments = (n - 1) as f32;
            let pos = phase.clamp(0.0, 1.0) * segments;
            let i = (pos.floor() as usize).min(n - 2);
            let local = ease_in_out(pos - i as f32);
            keys[i] + (keys[i + 1] - keys[i]) * local
        }
    }
}

/// Looping keyframes honoring an initial delay; holds the first key before it.
pub fn looping(keys: &[f32], t: f32, delay: f32, period: f32) -> f32 {
    match loop_phase(t, delay, period) {
        Some(phase) => sample_loop(keys, phase),
        None => keys.first().copied().unwrap_or(0.0),
    }
}
