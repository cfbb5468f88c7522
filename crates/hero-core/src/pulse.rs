use crate::constants::{
    PULSE_DECAY_PER_FRAME, PULSE_INCREMENT, PULSE_MOVE_THRESHOLD, PULSE_SNAP_EPSILON,
};
use glam::Vec2;

/// Pointer-activity signal in [0, 1]. 0 is idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PulseState {
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseParams {
    /// Minimum pointer displacement (normalized units) that counts as movement.
    pub threshold: f32,
    /// Added per qualifying move event.
    pub increment: f32,
    /// Subtracted every frame.
    pub decay: f32,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            threshold: PULSE_MOVE_THRESHOLD,
            increment: PULSE_INCREMENT,
            decay: PULSE_DECAY_PER_FRAME,
        }
    }
}

/// Turns discrete pointer movements into a decaying intensity.
#[derive(Clone, Debug, Default)]
pub struct PulseController {
    pub params: PulseParams,
    last_pointer: Vec2,
}

impl PulseController {
    pub fn new(params: PulseParams) -> Self {
        Self {
            params,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Bump the intensity if the pointer moved far enough since the last
    /// observed position. The new position becomes the reference either way.
    pub fn observe_pointer(&mut self, pulse: &mut PulseState, position: Vec2) {
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        self.on_pointer_move(pulse, delta);
    }

    pub fn on_pointer_move(&self, pulse: &mut PulseState, delta: Vec2) {
        if delta.length() > self.params.threshold {
            pulse.intensity = (pulse.intensity + self.params.increment).min(1.0);
        }
        pulse.intensity = pulse.intensity.clamp(0.0, 1.0);
    }

    /// One frame of decay. Returns the new intensity.
    pub fn tick(&self, pulse: &mut PulseState) -> f32 {
        let next = (pulse.intensity - self.params.decay).clamp(0.0, 1.0);
        pulse.intensity = if next < PULSE_SNAP_EPSILON { 0.0 } else { next };
        pulse.intensity
    }
}

/// `base * (1 + intensity * gain)`: pulse perturbs a value, never replaces it.
#[inline]
pub fn amplify(base: f32, intensity: f32, gain: f32) -> f32 {
    base * (1.0 + intensity.clamp(0.0, 1.0) * gain)
}
