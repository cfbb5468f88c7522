use crate::constants::{FLOAT_OFFSET_RANGE, FLOAT_SPEED};
use glam::Vec3;
use rand::prelude::*;

/// Idle bob and sway applied above the hero root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    /// Scale `rotation_intensity` by entrance progress.
    pub rotation_ramps_in: bool,
    pub float_intensity: f32,
    /// Scale `float_intensity` by entrance progress.
    pub float_ramps_in: bool,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: FLOAT_SPEED,
            rotation_intensity: 1.0,
            rotation_ramps_in: false,
            float_intensity: 1.5,
            float_ramps_in: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FloatMotion {
    pub params: FloatParams,
    /// Random time offset so two scenes never bob in lockstep.
    offset: f32,
}

/// Wrapper-node pose produced by [`FloatMotion::sample`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub lift: f32,
}

impl FloatMotion {
    pub fn new(params: FloatParams, rng: &mut StdRng) -> Self {
        Self {
            params,
            offset: rng.gen::<f32>() * FLOAT_OFFSET_RANGE,
        }
    }

    pub fn sample(&self, elapsed: f64, progress: f32) -> FloatPose {
        let p = &self.params;
        let progress = progress.clamp(0.0, 1.0);
        let rot_k = if p.rotation_ramps_in {
            p.rotation_intensity * progress
        } else {
            p.rotation_intensity
        };
        let lift_k = if p.float_ramps_in {
            p.float_intensity * progress
        } else {
            p.float_intensity
        };
        // Large offsets lose precision in f32, so wrap in f64 first.
        let tau = (self.offset as f64 + elapsed) / 4.0 * p.speed as f64;
        let s = tau.rem_euclid(std::f64::consts::TAU) as f32;
        FloatPose {
            rotation: Vec3::new(s.cos() / 8.0, s.sin() / 8.0, s.sin() / 20.0) * rot_k,
            lift: s.sin() / 10.0 * lift_k,
        }
    }
}
