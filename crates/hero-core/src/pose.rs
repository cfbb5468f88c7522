use crate::constants::{
    CORE_SPIN_X, CORE_SPIN_Y, CUBE_POINTER_SENSITIVITY, CUBE_SHELL_SMOOTHING, SHELL_BASE_SPIN,
    SHELL_IDLE_AMPLITUDE, SHELL_IDLE_FREQ,
};
use crate::entrance::ramp_from;
use crate::state::PointerState;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseParams {
    /// Radians of shell tilt per unit of pointer offset at full progress.
    pub sensitivity: f32,
    pub idle_freq: f32,
    pub idle_amplitude: f32,
    /// Constant spin around Y in rad/s.
    pub base_spin: f32,
    /// Fraction of the remaining distance covered each frame; 1 snaps.
    pub smoothing: f32,
    /// Core spin factor at progress 0; it reaches 1 at full progress.
    pub core_speed_floor: f32,
}

impl Default for PoseParams {
    fn default() -> Self {
        Self {
            sensitivity: CUBE_POINTER_SENSITIVITY,
            idle_freq: SHELL_IDLE_FREQ,
            idle_amplitude: SHELL_IDLE_AMPLITUDE,
            base_spin: SHELL_BASE_SPIN,
            smoothing: CUBE_SHELL_SMOOTHING,
            core_speed_floor: 0.3,
        }
    }
}

/// Pointer-following rotation for the shell and free spin for the core.
#[derive(Clone, Debug, Default)]
pub struct ReactivePoseController {
    pub params: PoseParams,
}

impl ReactivePoseController {
    pub fn new(params: PoseParams) -> Self {
        Self { params }
    }

    /// Where the shell wants to point this frame. Pointer influence fades in
    /// with entrance progress; the idle nod and base spin do not.
    pub fn shell_target(&self, pointer: PointerState, elapsed: f64, progress: f32) -> Vec3 {
        let p = &self.params;
        let t = elapsed as f32;
        let progress = progress.clamp(0.0, 1.0);
        Vec3::new(
            pointer.y * p.sensitivity * progress + (t * p.idle_freq).sin() * p.idle_amplitude,
            pointer.x * p.sensitivity * progress + t * p.base_spin,
            0.0,
        )
    }

    /// Next rendered shell rotation, eased from `previous` toward the target.
    pub fn pose(
        &self,
        pointer: PointerState,
        elapsed: f64,
        progress: f32,
        previous: Vec3,
    ) -> Vec3 {
        let target = self.shell_target(pointer, elapsed, progress);
        let alpha = self.params.smoothing.clamp(0.0, 1.0);
        previous + (target - previous) * alpha
    }

    /// Core rotation. A pure function of time and progress with no smoothing,
    /// so it reads as independent of the shell.
    pub fn core_rotation(&self, elapsed: f64, progress: f32) -> Vec3 {
        let speed = ramp_from(self.params.core_speed_floor, progress.clamp(0.0, 1.0));
        let t = elapsed as f32;
        Vec3::new(t * CORE_SPIN_X * speed, t * CORE_SPIN_Y * speed, 0.0)
    }
}
