use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Rounded box
pub const BOX_HALF_EXTENT: f32 = 0.5; // unit cube
pub const BOX_SUBDIVISIONS: u32 = 32; // grid cells per face edge
pub const BOX_SMOOTH_RADIUS: f32 = 0.10; // corner/edge rounding radius
pub const SPHERE_SEGMENTS: u32 = 64; // dollar-variant shell tessellation

// Entrance timing (milliseconds)
pub const CUBE_ENTRANCE_DELAY_MS: u64 = 400;
pub const CUBE_ENTRANCE_DURATION_MS: u64 = 1800;
pub const DOLLAR_ENTRANCE_DELAY_MS: u64 = 200;
pub const DOLLAR_ENTRANCE_DURATION_MS: u64 = 2000;

// Pulse
pub const PULSE_MOVE_THRESHOLD: f32 = 0.01; // normalized pointer units
pub const PULSE_INCREMENT: f32 = 0.3;
pub const PULSE_DECAY_PER_FRAME: f32 = 0.015;
pub const PULSE_SNAP_EPSILON: f32 = 1e-4; // residue below this reads as idle

// Shell pose
pub const SHELL_IDLE_FREQ: f32 = 0.2; // rad/s of the slow nod
pub const SHELL_IDLE_AMPLITUDE: f32 = 0.1;
pub const SHELL_BASE_SPIN: f32 = 0.12; // rad/s around Y
pub const CUBE_POINTER_SENSITIVITY: f32 = 0.3;
pub const DOLLAR_POINTER_SENSITIVITY: f32 = 0.25;
pub const CUBE_SHELL_SMOOTHING: f32 = 0.05; // rendered += (target - rendered) * α

// Inner core spin (rad/s before the speed factor)
pub const CORE_SPIN_X: f32 = 0.7;
pub const CORE_SPIN_Y: f32 = 0.5;

// Opacity ramp: base = MIN + (1 - MIN) * progress
pub const BASE_OPACITY_MIN: f32 = 0.3;
pub const GLOW_OPACITY: f32 = 0.05;
pub const FLARE_OPACITY: f32 = 0.5;
pub const ORBIT_OPACITY: f32 = 0.6;
pub const CORE_EMISSIVE_MAX: f32 = 2.0;

// Glow breathing
pub const GLOW_BREATH_FREQ: f32 = 2.0;
pub const GLOW_BREATH_BASE: f32 = 1.2;

// Flare ring
pub const FLARE_COUNT: usize = 12;
pub const FLARE_RADIUS: f32 = 1.4;
pub const FLARE_LAYER_SPACING: f32 = 0.6; // vertical step between the three layers
pub const FLARE_SCALE: f32 = 0.12;
pub const FLARE_LIGHTNESS: f32 = 0.7;

// Orbit swarm
pub const CUBE_ORBIT_COUNT: usize = 8;
pub const CUBE_ORBIT_RADIUS: f32 = 3.0;
pub const CUBE_ORBIT_STAGGER: f32 = 0.05;
pub const DOLLAR_ORBIT_COUNT: usize = 15;

// Afterimage trail
pub const TRAIL_SEGMENTS: usize = 8;
pub const TRAIL_STEP_DELAY: f32 = 0.06;
pub const TRAIL_FALLOFF: f32 = 0.12;
pub const TRAIL_OPACITY: f32 = 0.85;
pub const TRAIL_SPACING: [f32; 3] = [-0.9, 0.6, -0.4]; // offset per segment index

// Float wrapper
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_OFFSET_RANGE: f32 = 10_000.0;

// Star field
pub const STAR_COUNT: usize = 80;
pub const STAR_SPREAD: f32 = 40.0;
pub const STAR_DEPTH: f32 = 30.0;
pub const STAR_WRAP_Z: f32 = 5.0; // streaks past this plane wrap back
pub const STAR_RESET_Z: f32 = -25.0;
pub const STAR_OPACITY: f32 = 0.2;
pub const REFERENCE_FPS: f32 = 60.0; // per-frame speeds are tuned against this

// Viewport gating
pub const VIEWPORT_MIN_WIDTH_PX: f64 = 1024.0;
pub const COMPACT_WORLD_WIDTH: f32 = 5.0; // world units visible at the target

// Camera
pub const CAMERA_EYE: [f32; 3] = [-2.0, -5.0, 5.0];
pub const CAMERA_FOV_DEG: f32 = 45.0;

// Default layout
pub const CUBE_ANCHOR: [f32; 3] = [-2.0, -1.0, 0.0];
pub const DOLLAR_PATH_START: [f32; 3] = [8.0, -6.0, 2.0];
pub const DOLLAR_PATH_END: [f32; 3] = [-2.0, 2.0, 0.0];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}
