//! Particle groups attached to the hero object.
//!
//! Each generator owns an immutable per-particle configuration built once at
//! construction and recomputes only derived position, scale and colour per
//! frame. Particles never read each other's state.

mod flare;
mod orbit;
mod trail;

pub use flare::*;
pub use orbit::*;
pub use trail::*;

use glam::Vec3;

/// Derived per-frame state of one particle, ready to be written to a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleFrame {
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub opacity: f32,
}

/// Shared per-frame inputs for every generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleInput {
    pub elapsed: f64,
    /// Entrance progress in [0, 1].
    pub progress: f32,
    /// Scene-wide opacity ramp, `0.3 + 0.7 * progress`.
    pub base_opacity: f32,
    /// `particles` entry of the active scale config.
    pub particle_scale: f32,
    /// `1 + pulse * gain`; multiplies particle scale.
    pub pulse_factor: f32,
}

const STAGGER_EPSILON: f32 = 1e-6;

/// Progress of element `index` in a cascade where each element starts
/// `step` later than the previous one and all finish together at 1.
///
/// When the remaining window `1 - index * step` collapses to zero the element
/// counts as fully elapsed once the shared progress reaches it.
pub fn stagger_progress(progress: f32, index: usize, step: f32) -> f32 {
    let delay = index as f32 * step;
    let window = 1.0 - delay;
    if window <= STAGGER_EPSILON {
        return if progress >= 1.0 { 1.0 } else { 0.0 };
    }
    ((progress - delay) / window).clamp(0.0, 1.0)
}
