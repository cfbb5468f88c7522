use super::{stagger_progress, ParticleFrame, ParticleInput};
use crate::color::hsl_to_rgb;
use crate::constants::ORBIT_OPACITY;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Immutable configuration of one swarm particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParticle {
    pub radius: f32,
    /// Radians per second around the Y axis.
    pub angular_speed: f32,
    /// Multiplier on the scene's particle scale.
    pub size: f32,
    pub phase: f32,
    pub hue_offset: f32,
}

/// How the swarm's particle configs are generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitLayout {
    /// Stationary particles spaced evenly on one circle, hue by index.
    EvenlySpaced { count: usize, radius: f32 },
    /// Randomised radius, speed, size, phase and hue from an explicit seed.
    Seeded { count: usize, seed: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitOpacity {
    /// `peak * base_opacity * stagger`: fades in with the entrance.
    EntranceRamp { peak: f32 },
    /// `base + swing * sin(t + index)`: independent shimmer per particle.
    Shimmer { base: f32, swing: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitStyle {
    /// `y = sin(θ * vertical_frequency) * vertical_amplitude`.
    pub vertical_frequency: f32,
    pub vertical_amplitude: f32,
    /// Per-index entrance delay in progress units; 0 disables the bloom.
    pub stagger_step: f32,
    /// Hue turns per second.
    pub hue_drift: f32,
    /// Hue shift at full progress.
    pub hue_progress_shift: f32,
    pub lightness: f32,
    pub opacity: OrbitOpacity,
}

impl OrbitStyle {
    /// Slow-blooming ring of fixed, index-coloured beads.
    pub fn beads(stagger_step: f32) -> Self {
        Self {
            vertical_frequency: 2.0,
            vertical_amplitude: 0.5,
            stagger_step,
            hue_drift: 0.0,
            hue_progress_shift: 0.0,
            lightness: 0.6,
            opacity: OrbitOpacity::EntranceRamp {
                peak: ORBIT_OPACITY,
            },
        }
    }

    /// Free-orbiting, colour-cycling swarm.
    pub fn drifting() -> Self {
        Self {
            vertical_frequency: 1.5,
            vertical_amplitude: 0.6,
            stagger_step: 0.0,
            hue_drift: 0.05,
            hue_progress_shift: 0.1,
            lightness: 0.65,
            opacity: OrbitOpacity::Shimmer {
                base: ORBIT_OPACITY,
                swing: 0.2,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitSwarm {
    particles: Vec<OrbitParticle>,
    pub style: OrbitStyle,
}

impl OrbitSwarm {
    pub fn new(layout: OrbitLayout, style: OrbitStyle) -> Self {
        let particles = match layout {
            OrbitLayout::EvenlySpaced { count, radius } => evenly_spaced(count, radius),
            OrbitLayout::Seeded { count, seed } => seeded(count, seed),
        };
        log::debug!("[particles] orbit swarm {:?}: {} particles", layout, particles.len());
        Self { particles, style }
    }

    pub fn particles(&self) -> &[OrbitParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Orbit angle of particle `cfg` at `elapsed` seconds.
    #[inline]
    pub fn angle(cfg: &OrbitParticle, elapsed: f64) -> f32 {
        (elapsed as f32) * cfg.angular_speed + cfg.phase
    }

    /// Position of one particle. Depends on nothing but its own config.
    pub fn position(&self, cfg: &OrbitParticle, elapsed: f64) -> Vec3 {
        let theta = Self::angle(cfg, elapsed);
        Vec3::new(
            theta.cos() * cfg.radius,
            (theta * self.style.vertical_frequency).sin() * self.style.vertical_amplitude,
            theta.sin() * cfg.radius,
        )
    }

    pub fn frame(&self, index: usize, input: &ParticleInput) -> Option<ParticleFrame> {
        let cfg = self.particles.get(index)?;
        let style = &self.style;
        let local = stagger_progress(input.progress, index, style.stagger_step);
        let t = input.elapsed as f32;

        let hue = cfg.hue_offset + t * style.hue_drift + input.progress * style.hue_progress_shift;
        let opacity = match style.opacity {
            OrbitOpacity::EntranceRamp { peak } => peak * input.base_opacity * local,
            OrbitOpacity::Shimmer { base, swing } => base + (t + index as f32).sin() * swing,
        };

        Some(ParticleFrame {
            position: self.position(cfg, input.elapsed),
            scale: input.particle_scale * cfg.size * local * input.pulse_factor,
            color: hsl_to_rgb(hue, 1.0, style.lightness),
            opacity: opacity.clamp(0.0, 1.0),
        })
    }

    /// Recompute every particle into `out` (cleared first).
    pub fn update(&self, input: &ParticleInput, out: &mut Vec<ParticleFrame>) {
        out.clear();
        out.extend((0..self.particles.len()).filter_map(|i| self.frame(i, input)));
    }
}

fn evenly_spaced(count: usize, radius: f32) -> Vec<OrbitParticle> {
    (0..count)
        .map(|i| {
            let fraction = i as f32 / count as f32;
            OrbitParticle {
                radius,
                angular_speed: 0.0,
                size: 1.0,
                phase: fraction * TAU,
                hue_offset: fraction,
            }
        })
        .collect()
}

fn seeded(count: usize, seed: u64) -> Vec<OrbitParticle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| OrbitParticle {
            radius: 2.0 + rng.gen::<f32>() * 1.2,
            angular_speed: 0.4 + rng.gen::<f32>() * 0.6,
            size: 0.6 + rng.gen::<f32>() * 0.9,
            phase: rng.gen::<f32>() * TAU,
            hue_offset: rng.gen::<f32>(),
        })
        .collect()
}
