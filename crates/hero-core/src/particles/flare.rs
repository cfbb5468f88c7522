use super::{ParticleFrame, ParticleInput};
use crate::color::hsl_to_rgb;
use crate::constants::{
    FLARE_COUNT, FLARE_LAYER_SPACING, FLARE_LIGHTNESS, FLARE_OPACITY, FLARE_RADIUS, FLARE_SCALE,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Rainbow flares evenly spaced on a ring that turns half a revolution over
/// the entrance. Flares alternate between three heights by index.
#[derive(Clone, Debug, PartialEq)]
pub struct FlareRing {
    pub count: usize,
    pub radius: f32,
    pub layer_spacing: f32,
    /// Scale once visible.
    pub scale: f32,
    pub lightness: f32,
    /// Hue shift at full progress.
    pub hue_progress_shift: f32,
    /// Hue turns per second shared by every flare.
    pub hue_drift: f32,
    pub opacity: f32,
}

impl Default for FlareRing {
    fn default() -> Self {
        Self {
            count: FLARE_COUNT,
            radius: FLARE_RADIUS,
            layer_spacing: FLARE_LAYER_SPACING,
            scale: FLARE_SCALE,
            lightness: FLARE_LIGHTNESS,
            hue_progress_shift: 0.1,
            hue_drift: 0.0,
            opacity: FLARE_OPACITY,
        }
    }
}

impl FlareRing {
    /// Angle of flare `index` on the ring at entrance `progress`.
    pub fn angle(&self, index: usize, progress: f32) -> f32 {
        (index as f32 / self.count as f32) * TAU + progress.clamp(0.0, 1.0) * PI
    }

    pub fn frame(&self, index: usize, input: &ParticleInput) -> Option<ParticleFrame> {
        if index >= self.count {
            return None;
        }
        let progress = input.progress.clamp(0.0, 1.0);
        let angle = self.angle(index, progress);
        let layer = (index % 3) as f32 - 1.0;
        let hue = index as f32 / self.count as f32
            + progress * self.hue_progress_shift
            + input.elapsed as f32 * self.hue_drift;
        let scale = if progress > 0.0 {
            self.scale * input.pulse_factor
        } else {
            0.0
        };
        Some(ParticleFrame {
            position: Vec3::new(
                angle.cos() * self.radius,
                layer * self.layer_spacing,
                angle.sin() * self.radius,
            ),
            scale,
            color: hsl_to_rgb(hue, 1.0, self.lightness),
            opacity: (self.opacity * input.base_opacity).clamp(0.0, 1.0),
        })
    }

    pub fn update(&self, input: &ParticleInput, out: &mut Vec<ParticleFrame>) {
        out.clear();
        out.extend((0..self.count).filter_map(|i| self.frame(i, input)));
    }
}
