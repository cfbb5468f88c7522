use super::{ParticleFrame, ParticleInput};
use crate::color::hsl_to_rgb;
use crate::constants::{TRAIL_FALLOFF, TRAIL_OPACITY, TRAIL_SEGMENTS, TRAIL_SPACING, TRAIL_STEP_DELAY};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub chain_index: usize,
    /// Progress units this segment lags behind the head.
    pub delay: f32,
    /// Fixed offset from the root, stepping back along the flight path.
    pub offset: Vec3,
}

/// Comet tail of fading spheres left behind by the entrance flight.
#[derive(Clone, Debug)]
pub struct AfterimageTrail {
    segments: SmallVec<[TrailSegment; TRAIL_SEGMENTS]>,
    /// Scale lost per chain index, as a fraction of the head's.
    pub falloff: f32,
    pub opacity: f32,
    pub hue_base: f32,
    pub hue_progress_shift: f32,
    pub lightness: f32,
}

impl AfterimageTrail {
    pub fn new(count: usize, step_delay: f32, falloff: f32) -> Self {
        let spacing = Vec3::from_array(TRAIL_SPACING);
        let segments = (0..count)
            .map(|i| TrailSegment {
                chain_index: i,
                delay: i as f32 * step_delay,
                offset: spacing * i as f32,
            })
            .collect();
        Self {
            segments,
            falloff,
            opacity: TRAIL_OPACITY,
            hue_base: 0.5,
            hue_progress_shift: 0.15,
            lightness: 0.65,
        }
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `max(0, progress - delay)` for segment `index`.
    pub fn local_progress(&self, index: usize, progress: f32) -> f32 {
        self.segments
            .get(index)
            .map(|s| (progress.clamp(0.0, 1.0) - s.delay).max(0.0))
            .unwrap_or(0.0)
    }

    /// Brightness/size weight of segment `index`, never negative.
    pub fn intensity(&self, index: usize) -> f32 {
        (1.0 - index as f32 * self.falloff).max(0.0)
    }

    /// `trail_scale` is the `trail` entry of the active scale config.
    pub fn frame(
        &self,
        index: usize,
        input: &ParticleInput,
        trail_scale: f32,
    ) -> Option<ParticleFrame> {
        let segment = self.segments.get(index)?;
        let local = self.local_progress(index, input.progress);
        let intensity = self.intensity(index);
        let hue = self.hue_base + input.progress.clamp(0.0, 1.0) * self.hue_progress_shift;
        Some(ParticleFrame {
            position: segment.offset,
            scale: local * trail_scale * intensity,
            color: hsl_to_rgb(hue, 1.0, self.lightness),
            opacity: (local * self.opacity * intensity).clamp(0.0, 1.0),
        })
    }

    pub fn update(&self, input: &ParticleInput, trail_scale: f32, out: &mut Vec<ParticleFrame>) {
        out.clear();
        out.extend((0..self.segments.len()).filter_map(|i| self.frame(i, input, trail_scale)));
    }
}

impl Default for AfterimageTrail {
    fn default() -> Self {
        Self::new(TRAIL_SEGMENTS, TRAIL_STEP_DELAY, TRAIL_FALLOFF)
    }
}
