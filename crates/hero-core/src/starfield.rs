use crate::color::hsl_to_rgb;
use crate::constants::{REFERENCE_FPS, STAR_DEPTH, STAR_RESET_Z, STAR_SPREAD, STAR_WRAP_Z};
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Units per reference frame toward the camera.
    pub speed: f32,
    pub color: Vec3,
}

/// Background streaks drifting toward the viewer and wrapping around.
#[derive(Clone, Debug)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn seeded(count: usize, rng: &mut StdRng) -> Self {
        let stars = (0..count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * STAR_SPREAD;
                let y = (rng.gen::<f32>() - 0.5) * STAR_SPREAD;
                let z = rng.gen::<f32>() * -STAR_DEPTH;
                Star {
                    position: Vec3::new(x, y, z),
                    speed: 0.05 + rng.gen::<f32>() * 0.1,
                    color: hsl_to_rgb(rng.gen::<f32>() * 0.2 + 0.5, 1.0, 0.7),
                }
            })
            .collect::<Vec<_>>();
        log::debug!("[starfield] {} stars", stars.len());
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance every streak by `dt`, normalized so one 60 Hz frame moves a
    /// star by its `speed`.
    pub fn advance(&mut self, dt: Duration) {
        let frames = dt.as_secs_f32() * REFERENCE_FPS;
        for star in &mut self.stars {
            star.position.z += star.speed * frames;
            if star.position.z > STAR_WRAP_Z {
                star.position.z = STAR_RESET_Z;
            }
        }
    }
}
