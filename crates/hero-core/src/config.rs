//! Scene variants as data.
//!
//! The cube and the dollar heroes run through the same code; every
//! difference between them lives in the presets below.

use crate::color::{CORE_BASE, WHITE};
use crate::constants::*;
use crate::entrance::{EdgeHandling, EntranceCurve};
use crate::error::{Result, SceneError};
use crate::float::FloatParams;
use crate::geometry::RoundedBoxParams;
use crate::particles::{OrbitLayout, OrbitStyle};
use crate::pose::PoseParams;
use crate::pulse::PulseParams;
use crate::state::Camera;
use glam::Vec3;
use std::str::FromStr;
use std::time::Duration;

/// Visual proportions of one scene variant. All entries are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    pub main: f32,
    pub glow: f32,
    pub inner: f32,
    pub particles: f32,
    pub trail: f32,
}

impl ScaleConfig {
    pub const CUBE: Self = Self {
        main: 1.76,
        glow: 2.24,
        inner: 0.4,
        particles: 0.09,
        trail: 1.0,
    };

    /// Cube proportions for narrow viewports.
    pub const CUBE_COMPACT: Self = Self {
        main: 0.88,
        glow: 1.2,
        ..Self::CUBE
    };

    pub const DOLLAR: Self = Self {
        main: 2.6,
        glow: 3.4,
        inner: 0.35,
        particles: 0.12,
        trail: 1.6,
    };

    /// Preset for `variant` given what the camera shows. Only the cube has a
    /// compact form.
    pub fn for_viewport(variant: Variant, camera: &Camera) -> Self {
        match variant {
            Variant::Cube if camera.visible_width_at_target() < COMPACT_WORLD_WIDTH => {
                Self::CUBE_COMPACT
            }
            Variant::Cube => Self::CUBE,
            Variant::Dollar => Self::DOLLAR,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("main", self.main),
            ("glow", self.glow),
            ("inner", self.inner),
            ("particles", self.particles),
            ("trail", self.trail),
        ];
        for (field, value) in fields {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SceneError::NonPositiveScale { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Cube,
    Dollar,
}

impl FromStr for Variant {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Variant::Cube),
            "dollar" | "sphere" => Ok(Variant::Dollar),
            other => Err(SceneError::Invalid(format!("unknown scene variant `{other}`"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellGeometry {
    RoundedBox(RoundedBoxParams),
    /// Supplied by the renderer.
    Sphere { segments: u32 },
}

/// Fly-in path of the hero root and its scale ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntrancePath {
    /// Where the float wrapper sits. Its sway pivots here, and `start`/`end`
    /// are relative to it.
    pub anchor: Vec3,
    pub start: Vec3,
    pub end: Vec3,
    /// Root scale at progress 0; reaches 1 at full progress.
    pub scale_from: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowParams {
    /// Breathing amplitude around the base multiplier.
    pub breath_amplitude: f32,
    /// Extra size while the entrance runs, `1 + swell * (1 - progress)`.
    pub entrance_swell: f32,
}

/// How strongly pulse intensity perturbs each scale, as `1 + pulse * gain`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PulseGains {
    pub root: f32,
    pub main: f32,
    pub core: f32,
    pub glow: f32,
    pub particles: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub layout: OrbitLayout,
    pub style: OrbitStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub segments: usize,
    pub step_delay: f32,
    pub falloff: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantConfig {
    pub variant: Variant,
    pub shell: ShellGeometry,
    /// Base colour of the emissive core.
    pub core_color: Vec3,
    pub entrance: EntranceCurve,
    pub path: EntrancePath,
    pub pose: PoseParams,
    pub float: FloatParams,
    pub glow: GlowParams,
    pub pulse: PulseParams,
    pub pulse_gains: PulseGains,
    pub orbit: Option<OrbitConfig>,
    /// Number of flares, if the ring is shown.
    pub flares: Option<usize>,
    pub trail: Option<TrailConfig>,
    /// Number of background streaks, if the star field is shown.
    pub stars: Option<usize>,
}

impl VariantConfig {
    pub fn cube() -> Self {
        Self {
            variant: Variant::Cube,
            shell: ShellGeometry::RoundedBox(RoundedBoxParams::default()),
            core_color: CORE_BASE,
            entrance: EntranceCurve::new(
                Duration::from_millis(CUBE_ENTRANCE_DELAY_MS),
                Duration::from_millis(CUBE_ENTRANCE_DURATION_MS),
                EdgeHandling::ClampInput,
            ),
            path: EntrancePath {
                anchor: Vec3::from_array(CUBE_ANCHOR),
                start: Vec3::ZERO,
                end: Vec3::ZERO,
                scale_from: 0.3,
            },
            pose: PoseParams::default(),
            float: FloatParams {
                rotation_intensity: 0.8,
                rotation_ramps_in: true,
                ..FloatParams::default()
            },
            glow: GlowParams {
                breath_amplitude: 0.1,
                entrance_swell: 0.5,
            },
            pulse: PulseParams::default(),
            pulse_gains: PulseGains::default(),
            orbit: Some(OrbitConfig {
                layout: OrbitLayout::EvenlySpaced {
                    count: CUBE_ORBIT_COUNT,
                    radius: CUBE_ORBIT_RADIUS,
                },
                style: OrbitStyle::beads(CUBE_ORBIT_STAGGER),
            }),
            flares: Some(FLARE_COUNT),
            trail: None,
            stars: Some(STAR_COUNT),
        }
    }

    /// `seed` feeds the random orbit layout.
    pub fn dollar(seed: u64) -> Self {
        Self {
            variant: Variant::Dollar,
            shell: ShellGeometry::Sphere {
                segments: SPHERE_SEGMENTS,
            },
            core_color: WHITE,
            entrance: EntranceCurve::new(
                Duration::from_millis(DOLLAR_ENTRANCE_DELAY_MS),
                Duration::from_millis(DOLLAR_ENTRANCE_DURATION_MS),
                EdgeHandling::ClampOutput,
            ),
            path: EntrancePath {
                anchor: Vec3::ZERO,
                start: Vec3::from_array(DOLLAR_PATH_START),
                end: Vec3::from_array(DOLLAR_PATH_END),
                scale_from: 0.15,
            },
            pose: PoseParams {
                sensitivity: DOLLAR_POINTER_SENSITIVITY,
                smoothing: 1.0,
                core_speed_floor: 1.0,
                ..PoseParams::default()
            },
            float: FloatParams::default(),
            glow: GlowParams {
                breath_amplitude: 0.15,
                entrance_swell: 0.0,
            },
            pulse: PulseParams::default(),
            pulse_gains: PulseGains {
                root: 0.08,
                main: 0.03,
                core: 0.1,
                glow: 0.15,
                particles: 0.1,
            },
            orbit: Some(OrbitConfig {
                layout: OrbitLayout::Seeded {
                    count: DOLLAR_ORBIT_COUNT,
                    seed,
                },
                style: OrbitStyle::drifting(),
            }),
            flares: None,
            trail: Some(TrailConfig {
                segments: TRAIL_SEGMENTS,
                step_delay: TRAIL_STEP_DELAY,
                falloff: TRAIL_FALLOFF,
            }),
            stars: None,
        }
    }
}

/// Everything needed to build a [`crate::SceneComposer`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub variant: VariantConfig,
    pub scale: ScaleConfig,
    pub seed: u64,
}

impl SceneConfig {
    pub fn cube(seed: u64) -> Self {
        Self {
            variant: VariantConfig::cube(),
            scale: ScaleConfig::CUBE,
            seed,
        }
    }

    pub fn dollar(seed: u64) -> Self {
        Self {
            variant: VariantConfig::dollar(seed),
            scale: ScaleConfig::DOLLAR,
            seed,
        }
    }

    pub fn for_variant(variant: Variant, seed: u64) -> Self {
        match variant {
            Variant::Cube => Self::cube(seed),
            Variant::Dollar => Self::dollar(seed),
        }
    }

    /// Pick the variant's proportions for the viewport: compact cube when too
    /// little of the world fits across it.
    pub fn fit_viewport(mut self, camera: &Camera) -> Self {
        self.scale = ScaleConfig::for_viewport(self.variant.variant, camera);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.scale.validate()?;
        if let ShellGeometry::RoundedBox(params) = &self.variant.shell {
            params.validate()?;
        }
        if self.variant.entrance.duration.is_zero() {
            return Err(SceneError::ZeroDuration);
        }
        let pulse = &self.variant.pulse;
        if !(pulse.decay >= 0.0 && pulse.increment >= 0.0 && pulse.threshold >= 0.0) {
            return Err(SceneError::Invalid(format!(
                "pulse parameters must be non-negative: {pulse:?}"
            )));
        }
        let alpha = self.variant.pose.smoothing;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(SceneError::Invalid(format!(
                "pose smoothing must be in (0, 1], got {alpha}"
            )));
        }
        Ok(())
    }
}
