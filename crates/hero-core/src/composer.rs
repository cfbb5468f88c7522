//! Wires the animation components into one per-frame entry point and owns
//! the node hierarchy they write into.
//!
//! ```text
//! float ── root ─┬─ trail ── trail-0..k
//!                ├─ glow
//!                ├─ main ── core
//!                ├─ orbit ── orbit-0..n
//!                └─ flares ── flare-0..11
//! stars ── star-0..79
//! ```

use crate::color::{CYAN, WHITE};
use crate::config::{ScaleConfig, SceneConfig, ShellGeometry};
use crate::constants::{
    BASE_OPACITY_MIN, CORE_EMISSIVE_MAX, GLOW_BREATH_BASE, GLOW_BREATH_FREQ, GLOW_OPACITY,
    STAR_OPACITY,
};
use crate::entrance::{ramp_from, AnimationState};
use crate::error::Result;
use crate::float::FloatMotion;
use crate::geometry::{build_rounded_box, Mesh};
use crate::particles::{AfterimageTrail, FlareRing, OrbitSwarm, ParticleFrame, ParticleInput};
use crate::pose::ReactivePoseController;
use crate::pulse::{amplify, PulseController, PulseState};
use crate::scene::{
    Material, MaterialKind, MaterialParams, NodeId, Primitive, SceneGraph, Side,
    TransmissionParams,
};
use crate::starfield::StarField;
use crate::state::PointerState;
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

/// Ids of the nodes the composer writes to every frame.
#[derive(Clone, Debug, Default)]
pub struct SceneNodes {
    pub float: NodeId,
    pub root: NodeId,
    pub glow: NodeId,
    pub main: NodeId,
    pub core: NodeId,
    pub orbit: Vec<NodeId>,
    pub flares: Vec<NodeId>,
    pub trail: Vec<NodeId>,
    pub stars: Vec<NodeId>,
}

/// Scalar/vector state produced by one `update`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameState {
    pub elapsed: f64,
    pub progress: f32,
    pub base_opacity: f32,
    pub pulse: PulseState,
    pub shell_rotation: Vec3,
    pub core_rotation: Vec3,
}

pub struct SceneComposer {
    config: SceneConfig,
    graph: SceneGraph,
    nodes: SceneNodes,
    shell_mesh: Option<Mesh>,
    entrance: AnimationState,
    pulse: PulseController,
    pose: ReactivePoseController,
    float: FloatMotion,
    orbit: Option<OrbitSwarm>,
    flares: Option<FlareRing>,
    trail: Option<AfterimageTrail>,
    stars: Option<StarField>,
    state: FrameState,
    scratch: Vec<ParticleFrame>,
}

// Independent RNG streams derived from the scene seed.
const FLOAT_STREAM: u64 = 1;
const STAR_STREAM: u64 = 2;

fn stream_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

impl SceneComposer {
    /// One-time setup: validate the config, build the shell mesh, seed every
    /// particle config and lay out the node hierarchy. The entrance starts at
    /// `started_at` seconds on the host clock.
    pub fn init(config: SceneConfig, started_at: f64) -> Result<Self> {
        config.validate()?;
        let variant = &config.variant;

        let shell_mesh = match &variant.shell {
            ShellGeometry::RoundedBox(params) => Some(build_rounded_box(params)?),
            ShellGeometry::Sphere { .. } => None,
        };

        let orbit = variant.orbit.map(|o| OrbitSwarm::new(o.layout, o.style));
        let flares = variant.flares.map(|count| FlareRing {
            count,
            ..FlareRing::default()
        });
        let trail = variant
            .trail
            .map(|t| AfterimageTrail::new(t.segments, t.step_delay, t.falloff));
        let stars = variant
            .stars
            .map(|count| StarField::seeded(count, &mut stream_rng(config.seed, STAR_STREAM)));
        let float = FloatMotion::new(variant.float, &mut stream_rng(config.seed, FLOAT_STREAM));
        let entrance = AnimationState::new(started_at, variant.entrance);
        let pulse = PulseController::new(variant.pulse);
        let pose = ReactivePoseController::new(variant.pose);

        let mut composer = Self {
            entrance,
            pulse,
            pose,
            graph: SceneGraph::new(),
            nodes: SceneNodes::default(),
            shell_mesh,
            float,
            orbit,
            flares,
            trail,
            stars,
            state: FrameState::default(),
            scratch: Vec::new(),
            config,
        };
        composer.build_graph();
        log::debug!(
            "[scene] {:?} composed: {} nodes, seed {}",
            composer.config.variant.variant,
            composer.graph.len(),
            composer.config.seed
        );
        Ok(composer)
    }

    fn build_graph(&mut self) {
        let g = &mut self.graph;
        let n = &mut self.nodes;
        let variant = &self.config.variant;

        n.float = g.add_group("float", None);
        n.root = g.add_group("root", Some(n.float));

        if let Some(trail) = &self.trail {
            let group = g.add_group("trail", Some(n.root));
            n.trail = trail
                .segments()
                .iter()
                .map(|segment| {
                    let id = g.add_mesh(
                        format!("trail-{}", segment.chain_index),
                        group,
                        Primitive::Sphere { segments: 24 },
                        basic(MaterialParams::additive(CYAN, 0.0)),
                    );
                    g.transform_mut(id).position = segment.offset;
                    g.transform_mut(id).scale = 0.0;
                    id
                })
                .collect();
        }

        n.glow = g.add_mesh(
            "glow",
            n.root,
            Primitive::Sphere { segments: 32 },
            basic(MaterialParams {
                side: Side::Back,
                ..MaterialParams::additive(CYAN, GLOW_OPACITY * BASE_OPACITY_MIN)
            }),
        );

        let shell = match variant.shell {
            ShellGeometry::RoundedBox(_) => Primitive::RoundedBox,
            ShellGeometry::Sphere { segments } => Primitive::Sphere { segments },
        };
        n.main = g.add_mesh(
            "main",
            n.root,
            shell,
            Material {
                kind: MaterialKind::Transmission(TransmissionParams::default()),
                params: MaterialParams {
                    color: WHITE,
                    ..MaterialParams::default()
                },
            },
        );
        n.core = g.add_mesh(
            "core",
            n.main,
            Primitive::Icosahedron { detail: 1 },
            Material {
                kind: MaterialKind::Emissive {
                    emissive: crate::color::CORE_EMISSIVE,
                },
                params: MaterialParams {
                    color: variant.core_color,
                    ..MaterialParams::default()
                },
            },
        );

        if let Some(orbit) = &self.orbit {
            let group = g.add_group("orbit", Some(n.root));
            n.orbit = (0..orbit.len())
                .map(|i| {
                    g.add_mesh(
                        format!("orbit-{i}"),
                        group,
                        Primitive::Sphere { segments: 16 },
                        basic(MaterialParams::additive(WHITE, 0.0)),
                    )
                })
                .collect();
        }

        if let Some(flares) = &self.flares {
            let group = g.add_group("flares", Some(n.root));
            n.flares = (0..flares.count)
                .map(|i| {
                    g.add_mesh(
                        format!("flare-{i}"),
                        group,
                        Primitive::Sphere { segments: 16 },
                        basic(MaterialParams::additive(WHITE, 0.0)),
                    )
                })
                .collect();
        }

        if let Some(stars) = &self.stars {
            let group = g.add_group("stars", None);
            n.stars = stars
                .stars()
                .iter()
                .enumerate()
                .map(|(i, star)| {
                    let id = g.add_mesh(
                        format!("star-{i}"),
                        group,
                        Primitive::Streak,
                        basic(MaterialParams::additive(star.color, STAR_OPACITY)),
                    );
                    g.transform_mut(id).position = star.position;
                    id
                })
                .collect();
        }
    }

    /// Advance one displayed frame.
    ///
    /// Order: entrance progress, pulse, pose, particles. Every derived
    /// transform and material parameter is written back into the graph.
    pub fn update(&mut self, dt: Duration, elapsed: f64, pointer: PointerState) -> &FrameState {
        let variant = &self.config.variant;
        let scale = self.config.scale;
        let gains = variant.pulse_gains;
        let t = elapsed as f32;

        // clock / progress
        let progress = self.entrance.advance(elapsed);
        let base_opacity = ramp_from(BASE_OPACITY_MIN, progress);

        // pulse
        let mut pulse = self.state.pulse;
        self.pulse.observe_pointer(&mut pulse, pointer.as_vec2());
        let intensity = self.pulse.tick(&mut pulse);

        // pose
        let shell_rotation = self
            .pose
            .pose(pointer, elapsed, progress, self.state.shell_rotation);
        let core_rotation = self.pose.core_rotation(elapsed, progress);
        let float = self.float.sample(elapsed, progress);

        self.state = FrameState {
            elapsed,
            progress,
            base_opacity,
            pulse,
            shell_rotation,
            core_rotation,
        };

        let g = &mut self.graph;
        let n = &self.nodes;

        let path = &variant.path;
        {
            let tf = g.transform_mut(n.float);
            tf.rotation = float.rotation;
            tf.position = path.anchor + Vec3::Y * float.lift;
        }
        {
            let tf = g.transform_mut(n.root);
            tf.position = path.start.lerp(path.end, progress);
            tf.scale = amplify(ramp_from(path.scale_from, progress), intensity, gains.root);
        }
        {
            let glow = &variant.glow;
            let breath = GLOW_BREATH_BASE + (t * GLOW_BREATH_FREQ).sin() * glow.breath_amplitude;
            let swell = 1.0 + (1.0 - progress) * glow.entrance_swell;
            g.transform_mut(n.glow).scale =
                amplify(scale.glow * breath * swell, intensity, gains.glow);
            if let Some(m) = g.material_mut(n.glow) {
                m.opacity = GLOW_OPACITY * base_opacity;
            }
        }
        {
            let tf = g.transform_mut(n.main);
            tf.rotation = shell_rotation;
            tf.scale = amplify(scale.main, intensity, gains.main);
        }
        {
            let tf = g.transform_mut(n.core);
            tf.rotation = core_rotation;
            tf.scale = amplify(scale.inner, intensity, gains.core);
            if let Some(m) = g.material_mut(n.core) {
                m.emissive_intensity = CORE_EMISSIVE_MAX * progress;
            }
        }

        // particles
        let input = ParticleInput {
            elapsed,
            progress,
            base_opacity,
            particle_scale: scale.particles,
            pulse_factor: amplify(1.0, intensity, gains.particles),
        };
        if let Some(orbit) = &self.orbit {
            orbit.update(&input, &mut self.scratch);
            write_particles(g, &n.orbit, &self.scratch);
        }
        if let Some(flares) = &self.flares {
            flares.update(&input, &mut self.scratch);
            write_particles(g, &n.flares, &self.scratch);
        }
        if let Some(trail) = &self.trail {
            trail.update(&input, scale.trail, &mut self.scratch);
            write_particles(g, &n.trail, &self.scratch);
        }
        if let Some(stars) = &mut self.stars {
            stars.advance(dt);
            for (id, star) in n.stars.iter().zip(stars.stars()) {
                g.transform_mut(*id).position = star.position;
            }
        }

        log::trace!(
            "[scene] t={:.3} p={:.3} pulse={:.3} shell=({:.3},{:.3})",
            elapsed,
            progress,
            intensity,
            shell_rotation.x,
            shell_rotation.y
        );
        &self.state
    }

    /// Swap proportions on a live scene, e.g. after a resize. Entrance, pulse
    /// and particle state carry on; the new scales apply from the next update.
    pub fn set_scale(&mut self, scale: ScaleConfig) -> Result<()> {
        scale.validate()?;
        if scale != self.config.scale {
            log::debug!("[scene] scale preset now {:?}", scale);
            self.config.scale = scale;
        }
        Ok(())
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn nodes(&self) -> &SceneNodes {
        &self.nodes
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn entrance(&self) -> &AnimationState {
        &self.entrance
    }

    /// The rounded-box shell, when the variant uses one.
    pub fn shell_mesh(&self) -> Option<&Mesh> {
        self.shell_mesh.as_ref()
    }

    pub fn orbit(&self) -> Option<&OrbitSwarm> {
        self.orbit.as_ref()
    }

    pub fn flares(&self) -> Option<&FlareRing> {
        self.flares.as_ref()
    }

    pub fn trail(&self) -> Option<&AfterimageTrail> {
        self.trail.as_ref()
    }
}

fn basic(params: MaterialParams) -> Material {
    Material {
        kind: MaterialKind::Basic,
        params,
    }
}

fn write_particles(graph: &mut SceneGraph, ids: &[NodeId], frames: &[ParticleFrame]) {
    for (id, frame) in ids.iter().zip(frames) {
        {
            let tf = graph.transform_mut(*id);
            tf.position = frame.position;
            tf.scale = frame.scale;
        }
        if let Some(m) = graph.material_mut(*id) {
            m.color = frame.color;
            m.opacity = frame.opacity;
        }
        graph.set_visible(*id, frame.scale > 0.0);
    }
}
