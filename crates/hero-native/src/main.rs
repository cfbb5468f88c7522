use anyhow::Context;
use glam::Vec2;
use hero_core::{Camera, PointerState, SceneComposer, SceneConfig, Variant};
use std::time::Duration;

const FRAME_RATE: f64 = 60.0;
const REPORT_EVERY_SEC: f64 = 0.5;
const DEFAULT_SECONDS: f64 = 4.0;
const ASPECT: f32 = 16.0 / 9.0;

// Synthetic pointer: one lap around the viewport every few seconds, with a
// pause in the middle so the pulse has time to decay.
const POINTER_LAP_SEC: f64 = 3.0;
const POINTER_RADIUS: f32 = 0.6;

struct Args {
    variant: Variant,
    seconds: f64,
    seed: u64,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(v) => v.parse::<Variant>()?,
        None => Variant::Cube,
    };
    let seconds = match args.next() {
        Some(s) => s
            .parse::<f64>()
            .with_context(|| format!("invalid duration `{s}`"))?,
        None => DEFAULT_SECONDS,
    };
    if !(seconds > 0.0 && seconds.is_finite()) {
        anyhow::bail!("duration must be positive, got {seconds}");
    }
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed `{s}`"))?,
        None => 42,
    };
    Ok(Args {
        variant,
        seconds,
        seed,
    })
}

fn pointer_at(t: f64) -> PointerState {
    let lap = (t / POINTER_LAP_SEC).fract();
    if lap > 0.5 {
        // hold where the lap ended
        return PointerState::new(POINTER_RADIUS, 0.0);
    }
    let theta = (lap * 2.0 * std::f64::consts::TAU) as f32;
    let p = Vec2::new(theta.cos(), theta.sin()) * POINTER_RADIUS;
    PointerState::new(p.x, p.y)
}

fn run(args: Args) -> anyhow::Result<()> {
    let camera = Camera::hero(ASPECT);
    let view_proj = camera.projection_matrix() * camera.view_matrix();
    let config = SceneConfig::for_variant(args.variant, args.seed).fit_viewport(&camera);
    let mut scene = SceneComposer::init(config, 0.0).context("building scene")?;
    log::info!(
        "[native] {:?}: {} nodes, shell mesh {}",
        args.variant,
        scene.graph().len(),
        scene
            .shell_mesh()
            .map(|m| format!("{} verts / {} tris", m.vertex_count(), m.triangle_count()))
            .unwrap_or_else(|| "external sphere".to_string())
    );

    let dt = Duration::from_secs_f64(1.0 / FRAME_RATE);
    let frames = (args.seconds * FRAME_RATE).ceil() as u64;
    let report_every = (REPORT_EVERY_SEC * FRAME_RATE).round() as u64;
    let mut peak_pulse = 0.0f32;

    for frame in 1..=frames {
        let t = frame as f64 / FRAME_RATE;
        let state = *scene.update(dt, t, pointer_at(t));
        peak_pulse = peak_pulse.max(state.pulse.intensity);

        if frame % report_every == 0 {
            let root_id = scene.nodes().root;
            let root = scene.graph().node(root_id).transform;
            let root_world = scene.graph().world_position(root_id);
            // where the shell lands on screen, in normalized device coordinates
            let ndc = view_proj.project_point3(scene.graph().world_position(scene.nodes().main));
            log::info!(
                "[native] t={:.2}s progress={:.3} opacity={:.2} pulse={:.3} shell=({:+.3},{:+.3}) root=({:+.2},{:+.2},{:+.2}) x{:.3} ndc=({:+.2},{:+.2})",
                t,
                state.progress,
                state.base_opacity,
                state.pulse.intensity,
                state.shell_rotation.x,
                state.shell_rotation.y,
                root_world.x,
                root_world.y,
                root_world.z,
                root.scale,
                ndc.x,
                ndc.y
            );
        }
    }

    let visible = scene.graph().nodes().iter().filter(|n| n.visible).count();
    log::info!(
        "[native] done: {} frames, entrance {}, peak pulse {:.3}, {}/{} nodes visible",
        frames,
        if scene.entrance().is_complete() {
            "complete"
        } else {
            "running"
        },
        peak_pulse,
        visible,
        scene.graph().len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args()?;
    run(args)
}
