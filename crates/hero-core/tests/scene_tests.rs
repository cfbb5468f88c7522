// Composed scenes: construction, hierarchy and per-frame writes.

use glam::Vec3;
use hero_core::color::hsl_to_rgb;
use hero_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn cube() -> SceneComposer {
    SceneComposer::init(SceneConfig::cube(42), 0.0).unwrap()
}

fn dollar() -> SceneComposer {
    SceneComposer::init(SceneConfig::dollar(42), 0.0).unwrap()
}

#[test]
fn cube_scene_layout() {
    let scene = cube();
    let graph = scene.graph();
    // float, root, glow, main, core
    // + orbit group and beads, flare group and flares, star group and streaks
    assert_eq!(graph.len(), 5 + (1 + 8) + (1 + 12) + (1 + 80));
    assert!(scene.shell_mesh().is_some());
    assert!(scene.trail().is_none());

    let nodes = scene.nodes();
    assert_eq!(graph.node(nodes.core).parent, Some(nodes.main));
    assert_eq!(graph.node(nodes.main).parent, Some(nodes.root));
    assert_eq!(graph.node(nodes.root).parent, Some(nodes.float));
    assert_eq!(graph.find("core"), Some(nodes.core));
    assert_eq!(nodes.orbit.len(), 8);
    assert_eq!(nodes.flares.len(), 12);
    assert_eq!(nodes.stars.len(), 80);
    assert!(matches!(
        graph.node(nodes.main).material.map(|m| m.kind),
        Some(MaterialKind::Transmission(_))
    ));
    assert_eq!(
        graph.node(nodes.glow).material.map(|m| m.params.side),
        Some(Side::Back)
    );
}

#[test]
fn dollar_scene_layout() {
    let scene = dollar();
    let graph = scene.graph();
    // float, root, glow, main, core + trail group, orbit group
    assert_eq!(graph.len(), 5 + (1 + 8) + (1 + 15));
    assert!(scene.shell_mesh().is_none());
    assert!(scene.flares().is_none());
    assert_eq!(scene.nodes().trail.len(), 8);
    assert_eq!(
        graph.node(scene.nodes().main).primitive,
        Some(Primitive::Sphere { segments: 64 })
    );
}

#[test]
fn everything_hidden_before_cue() {
    let mut scene = cube();
    let state = *scene.update(FRAME, 0.1, PointerState::new(0.8, 0.8));
    assert_eq!(state.progress, 0.0);
    assert!(approx(state.base_opacity, 0.3));

    let graph = scene.graph();
    let nodes = scene.nodes();
    assert!(approx(graph.node(nodes.root).transform.scale, 0.3));
    for id in nodes.orbit.iter().chain(&nodes.flares) {
        let node = graph.node(*id);
        assert_eq!(node.transform.scale, 0.0);
        assert!(!node.visible);
    }
    let core = graph.node(nodes.core).material.unwrap();
    assert_eq!(core.params.emissive_intensity, 0.0);
}

#[test]
fn entrance_completes_and_sticks() {
    let mut scene = cube();
    let mut t = 0.0;
    while t < 3.0 {
        t += FRAME.as_secs_f64();
        scene.update(FRAME, t, PointerState::default());
    }
    assert!(scene.entrance().is_complete());
    assert_eq!(scene.state().progress, 1.0);

    let graph = scene.graph();
    let nodes = scene.nodes();
    assert!(approx(graph.node(nodes.root).transform.scale, 1.0));
    assert!(approx(graph.node(nodes.main).transform.scale, ScaleConfig::CUBE.main));
    assert!(approx(graph.node(nodes.core).transform.scale, ScaleConfig::CUBE.inner));
    // glow breathes around the preset's glow proportion once the swell is gone
    let breath = 1.2 + ((t as f32) * 2.0).sin() * 0.1;
    assert!(approx(
        graph.node(nodes.glow).transform.scale,
        ScaleConfig::CUBE.glow * breath
    ));
    let core = graph.node(nodes.core).material.unwrap();
    assert!(approx(core.params.emissive_intensity, 2.0));
    assert!(nodes.orbit.iter().all(|id| graph.node(*id).visible));
}

#[test]
fn cube_shell_eases_toward_pointer() {
    let mut scene = cube();
    let state = *scene.update(FRAME, 3.0, PointerState::new(1.0, 0.0));
    // first frame covers 5% of the way from rest
    let target_y = 0.3 + 3.0 * 0.12;
    assert!(approx(state.shell_rotation.y, 0.05 * target_y));
    let main = scene.graph().node(scene.nodes().main).transform;
    assert_eq!(main.rotation, state.shell_rotation);
}

#[test]
fn children_inherit_parent_transforms() {
    let mut scene = cube();
    scene.update(FRAME, 3.0, PointerState::new(0.3, -0.2));
    let graph = scene.graph();
    let nodes = scene.nodes();
    // the core sits at the shell's origin
    let core = graph.world_position(nodes.core);
    assert!((core - graph.world_position(nodes.main)).length() < 1e-5);
    // the wrapper has no parent, so its world position is its local one
    let float = graph.node(nodes.float).transform.position;
    assert!((graph.world_position(nodes.float) - float).length() < 1e-6);
    // beads ride along with the root
    let bead = graph.world_position(nodes.orbit[0]);
    let root = graph.world_position(nodes.root);
    assert!((bead - root).length() > 1.0);
}

#[test]
fn cube_sways_about_its_anchor() {
    let mut scene = cube();
    let anchor = Vec3::new(-2.0, -1.0, 0.0);
    let mut swayed = false;
    for i in 0..600 {
        let t = 3.0 + i as f64 / 60.0;
        scene.update(FRAME, t, PointerState::default());
        let graph = scene.graph();
        let float = graph.node(scene.nodes().float).transform;
        swayed |= float.rotation.length() > 0.05;
        let lift = float.position.y - anchor.y;
        assert!(lift.abs() <= 0.15 + 1e-5);
        // the wrapper turns about the anchor, so only the lift moves the root
        let root = graph.world_position(scene.nodes().root);
        assert!(
            (root - (anchor + Vec3::Y * lift)).length() < 1e-3,
            "root drifted to {root} at t={t}"
        );
    }
    assert!(swayed);
}

#[test]
fn dollar_flies_along_its_path() {
    let mut scene = dollar();
    scene.update(FRAME, 0.0, PointerState::default());
    let root = scene.graph().node(scene.nodes().root).transform;
    assert_eq!(root.position, Vec3::new(8.0, -6.0, 2.0));
    assert!(approx(root.scale, 0.15));

    scene.update(FRAME, 5.0, PointerState::default());
    let root = scene.graph().node(scene.nodes().root).transform;
    assert!((root.position - Vec3::new(-2.0, 2.0, 0.0)).length() < 1e-5);
}

#[test]
fn pointer_motion_pulses_dollar() {
    let mut scene = dollar();
    scene.update(FRAME, 5.0, PointerState::default());
    let calm = scene.graph().node(scene.nodes().root).transform.scale;

    let state = *scene.update(FRAME, 5.02, PointerState::new(0.5, 0.0));
    let intensity = state.pulse.intensity;
    assert!(approx(intensity, 0.3 - 0.015));
    let pulsed = scene.graph().node(scene.nodes().root).transform.scale;
    assert!(approx(pulsed, calm * (1.0 + intensity * 0.08)));

    // holding still lets it decay back to rest
    for i in 0..40 {
        scene.update(FRAME, 5.04 + i as f64 * 0.016, PointerState::new(0.5, 0.0));
    }
    assert_eq!(scene.state().pulse.intensity, 0.0);
}

#[test]
fn same_seed_same_scene() {
    let mut a = dollar();
    let mut b = dollar();
    for i in 0..30 {
        let t = i as f64 * 0.1;
        let pointer = PointerState::new((t as f32).sin(), (t as f32).cos());
        a.update(FRAME, t, pointer);
        b.update(FRAME, t, pointer);
    }
    for (x, y) in a.graph().nodes().iter().zip(b.graph().nodes()) {
        assert_eq!(x.transform, y.transform);
    }
}

#[test]
fn stars_drift_and_wrap() {
    let mut scene = cube();
    for i in 0..2000 {
        scene.update(FRAME, i as f64 / 60.0, PointerState::default());
    }
    let graph = scene.graph();
    for id in &scene.nodes().stars {
        let z = graph.node(*id).transform.position.z;
        assert!((-30.0..=5.0).contains(&z), "star escaped to z={z}");
    }
}

#[test]
fn invalid_configs_are_rejected() {
    let mut bad_scale = SceneConfig::cube(1);
    bad_scale.scale.main = 0.0;
    assert!(matches!(
        SceneComposer::init(bad_scale, 0.0),
        Err(SceneError::NonPositiveScale { field: "main", .. })
    ));

    let mut too_round = SceneConfig::cube(1);
    too_round.variant.shell = ShellGeometry::RoundedBox(RoundedBoxParams {
        smooth_radius: 0.6,
        ..RoundedBoxParams::default()
    });
    assert!(matches!(
        SceneComposer::init(too_round, 0.0),
        Err(SceneError::SmoothRadiusOutOfRange { .. })
    ));

    let mut instant = SceneConfig::dollar(1);
    instant.variant.entrance.duration = Duration::ZERO;
    assert!(matches!(
        SceneComposer::init(instant, 0.0),
        Err(SceneError::ZeroDuration)
    ));
}

#[test]
fn narrow_viewports_get_compact_cube() {
    let narrow = Camera::hero(0.5);
    let wide = Camera::hero(16.0 / 9.0);
    assert!(narrow.visible_width_at_target() < 5.0);
    assert!(wide.visible_width_at_target() > 5.0);

    assert_eq!(
        SceneConfig::cube(0).fit_viewport(&narrow).scale,
        ScaleConfig::CUBE_COMPACT
    );
    assert_eq!(SceneConfig::cube(0).fit_viewport(&wide).scale, ScaleConfig::CUBE);
    assert_eq!(
        SceneConfig::dollar(0).fit_viewport(&narrow).scale,
        ScaleConfig::DOLLAR
    );
    assert_eq!(
        ScaleConfig::for_viewport(Variant::Cube, &narrow),
        ScaleConfig::CUBE_COMPACT
    );
    assert_eq!(
        ScaleConfig::for_viewport(Variant::Dollar, &narrow),
        ScaleConfig::DOLLAR
    );
}

#[test]
fn rescaling_keeps_the_entrance_running() {
    let mut scene = cube();
    scene.update(FRAME, 1.3, PointerState::default());
    let mid = scene.state().progress;
    assert!(mid > 0.0 && mid < 1.0);

    let narrow = Camera::hero(0.5);
    scene
        .set_scale(ScaleConfig::for_viewport(Variant::Cube, &narrow))
        .unwrap();
    let state = *scene.update(FRAME, 1.4, PointerState::default());
    assert!(state.progress > mid);
    assert!(!scene.entrance().is_complete());
    let main = scene.graph().node(scene.nodes().main).transform;
    assert!(approx(main.scale, ScaleConfig::CUBE_COMPACT.main));

    // widening again restores the full preset
    let wide = Camera::hero(16.0 / 9.0);
    scene
        .set_scale(ScaleConfig::for_viewport(Variant::Cube, &wide))
        .unwrap();
    scene.update(FRAME, 1.5, PointerState::default());
    let main = scene.graph().node(scene.nodes().main).transform;
    assert!(approx(main.scale, ScaleConfig::CUBE.main));

    let mut bad = ScaleConfig::CUBE_COMPACT;
    bad.glow = -1.0;
    assert!(matches!(
        scene.set_scale(bad),
        Err(SceneError::NonPositiveScale { field: "glow", .. })
    ));
    assert_eq!(scene.config().scale, ScaleConfig::CUBE);
}

#[test]
fn viewport_gate_threshold() {
    let gate = ViewportGate::default();
    assert!(gate.allows(1024.0));
    assert!(gate.allows(2560.0));
    assert!(!gate.allows(1023.0));
    assert!(!gate.allows(f64::NAN));
}

#[test]
fn variants_parse_from_names() {
    assert_eq!("cube".parse::<Variant>(), Ok(Variant::Cube));
    assert_eq!(" Dollar ".parse::<Variant>(), Ok(Variant::Dollar));
    assert_eq!("sphere".parse::<Variant>(), Ok(Variant::Dollar));
    assert!("pyramid".parse::<Variant>().is_err());
}

#[test]
fn hsl_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red - Vec3::new(1.0, 0.0, 0.0)).abs().max_element() < 1e-5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!((green - Vec3::new(0.0, 1.0, 0.0)).abs().max_element() < 1e-5);
    assert_eq!(hsl_to_rgb(1.25, 1.0, 0.6), hsl_to_rgb(0.25, 1.0, 0.6));
    assert_eq!(hsl_to_rgb(0.7, 0.0, 0.4), Vec3::splat(0.4));
}

#[test]
fn float_lift_waits_for_entrance() {
    let params = FloatParams::default();
    let mut rng = StdRng::seed_from_u64(3);
    let motion = FloatMotion::new(params, &mut rng);
    for step in 0..50 {
        let pose = motion.sample(step as f64 * 0.3, 0.0);
        assert_eq!(pose.lift, 0.0);
        assert!(pose.rotation.x.abs() <= 1.0 / 8.0 + 1e-6);
        let pose = motion.sample(step as f64 * 0.3, 1.0);
        assert!(pose.lift.abs() <= 0.15 + 1e-6);
    }
}
