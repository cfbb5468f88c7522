// Rounded-box synthesis: region classification, reprojection and the
// finished mesh.

use glam::Vec3;
use hero_core::geometry::*;
use hero_core::SceneError;

const THRESHOLD: f32 = 0.4;
const RADIUS: f32 = 0.1;
const EPS: f32 = 1e-4;

#[test]
fn classification_prefers_corner_then_edge_then_face() {
    assert_eq!(classify(Vec3::new(0.45, -0.45, 0.45), THRESHOLD), Region::Corner);
    assert_eq!(
        classify(Vec3::new(0.45, 0.45, 0.0), THRESHOLD),
        Region::Edge { along: Axis::Z }
    );
    assert_eq!(
        classify(Vec3::new(0.0, -0.45, 0.45), THRESHOLD),
        Region::Edge { along: Axis::X }
    );
    assert_eq!(
        classify(Vec3::new(-0.45, 0.1, 0.45), THRESHOLD),
        Region::Edge { along: Axis::Y }
    );
    assert_eq!(classify(Vec3::new(0.5, 0.2, -0.3), THRESHOLD), Region::Face);
    // exactly on the threshold is still flat
    assert_eq!(classify(Vec3::new(0.4, 0.4, 0.4), THRESHOLD), Region::Face);
}

#[test]
fn corner_vertex_lands_on_sphere_around_shrunk_corner() {
    let v = Vec3::new(0.5, 0.5, 0.5);
    let p = round_vertex(v, THRESHOLD, RADIUS);
    let anchor = Vec3::splat(THRESHOLD);
    assert!((p.distance(anchor) - RADIUS).abs() < EPS);
    // pushed along the diagonal
    assert!((p.x - p.y).abs() < EPS && (p.y - p.z).abs() < EPS);
}

#[test]
fn edge_vertex_keeps_its_along_axis_coordinate() {
    let v = Vec3::new(0.5, 0.1, -0.5);
    let p = round_vertex(v, THRESHOLD, RADIUS);
    assert!((p.y - 0.1).abs() < EPS);
    let anchor = Vec3::new(THRESHOLD, 0.1, -THRESHOLD);
    assert!((p.distance(anchor) - RADIUS).abs() < EPS);
}

#[test]
fn face_vertices_are_untouched() {
    let v = Vec3::new(0.5, 0.3, -0.2);
    assert_eq!(round_vertex(v, THRESHOLD, RADIUS), v);
    assert_eq!(round_vertex(Vec3::ZERO, THRESHOLD, RADIUS), Vec3::ZERO);
}

#[test]
fn subdivided_box_counts() {
    let mesh = subdivided_box(0.5, 4);
    assert_eq!(mesh.vertex_count(), 6 * 5 * 5);
    assert_eq!(mesh.triangle_count(), 6 * 4 * 4 * 2);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn every_rounded_vertex_stays_within_its_region_radius() {
    let params = RoundedBoxParams::default();
    let flat = subdivided_box(params.half_extent, params.subdivisions);
    let rounded = build_rounded_box(&params).unwrap();
    assert_eq!(flat.vertex_count(), rounded.vertex_count());

    let threshold = params.threshold();
    for (orig, p) in flat.positions.iter().zip(&rounded.positions) {
        // inside the original bounding box
        assert!(p.abs().max_element() <= params.half_extent + EPS, "{p:?} escaped");
        let region = classify(*orig, threshold);
        let anchor = region_anchor(*orig, region, threshold);
        match region {
            Region::Face => assert_eq!(orig, p),
            _ => assert!(
                (p.distance(anchor) - params.smooth_radius).abs() < EPS,
                "{orig:?} -> {p:?} not on the rounding surface"
            ),
        }
    }
}

#[test]
fn rounded_box_normals_are_unit_and_outward() {
    let mesh = build_rounded_box(&RoundedBoxParams {
        subdivisions: 8,
        ..RoundedBoxParams::default()
    })
    .unwrap();
    assert_eq!(mesh.normals.len(), mesh.vertex_count());
    assert_eq!(mesh.position_floats().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.normal_floats().len(), mesh.vertex_count() * 3);
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        assert!((n.length() - 1.0).abs() < 1e-3);
        assert!(n.dot(*p) > 0.0, "normal {n:?} at {p:?} points inward");
    }
}

#[test]
fn invalid_box_params_are_rejected() {
    let too_round = RoundedBoxParams {
        smooth_radius: 0.5,
        ..RoundedBoxParams::default()
    };
    assert!(matches!(
        build_rounded_box(&too_round),
        Err(SceneError::SmoothRadiusOutOfRange { .. })
    ));

    let flat = RoundedBoxParams {
        smooth_radius: 0.0,
        ..RoundedBoxParams::default()
    };
    assert!(flat.validate().is_err());

    let empty = RoundedBoxParams {
        subdivisions: 0,
        ..RoundedBoxParams::default()
    };
    assert_eq!(empty.validate(), Err(SceneError::NoSubdivisions));

    let inverted = RoundedBoxParams {
        half_extent: -1.0,
        ..RoundedBoxParams::default()
    };
    assert_eq!(
        inverted.validate(),
        Err(SceneError::NonPositiveHalfExtent(-1.0))
    );
}
