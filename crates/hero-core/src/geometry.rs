//! Rounded-box synthesis.
//!
//! The shell of the cube variant is a subdivided cube whose vertices near
//! edges and corners are pushed onto cylinders and spheres of radius
//! `smooth_radius`. The box is first shrunk by `smooth_radius` and every
//! reprojected vertex is then offset outward by the same amount, which keeps
//! the silhouette continuous where the regions meet.

use crate::constants::{BOX_HALF_EXTENT, BOX_SMOOTH_RADIUS, BOX_SUBDIVISIONS};
use crate::error::{Result, SceneError};
use glam::Vec3;

/// Indexed triangle mesh with per-vertex normals.
///
/// Built once, then handed to the renderer as read-only buffers.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` slice.
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Area-weighted vertex normals from the current positions.
    ///
    /// Vertices are not shared between cube faces, so the seams along the
    /// original cube edges keep one normal per face.
    fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            let face = (pc - pb).cross(pa - pb);
            acc[a] += face;
            acc[b] += face;
            acc[c] += face;
        }
        self.normals = acc.into_iter().map(Vec3::normalize_or_zero).collect();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedBoxParams {
    pub half_extent: f32,
    pub subdivisions: u32,
    pub smooth_radius: f32,
}

impl Default for RoundedBoxParams {
    fn default() -> Self {
        Self {
            half_extent: BOX_HALF_EXTENT,
            subdivisions: BOX_SUBDIVISIONS,
            smooth_radius: BOX_SMOOTH_RADIUS,
        }
    }
}

impl RoundedBoxParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.half_extent > 0.0) || !self.half_extent.is_finite() {
            return Err(SceneError::NonPositiveHalfExtent(self.half_extent));
        }
        if self.subdivisions == 0 {
            return Err(SceneError::NoSubdivisions);
        }
        if !(self.smooth_radius > 0.0 && self.smooth_radius < self.half_extent) {
            return Err(SceneError::SmoothRadiusOutOfRange {
                radius: self.smooth_radius,
                half_extent: self.half_extent,
            });
        }
        Ok(())
    }

    /// Coordinate magnitude beyond which a vertex leaves the flat face.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.half_extent - self.smooth_radius
    }
}

/// Axis index into a `Vec3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Where a cube vertex sits relative to the shrunk inner box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// All three coordinates past the threshold.
    Corner,
    /// Two coordinates past the threshold; the edge runs along `along`.
    Edge { along: Axis },
    Face,
}

/// Classify a vertex. Corner is tested before edge, edge before face.
pub fn classify(v: Vec3, threshold: f32) -> Region {
    let a = v.abs();
    let (bx, by, bz) = (a.x > threshold, a.y > threshold, a.z > threshold);
    if bx && by && bz {
        Region::Corner
    } else if bx && by {
        Region::Edge { along: Axis::Z }
    } else if by && bz {
        Region::Edge { along: Axis::X }
    } else if bz && bx {
        Region::Edge { along: Axis::Y }
    } else {
        Region::Face
    }
}

/// Centre of the sphere (corner) or the closest point on the axis of the
/// cylinder (edge) that a vertex in `region` is projected around. Face
/// vertices are their own anchor.
pub fn region_anchor(v: Vec3, region: Region, threshold: f32) -> Vec3 {
    let shrunk = v.signum() * threshold;
    match region {
        Region::Corner => shrunk,
        Region::Edge { along } => {
            let mut anchor = shrunk;
            anchor[along.index()] = v[along.index()];
            anchor
        }
        Region::Face => v,
    }
}

/// Move one vertex onto the rounded surface.
pub fn round_vertex(v: Vec3, threshold: f32, smooth_radius: f32) -> Vec3 {
    let region = classify(v, threshold);
    if region == Region::Face {
        return v;
    }
    let anchor = region_anchor(v, region, threshold);
    // Edge anchors share the along-axis coordinate, so the offset already
    // lies in the plane perpendicular to the edge.
    match (v - anchor).try_normalize() {
        Some(dir) => anchor + dir * smooth_radius,
        None => v,
    }
}

/// A cube of side `2 * half_extent` with every face split into a
/// `subdivisions x subdivisions` grid of quads. Faces do not share vertices.
pub fn subdivided_box(half_extent: f32, subdivisions: u32) -> Mesh {
    // (normal, u, v) with u x v == normal so quads wind counter-clockwise
    // seen from outside.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let n = subdivisions.max(1);
    let row = n + 1;
    let per_face = (row * row) as usize;
    let mut mesh = Mesh {
        positions: Vec::with_capacity(per_face * 6),
        normals: Vec::with_capacity(per_face * 6),
        indices: Vec::with_capacity((n * n * 6 * 6) as usize),
    };

    for (normal, u, v) in FACES {
        let base = mesh.positions.len() as u32;
        for j in 0..row {
            let b = -half_extent + 2.0 * half_extent * (j as f32 / n as f32);
            for i in 0..row {
                let a = -half_extent + 2.0 * half_extent * (i as f32 / n as f32);
                mesh.positions.push(normal * half_extent + u * a + v * b);
                mesh.normals.push(normal);
            }
        }
        for j in 0..n {
            for i in 0..n {
                let p00 = base + j * row + i;
                let p10 = p00 + 1;
                let p01 = p00 + row;
                let p11 = p01 + 1;
                mesh.indices.extend_from_slice(&[p00, p10, p11, p00, p11, p01]);
            }
        }
    }
    mesh
}

/// Build the rounded box shell.
///
/// Every vertex is reprojected first; normals are recomputed once at the end.
pub fn build_rounded_box(params: &RoundedBoxParams) -> Result<Mesh> {
    params.validate()?;
    let mut mesh = subdivided_box(params.half_extent, params.subdivisions);
    let threshold = params.threshold();
    for p in mesh.positions.iter_mut() {
        *p = round_vertex(*p, threshold, params.smooth_radius);
    }
    mesh.recompute_normals();
    log::debug!(
        "[geometry] rounded box: {} vertices, {} triangles, radius {:.3}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        params.smooth_radius
    );
    Ok(mesh)
}
