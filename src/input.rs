// Pure-Rust helpers shared by the web host: pointer normalization and the
// per-frame node record layout. Nothing here touches web APIs, so the host
// tests include this file directly.

use hero_core::{Node, PointerState, Primitive, SceneGraph};

/// Map a client-space pointer position onto [-1, 1] on both axes, +y up.
///
/// A zero-sized viewport yields the centre.
#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> PointerState {
    if !(width > 0.0 && height > 0.0) {
        return PointerState::default();
    }
    let x = client_x / width * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    PointerState::new(x as f32, y as f32)
}

/// Width / height, or 1 for a degenerate viewport.
#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if width > 0.0 && height > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

/// Per-node state streamed to the renderer every frame. Hidden nodes carry
/// scale 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeRecord {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive_intensity: f32,
}

impl NodeRecord {
    pub const FLOATS: usize = std::mem::size_of::<NodeRecord>() / std::mem::size_of::<f32>();

    pub fn from_node(node: &Node) -> Self {
        let t = &node.transform;
        let mut record = NodeRecord {
            position: t.position.to_array(),
            rotation: t.rotation.to_array(),
            scale: if node.visible { t.scale } else { 0.0 },
            ..Default::default()
        };
        if let Some(material) = &node.material {
            record.color = material.params.color.to_array();
            record.opacity = material.params.opacity;
            record.emissive_intensity = material.params.emissive_intensity;
        }
        record
    }
}

/// Refill `out` with one record per node, in node order.
pub fn pack_records(graph: &SceneGraph, out: &mut Vec<NodeRecord>) {
    out.clear();
    out.extend(graph.nodes().iter().map(NodeRecord::from_node));
}

/// Parent index per node, -1 for top-level nodes.
pub fn parent_indices(graph: &SceneGraph) -> Vec<i32> {
    graph
        .nodes()
        .iter()
        .map(|n| n.parent.map_or(-1, |p| p.0 as i32))
        .collect()
}

/// Material kind code per node, -1 for groups.
pub fn material_codes(graph: &SceneGraph) -> Vec<i32> {
    graph
        .nodes()
        .iter()
        .map(|n| n.material.map_or(-1, |m| m.kind.code() as i32))
        .collect()
}

/// Primitive code per node, -1 for groups.
pub fn primitive_codes(graph: &SceneGraph) -> Vec<i32> {
    graph
        .nodes()
        .iter()
        .map(|n| match n.primitive {
            None => -1,
            Some(Primitive::RoundedBox) => 0,
            Some(Primitive::Sphere { .. }) => 1,
            Some(Primitive::Icosahedron { .. }) => 2,
            Some(Primitive::Streak) => 3,
        })
        .collect()
}
