//! Flat scene-graph arena handed to the renderer.
//!
//! Nodes are created once when a scene is composed; afterwards only their
//! transforms and material parameters change. Topology is fixed, so hosts can
//! upload names, parents and material kinds once and stream the rest.

use crate::color::WHITE;
use crate::state::Transform;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Geometry a node draws. The rounded box is built by this crate; the rest
/// are renderer primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    RoundedBox,
    Sphere { segments: u32 },
    Icosahedron { detail: u32 },
    /// Thin streak for the star field.
    Streak,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Blending {
    #[default]
    Normal,
    Additive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    /// Inside faces only, for shells seen from within.
    Back,
}

/// Static description of the glass shell's refraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionParams {
    pub transmission: f32,
    pub roughness: f32,
    pub thickness: f32,
    pub ior: f32,
    pub chromatic_aberration: f32,
    pub distortion: f32,
}

impl Default for TransmissionParams {
    fn default() -> Self {
        Self {
            transmission: 0.98,
            roughness: 0.05,
            thickness: 1.2,
            ior: 1.8,
            chromatic_aberration: 1.5,
            distortion: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialKind {
    /// Unlit colour.
    Basic,
    Transmission(TransmissionParams),
    /// Metallic, glossy, self-lit with the given emissive colour.
    Emissive { emissive: Vec3 },
}

impl MaterialKind {
    pub fn code(&self) -> u32 {
        match self {
            MaterialKind::Basic => 0,
            MaterialKind::Transmission(_) => 1,
            MaterialKind::Emissive { .. } => 2,
        }
    }
}

/// Per-frame material inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParams {
    pub color: Vec3,
    pub opacity: f32,
    pub emissive_intensity: f32,
    pub blending: Blending,
    pub side: Side,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            color: WHITE,
            opacity: 1.0,
            emissive_intensity: 0.0,
            blending: Blending::Normal,
            side: Side::Front,
        }
    }
}

impl MaterialParams {
    pub fn additive(color: Vec3, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            blending: Blending::Additive,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub params: MaterialParams,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub primitive: Option<Primitive>,
    pub material: Option<Material>,
    pub transform: Transform,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    pub fn add_group(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        self.push(Node {
            name: name.into(),
            parent,
            children: SmallVec::new(),
            primitive: None,
            material: None,
            transform: Transform::default(),
            visible: true,
        })
    }

    pub fn add_mesh(
        &mut self,
        name: impl Into<String>,
        parent: NodeId,
        primitive: Primitive,
        material: Material,
    ) -> NodeId {
        self.push(Node {
            name: name.into(),
            parent: Some(parent),
            children: SmallVec::new(),
            primitive: Some(primitive),
            material: Some(material),
            transform: Transform::default(),
            visible: true,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    /// Material parameters of a mesh node. Groups have none.
    pub fn material_mut(&mut self, id: NodeId) -> Option<&mut MaterialParams> {
        self.nodes[id.0].material.as_mut().map(|m| &mut m.params)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.nodes[id.0].visible = visible;
    }

    pub fn local_matrix(&self, id: NodeId) -> Mat4 {
        let t = &self.nodes[id.0].transform;
        let r = t.rotation;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(t.scale),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            t.position,
        )
    }

    /// Local matrix composed with every ancestor's.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = self.local_matrix(id);
        let mut cursor = self.nodes[id.0].parent;
        while let Some(parent) = cursor {
            m = self.local_matrix(parent) * m;
            cursor = self.nodes[parent.0].parent;
        }
        m
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }
}
