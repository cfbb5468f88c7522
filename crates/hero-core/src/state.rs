//! Plain state types shared with the web and native frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! hosts fill in `PointerState` from their input events and read `Transform`
//! values back out of the scene graph every frame.

use crate::constants::{camera_eye_vec3, CAMERA_FOV_DEG};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The hero camera: up and to the left of the object, looking at the origin.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Width in world units of the view frustum at the target's distance.
    pub fn visible_width_at_target(&self) -> f32 {
        let distance = self.eye.distance(self.target);
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        height * self.aspect
    }
}

/// Last known pointer position, each axis in [-1, 1] with +y up.
///
/// Written by the host on every move event (last write wins), read once per
/// frame by the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Local transform of a scene node. Rotation is XYZ Euler in radians; scale
/// is uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}
