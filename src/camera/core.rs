use glam::{Mat3, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::options::CameraOptions;

/// Perspective camera defined by a world position, an orientation and
/// projection parameters.
///
/// The camera looks down its local -Z axis with +Y up, so the identity
/// orientation faces world -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World-space orientation. Roll is never introduced by the navigators.
    pub orientation: Quat,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// Copy of the camera state handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraSnapshot {
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Orientation quaternion as `[x, y, z, w]`.
    pub orientation: [f32; 4],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Combined view-projection matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1.0)
    }
}

impl Camera {
    /// Create a camera at the origin with projection parameters taken from
    /// `options`.
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera-space right axis in world space.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera-space up axis in world space.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Orient the camera toward `target` keeping world +Y as up.
    ///
    /// A target at the eye position, or straight above/below it, leaves the
    /// orientation as it was.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            return;
        }
        let up = right.cross(forward);
        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }

    /// World-to-view matrix.
    pub fn build_view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Projection matrix. Uses the WebGL depth convention, so visible
    /// points land in NDC depth `[-1, 1]`.
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Capture the current state for a renderer.
    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            position: self.position.to_array(),
            orientation: self.orientation.to_array(),
            fovy: self.fovy,
            aspect: self.aspect,
            znear: self.znear,
            zfar: self.zfar,
            view_proj: self.build_matrix().to_cols_array_2d(),
        }
    }
}
