//! Perspective camera shared by the controls and the CSS 3D projection.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }
}

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
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            eye: config.eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.fov_deg.to_radians(),
            znear: config.near,
            zfar: config.far,
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

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default(), 1.0)
    }
}
