//! CSS 3D projection helpers.
//!
//! Panels are DOM elements positioned with `matrix3d` transforms inside a
//! camera element, itself inside a viewer element carrying the `perspective`.
//! CSS has +y pointing down, so the y axis is flipped on both sides.

use crate::camera::Camera;
use glam::Mat4;
use std::fmt::Write;

/// Styles for the viewer and camera elements for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CssProjection {
    /// Distance in px used for the viewer's `perspective` property.
    pub perspective_px: f32,
    pub camera_transform: String,
}

pub fn camera_projection(camera: &Camera, width: f32, height: f32) -> CssProjection {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let perspective_px = camera.projection_matrix().col(1).y * half_h;
    let camera_transform = format!(
        "translateZ({}px){}translate({}px,{}px)",
        perspective_px,
        camera_matrix3d(camera.view_matrix()),
        half_w,
        half_h
    );
    CssProjection {
        perspective_px,
        camera_transform,
    }
}

/// `matrix3d(...)` for a view matrix, flipping y into CSS space.
pub fn camera_matrix3d(view: Mat4) -> String {
    let mut e = view.to_cols_array();
    for i in [1, 5, 9, 13] {
        e[i] = -e[i];
    }
    matrix3d(&e)
}

/// Full transform for a panel element centred on its own origin.
pub fn object_transform(world: Mat4) -> String {
    let mut e = world.to_cols_array();
    for v in &mut e[4..8] {
        *v = -*v;
    }
    format!("translate(-50%,-50%){}", matrix3d(&e))
}

fn matrix3d(e: &[f32; 16]) -> String {
    let mut out = String::with_capacity(160);
    out.push_str("matrix3d(");
    for (i, v) in e.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        _ = write!(out, "{}", epsilon(*v));
    }
    out.push(')');
    out
}

/// Snap tiny magnitudes and negative zero to 0.
#[inline]
pub fn epsilon(v: f32) -> f32 {
    if v.abs() < 1e-10 {
        0.0
    } else {
        v
    }
}
