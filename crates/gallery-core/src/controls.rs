//! Trackball navigation: rotate around the target, dolly, and pan, with
//! inertia that decays over successive updates.

use crate::camera::Camera;
use crate::constants::*;
use glam::{Quat, Vec2, Vec3};

const MOVE_EPS: f32 = 0.000_001;

#[derive(Clone, Debug, PartialEq)]
pub struct ControlsConfig {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub dynamic_damping_factor: f32,
    pub static_moving: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_speed: ROTATE_SPEED,
            zoom_speed: ZOOM_SPEED,
            pan_speed: PAN_SPEED,
            dynamic_damping_factor: DYNAMIC_DAMPING_FACTOR,
            static_moving: false,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Zoom,
    Pan,
}

impl DragMode {
    /// Map a pointer button (0 primary, 1 middle, 2 secondary) to a mode.
    pub fn for_button(button: i16) -> DragMode {
        match button {
            0 => DragMode::Rotate,
            1 => DragMode::Zoom,
            2 => DragMode::Pan,
            _ => DragMode::None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelUnit {
    Pixel,
    Line,
    Page,
}

/// Viewport-relative rectangle used to normalize pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Pointer position in \[0, 1\] screen units.
    pub fn on_screen(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x - self.left) / self.width.max(1.0),
            (y - self.top) / self.height.max(1.0),
        )
    }

    /// Pointer position projected on a virtual trackball centred in the rect.
    pub fn on_circle(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1.0);
        Vec2::new(
            (x - w * 0.5 - self.left) / (w * 0.5),
            (self.height + 2.0 * (self.top - y)) / w,
        )
    }
}

#[derive(Clone, Debug)]
pub struct TrackballControls {
    pub config: ControlsConfig,
    pub enabled: bool,
    screen: ScreenRect,
    mode: DragMode,
    move_prev: Vec2,
    move_curr: Vec2,
    last_axis: Vec3,
    last_angle: f32,
    zoom_start: Vec2,
    zoom_end: Vec2,
    pan_start: Vec2,
    pan_end: Vec2,
}

impl TrackballControls {
    pub fn new(config: ControlsConfig, screen: ScreenRect) -> Self {
        Self {
            config,
            enabled: true,
            screen,
            mode: DragMode::None,
            move_prev: Vec2::ZERO,
            move_curr: Vec2::ZERO,
            last_axis: Vec3::ZERO,
            last_angle: 0.0,
            zoom_start: Vec2::ZERO,
            zoom_end: Vec2::ZERO,
            pan_start: Vec2::ZERO,
            pan_end: Vec2::ZERO,
        }
    }

    pub fn set_screen(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn pointer_down(&mut self, button: i16, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.mode = DragMode::for_button(button);
        match self.mode {
            DragMode::Rotate => {
                self.move_curr = self.screen.on_circle(x, y);
                self.move_prev = self.move_curr;
            }
            DragMode::Zoom => {
                self.zoom_start = self.screen.on_screen(x, y);
                self.zoom_end = self.zoom_start;
            }
            DragMode::Pan => {
                self.pan_start = self.screen.on_screen(x, y);
                self.pan_end = self.pan_start;
            }
            DragMode::None => {}
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        match self.mode {
            DragMode::Rotate => {
                self.move_prev = self.move_curr;
                self.move_curr = self.screen.on_circle(x, y);
            }
            DragMode::Zoom => self.zoom_end = self.screen.on_screen(x, y),
            DragMode::Pan => self.pan_end = self.screen.on_screen(x, y),
            DragMode::None => {}
        }
    }

    pub fn pointer_up(&mut self) {
        self.mode = DragMode::None;
    }

    pub fn wheel(&mut self, delta_y: f32, unit: WheelUnit) {
        if !self.enabled {
            return;
        }
        let scale = match unit {
            WheelUnit::Pixel => WHEEL_ZOOM_PIXEL,
            WheelUnit::Line => WHEEL_ZOOM_LINE,
            WheelUnit::Page => WHEEL_ZOOM_PAGE,
        };
        self.zoom_start.y -= delta_y * scale;
    }

    /// Apply accumulated input to `camera`. Returns true when the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let mut eye = camera.eye - camera.target;
        self.rotate(camera, &mut eye);
        self.zoom(&mut eye);
        self.pan(camera, eye);
        camera.eye = camera.target + eye;
        self.check_distances(camera);

        before.distance_squared(camera.eye) > MOVE_EPS
    }

    fn rotate(&mut self, camera: &mut Camera, eye: &mut Vec3) {
        let delta = self.move_curr - self.move_prev;
        let mut angle = delta.length();
        if angle > 0.0 {
            let eye_dir = eye.normalize_or_zero();
            let object_up = camera.up.normalize_or_zero();
            let sideways = object_up.cross(eye_dir).normalize_or_zero();
            let move_dir = object_up * delta.y + sideways * delta.x;
            let axis = move_dir.cross(*eye).normalize_or_zero();
            angle *= self.config.rotate_speed;
            if axis != Vec3::ZERO {
                let q = Quat::from_axis_angle(axis, angle);
                *eye = q * *eye;
                camera.up = q * camera.up;
                self.last_axis = axis;
                self.last_angle = angle;
            }
        } else if !self.config.static_moving && self.last_angle != 0.0 {
            self.last_angle *= (1.0 - self.config.dynamic_damping_factor).sqrt();
            // A held rotate drag only turns the camera by what the pointer moved.
            if self.mode != DragMode::Rotate && self.last_axis != Vec3::ZERO {
                let q = Quat::from_axis_angle(self.last_axis, self.last_angle);
                *eye = q * *eye;
                camera.up = q * camera.up;
            }
            if self.last_angle.abs() < MOVE_EPS {
                self.last_angle = 0.0;
            }
        }
        self.move_prev = self.move_curr;
    }

    fn zoom(&mut self, eye: &mut Vec3) {
        let factor = 1.0 + (self.zoom_end.y - self.zoom_start.y) * self.config.zoom_speed;
        if factor != 1.0 && factor > 0.0 {
            *eye *= factor;
        }
        if self.config.static_moving {
            self.zoom_start = self.zoom_end;
        } else {
            self.zoom_start.y +=
                (self.zoom_end.y - self.zoom_start.y) * self.config.dynamic_damping_factor;
        }
    }

    fn pan(&mut self, camera: &mut Camera, eye: Vec3) {
        let mut change = self.pan_end - self.pan_start;
        if change.length_squared() > 0.0 {
            change *= eye.length() * self.config.pan_speed;
            let side = eye.cross(camera.up).normalize_or_zero() * change.x;
            let up = camera.up.normalize_or_zero() * change.y;
            camera.target += side + up;
            if self.config.static_moving {
                self.pan_start = self.pan_end;
            } else {
                self.pan_start += (self.pan_end - self.pan_start) * self.config.dynamic_damping_factor;
            }
        }
    }

    fn check_distances(&mut self, camera: &mut Camera) {
        let eye = camera.eye - camera.target;
        let (min, max) = (self.config.min_distance, self.config.max_distance);
        if eye.length_squared() > max * max {
            camera.eye = camera.target + eye.normalize_or_zero() * max;
            self.zoom_start = self.zoom_end;
        }
        let eye = camera.eye - camera.target;
        if eye.length_squared() < min * min {
            camera.eye = camera.target + eye.normalize_or_zero() * min;
            self.zoom_start = self.zoom_end;
        }
    }
}
