//! Camera projection parameters plus navigation, sized to the host viewport.

use crate::camera::{Camera, CameraConfig};
use crate::controls::{ControlsConfig, DragMode, ScreenRect, TrackballControls, WheelUnit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    fn screen_rect(&self) -> ScreenRect {
        ScreenRect::new(self.width as f32, self.height as f32)
    }
}

#[derive(Clone, Debug)]
pub struct ViewportController {
    camera: Camera,
    controls: TrackballControls,
    size: ViewportSize,
}

impl ViewportController {
    pub fn new(camera: &CameraConfig, controls: ControlsConfig, size: ViewportSize) -> Self {
        Self {
            camera: Camera::new(camera, size.aspect()),
            controls: TrackballControls::new(controls, size.screen_rect()),
            size,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn drag_mode(&self) -> DragMode {
        self.controls.mode()
    }

    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls.enabled = enabled;
    }

    /// Recompute the aspect ratio and the pointer normalization rect.
    pub fn resize(&mut self, size: ViewportSize) {
        self.size = size;
        self.camera.aspect = size.aspect();
        self.controls.set_screen(size.screen_rect());
    }

    /// Per-frame damping step. Returns true when the camera moved.
    pub fn update(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }

    pub fn pointer_down(&mut self, button: i16, x: f32, y: f32) -> bool {
        self.controls.pointer_down(button, x, y);
        self.update()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.controls.pointer_move(x, y);
        self.update()
    }

    pub fn pointer_up(&mut self) -> bool {
        self.controls.pointer_up();
        self.update()
    }

    pub fn wheel(&mut self, delta_y: f32, unit: WheelUnit) -> bool {
        self.controls.wheel(delta_y, unit);
        self.update()
    }
}
