//! Seams between the session and whatever platform hosts it.

use crate::camera::Camera;
use crate::scene::PanelObject;
use crate::viewport::ViewportSize;
use std::cell::RefCell;

/// Opaque id for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host frame clock. The session asks for one frame at a time and cancels
/// the pending one on dispose.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Draws panels through a camera onto the host surface.
pub trait SceneRenderer {
    /// Attach the output surface to the host mount point.
    fn attach(&mut self, size: ViewportSize) -> anyhow::Result<()>;
    /// Replace all panel visuals; called whenever the photo list changes.
    fn rebuild(&mut self, panels: &[PanelObject]) -> anyhow::Result<()>;
    fn resize(&mut self, size: ViewportSize);
    fn render(&mut self, camera: &Camera, panels: &[PanelObject]) -> anyhow::Result<()>;
    /// Release the output surface and any listeners it owns.
    fn detach(&mut self);
}

/// Full-size view state for a clicked panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub photo: Option<String>,
    pub open: bool,
    /// Blur applied to the 3D viewport while the lightbox is up.
    pub blur: bool,
}

pub trait LightboxPresenter {
    fn present(&mut self, state: &LightboxState);
}

/// Run one frame callback against a shared session. If the session is
/// already borrowed the frame is skipped and a replacement frame is
/// requested, so the loop keeps going. Returns that replacement's handle.
pub fn drive_frame<S, F>(
    session: &RefCell<S>,
    frames: &mut F,
    step: impl FnOnce(&mut S),
) -> Option<FrameHandle>
where
    F: FrameScheduler,
{
    match session.try_borrow_mut() {
        Ok(mut s) => {
            step(&mut s);
            None
        }
        Err(_) => {
            log::warn!("[frame] session busy, retrying next frame");
            frames.request_frame()
        }
    }
}
