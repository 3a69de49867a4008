// Shared fixtures: items plus recording fakes for the host traits.

#![allow(dead_code)]
use gallery_core::{
    Camera, FrameHandle, FrameScheduler, Item, LightboxPresenter, LightboxState, PanelObject,
    SceneRenderer, ViewportSize,
};

pub fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            index: i,
            image_url: format!("https://images.example/{i}/landscape.jpg"),
            full_url: (i % 2 == 0).then(|| format!("https://images.example/{i}/large2x.jpg")),
            alt: None,
            photographer: None,
        })
        .collect()
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub attached: bool,
    pub attach_calls: usize,
    pub detach_calls: usize,
    pub renders: usize,
    pub rebuilds: Vec<usize>,
    pub resizes: Vec<ViewportSize>,
    pub last_aspect: Option<f32>,
    pub fail_renders: bool,
    pub fail_rebuilds: bool,
}

impl SceneRenderer for RecordingRenderer {
    fn attach(&mut self, _size: ViewportSize) -> anyhow::Result<()> {
        self.attached = true;
        self.attach_calls += 1;
        Ok(())
    }

    fn rebuild(&mut self, panels: &[PanelObject]) -> anyhow::Result<()> {
        if self.fail_rebuilds {
            anyhow::bail!("panel elements could not be created");
        }
        self.rebuilds.push(panels.len());
        Ok(())
    }

    fn resize(&mut self, size: ViewportSize) {
        self.resizes.push(size);
    }

    fn render(&mut self, camera: &Camera, _panels: &[PanelObject]) -> anyhow::Result<()> {
        if self.fail_renders {
            anyhow::bail!("surface lost");
        }
        self.renders += 1;
        self.last_aspect = Some(camera.aspect);
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = false;
        self.detach_calls += 1;
    }
}

#[derive(Default)]
pub struct ManualFrames {
    next: i32,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
pub struct RecordingLightbox {
    pub states: Vec<LightboxState>,
}

impl LightboxPresenter for RecordingLightbox {
    fn present(&mut self, state: &LightboxState) {
        self.states.push(state.clone());
    }
}
