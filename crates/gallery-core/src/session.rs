//! The viewport session: owns the scene, formations, animation set, camera
//! and host collaborators, with an explicit `init` / `dispose` lifecycle.

use crate::config::{RedrawPolicy, SessionConfig};
use crate::controls::WheelUnit;
use crate::error::SessionError;
use crate::formation::{self, FormationKind, Formations};
use crate::host::{FrameHandle, FrameScheduler, LightboxPresenter, LightboxState, SceneRenderer};
use crate::photo::Item;
use crate::scene::SceneRegistry;
use crate::transition::AnimationSet;
use crate::viewport::{ViewportController, ViewportSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Discrete inputs from the UI surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Transform(FormationKind),
    Resize(ViewportSize),
    OpenPanel(usize),
    CloseLightbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Created,
    Running,
    Disposed,
}

pub struct ViewportSession<R, F, L> {
    config: SessionConfig,
    phase: SessionPhase,
    registry: SceneRegistry,
    formations: Formations,
    animations: AnimationSet,
    viewport: ViewportController,
    lightbox_state: LightboxState,
    current: Option<FormationKind>,
    rng: StdRng,
    pending_frame: Option<FrameHandle>,
    frames_rendered: u64,
    render_failures: u64,
    renderer: R,
    frames: F,
    lightbox: L,
}

impl<R, F, L> ViewportSession<R, F, L>
where
    R: SceneRenderer,
    F: FrameScheduler,
    L: LightboxPresenter,
{
    pub fn new(config: SessionConfig, size: ViewportSize, renderer: R, frames: F, lightbox: L) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            viewport: ViewportController::new(&config.camera, config.controls.clone(), size),
            animations: AnimationSet::with_easing(config.easing),
            config,
            phase: SessionPhase::Created,
            registry: SceneRegistry::default(),
            formations: Formations::default(),
            lightbox_state: LightboxState::default(),
            current: None,
            rng,
            pending_frame: None,
            frames_rendered: 0,
            render_failures: 0,
            renderer,
            frames,
            lightbox,
        }
    }

    /// Attach the output surface and start the frame loop.
    pub fn init(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Running => return Ok(()),
            SessionPhase::Disposed => return Err(SessionError::Disposed),
            SessionPhase::Created => {}
        }
        self.renderer
            .attach(self.viewport.size())
            .map_err(SessionError::Render)?;
        self.phase = SessionPhase::Running;
        self.pending_frame = self.frames.request_frame();
        log::info!(
            "[session] init {}x{}",
            self.viewport.size().width,
            self.viewport.size().height
        );
        Ok(())
    }

    /// Stop the frame loop, drop all tweens and detach the output surface.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.phase == SessionPhase::Disposed {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.frames.cancel_frame(handle);
        }
        self.animations.cancel_all();
        if self.phase == SessionPhase::Running {
            self.renderer.detach();
        }
        self.phase = SessionPhase::Disposed;
        log::info!("[session] disposed after {} frames", self.frames_rendered);
    }

    /// Replace the photo list: rebuild panels and formations for the new N,
    /// then run the opening table transition. If the renderer cannot build
    /// the new panels the previous scene is kept.
    pub fn load_items(&mut self, items: &[Item]) -> Result<(), SessionError> {
        self.ensure_not_disposed()?;
        let registry = SceneRegistry::build(items, &mut self.rng);
        self.renderer
            .rebuild(registry.panels())
            .map_err(SessionError::Render)?;
        self.animations.cancel_all();
        self.registry = registry;
        self.formations = formation::generate(items.len());
        self.current = None;
        log::info!("[session] loaded {} photos", items.len());
        self.transform(FormationKind::Table)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Transform(kind) => self.transform(kind),
            Command::Resize(size) => self.resize(size),
            Command::OpenPanel(index) => self.open_panel(index),
            Command::CloseLightbox => self.close_lightbox(),
        }
    }

    pub fn transform(&mut self, kind: FormationKind) -> Result<(), SessionError> {
        let base = self.config.transition_base;
        self.transform_with(kind, base)
    }

    /// Hard cutover to `kind`; a no-op while the scene is empty.
    pub fn transform_with(&mut self, kind: FormationKind, base: Duration) -> Result<(), SessionError> {
        self.ensure_not_disposed()?;
        if self.registry.is_empty() {
            log::debug!("[session] {kind} requested with no panels");
            return Ok(());
        }
        self.animations.transform(
            &self.registry,
            self.formations.get(kind),
            base,
            &mut self.rng,
        )?;
        self.current = Some(kind);
        log::info!("[session] -> {kind} over {}ms", base.as_millis());
        Ok(())
    }

    /// One frame: advance tweens and camera damping, redraw, reschedule.
    /// Returns whether a redraw happened.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.pending_frame = None;

        let step = self.animations.update(dt, &mut self.registry);
        if step.settled {
            log::debug!("[session] transition settled");
        }
        let camera_moved = self.viewport.update();
        let wants_redraw = match self.config.redraw {
            RedrawPolicy::EveryFrame => true,
            RedrawPolicy::OnDemand => step.needs_redraw() || camera_moved,
        };
        let rendered = wants_redraw && self.redraw();

        self.pending_frame = self.frames.request_frame();
        rendered
    }

    pub fn resize(&mut self, size: ViewportSize) -> Result<(), SessionError> {
        self.ensure_not_disposed()?;
        self.viewport.resize(size);
        if self.phase == SessionPhase::Running {
            self.renderer.resize(size);
            self.redraw();
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, button: i16, x: f32, y: f32) -> bool {
        self.is_running() && self.viewport.pointer_down(button, x, y) && self.redraw()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.is_running() && self.viewport.pointer_move(x, y) && self.redraw()
    }

    pub fn pointer_up(&mut self) -> bool {
        self.is_running() && self.viewport.pointer_up() && self.redraw()
    }

    pub fn wheel(&mut self, delta_y: f32, unit: WheelUnit) -> bool {
        self.is_running() && self.viewport.wheel(delta_y, unit) && self.redraw()
    }

    pub fn open_panel(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_not_disposed()?;
        let item = self
            .registry
            .get(index)
            .map(|p| p.item())
            .ok_or(SessionError::NoSuchPanel(index))?;
        let photo = item.full_url.clone().unwrap_or_else(|| item.image_url.clone());
        self.lightbox_state = LightboxState {
            photo: Some(photo),
            open: true,
            blur: true,
        };
        self.viewport.set_controls_enabled(false);
        self.lightbox.present(&self.lightbox_state);
        Ok(())
    }

    /// Close the lightbox and clear the viewport blur. The photo reference
    /// is kept so the closing animation still has an image.
    pub fn close_lightbox(&mut self) -> Result<(), SessionError> {
        self.ensure_not_disposed()?;
        self.lightbox_state.open = false;
        self.lightbox_state.blur = false;
        self.viewport.set_controls_enabled(true);
        self.lightbox.present(&self.lightbox_state);
        Ok(())
    }

    // Render failures are isolated to the frame they happen in.
    fn redraw(&mut self) -> bool {
        match self
            .renderer
            .render(self.viewport.camera(), self.registry.panels())
        {
            Ok(()) => {
                self.frames_rendered += 1;
                true
            }
            Err(e) => {
                self.render_failures += 1;
                log::error!("[session] render error: {e:?}");
                false
            }
        }
    }

    fn ensure_not_disposed(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Disposed {
            Err(SessionError::Disposed)
        } else {
            Ok(())
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn formations(&self) -> &Formations {
        &self.formations
    }

    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn lightbox_state(&self) -> &LightboxState {
        &self.lightbox_state
    }

    pub fn current_formation(&self) -> Option<FormationKind> {
        self.current
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn render_failures(&self) -> u64 {
        self.render_failures
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn lightbox(&self) -> &L {
        &self.lightbox
    }
}
