use crate::Session;
use gallery_core::{drive_frame, FrameHandle, FrameScheduler};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed frame clock. Clones share one callback.
#[derive(Clone, Default)]
pub struct RafScheduler {
    tick: TickSlot,
    retry: Rc<Cell<Option<FrameHandle>>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the per-frame callback driving `session`.
    pub fn install(&self, session: Weak<RefCell<Session>>) {
        let last = Rc::new(Cell::new(Instant::now()));
        // The clone shares the tick slot; `release` breaks the cycle.
        let mut frames = self.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frames.retry.set(None);
            let now = Instant::now();
            let dt = now - last.get();
            last.set(now);
            let Some(session) = session.upgrade() else {
                return;
            };
            let retry = drive_frame(&*session, &mut frames, |s| {
                s.tick(dt);
            });
            frames.retry.set(retry);
        }) as Box<dyn FnMut()>));
    }

    /// Cancel any busy-retry frame and drop the callback. The session's own
    /// pending frame must already be cancelled.
    pub fn release(&self) {
        if let Some(handle) = self.retry.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle.0);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}
