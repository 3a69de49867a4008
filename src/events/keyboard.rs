use super::dispatch;
use crate::dom::Listener;
use crate::SharedSession;
use gallery_core::{Command, FormationKind};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map a key to a session command: formation shortcuts plus Escape.
#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    if key == "Escape" {
        return Some(Command::CloseLightbox);
    }
    FormationKind::from_shortcut(key).map(Command::Transform)
}

pub fn wire_keyboard(session: &SharedSession) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let session = Rc::downgrade(session);
    Listener::new(&window, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let (Some(s), Some(command)) = (session.upgrade(), command_for_key(&ev.key())) else {
            return;
        };
        dispatch(&s, command);
    })
}
