pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_navigation;

use crate::constants::LIGHTBOX_CLOSE_ID;
use crate::dom::{self, Listener};
use crate::{Session, SharedSession};
use gallery_core::{Command, FormationKind};
use std::rc::Rc;
use web_sys as web;

/// Run `command` against the session if it is alive and not already borrowed.
pub fn dispatch(session: &SharedSession, command: Command) {
    with_session(session, |s| {
        if let Err(e) = s.dispatch(command) {
            log::warn!("[events] command failed: {e}");
        }
    });
}

pub fn with_session(session: &SharedSession, f: impl FnOnce(&mut Session)) {
    match session.try_borrow_mut() {
        Ok(mut s) => f(&mut s),
        Err(_) => log::warn!("[events] session busy, input dropped"),
    }
}

/// One button per formation, looked up by the formation id.
pub fn wire_formation_buttons(document: &web::Document, session: &SharedSession) -> Vec<Listener> {
    FormationKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let session = Rc::downgrade(session);
            dom::add_click_listener(document, kind.id(), move || {
                if let Some(s) = session.upgrade() {
                    dispatch(&s, Command::Transform(kind));
                }
            })
        })
        .collect()
}

pub fn wire_lightbox_close(document: &web::Document, session: &SharedSession) -> Option<Listener> {
    let session = Rc::downgrade(session);
    dom::add_click_listener(document, LIGHTBOX_CLOSE_ID, move || {
        if let Some(s) = session.upgrade() {
            dispatch(&s, Command::CloseLightbox);
        }
    })
}

pub fn wire_resize(session: &SharedSession) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let session = Rc::downgrade(session);
    Listener::new(&window, "resize", move |_| {
        if let Some(s) = session.upgrade() {
            dispatch(&s, Command::Resize(dom::viewport_size()));
        }
    })
}
