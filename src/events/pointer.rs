use super::with_session;
use crate::dom::Listener;
use crate::SharedSession;
use gallery_core::controls::WheelUnit;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trackball input: press on the viewer, move/release anywhere in the window.
pub fn wire_navigation(
    surface: &web::EventTarget,
    session: &SharedSession,
) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(vec![
        wire_pointerdown(surface, session)?,
        wire_pointermove(&window, session)?,
        wire_pointerup(&window, session)?,
        wire_wheel(surface, session)?,
        Listener::new(surface, "contextmenu", |ev| ev.prevent_default())?,
    ])
}

fn wire_pointerdown(target: &web::EventTarget, session: &SharedSession) -> anyhow::Result<Listener> {
    let session = Rc::downgrade(session);
    Listener::new(target, "pointerdown", move |ev| {
        let (Some(s), Some(ev)) = (session.upgrade(), ev.dyn_ref::<web::PointerEvent>()) else {
            return;
        };
        with_session(&s, |s| {
            s.pointer_down(ev.button(), ev.client_x() as f32, ev.client_y() as f32);
        });
    })
}

fn wire_pointermove(target: &web::EventTarget, session: &SharedSession) -> anyhow::Result<Listener> {
    let session = Rc::downgrade(session);
    Listener::new(target, "pointermove", move |ev| {
        let (Some(s), Some(ev)) = (session.upgrade(), ev.dyn_ref::<web::PointerEvent>()) else {
            return;
        };
        with_session(&s, |s| {
            s.pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        });
    })
}

fn wire_pointerup(target: &web::EventTarget, session: &SharedSession) -> anyhow::Result<Listener> {
    let session = Rc::downgrade(session);
    Listener::new(target, "pointerup", move |_| {
        if let Some(s) = session.upgrade() {
            with_session(&s, |s| {
                s.pointer_up();
            });
        }
    })
}

fn wire_wheel(target: &web::EventTarget, session: &SharedSession) -> anyhow::Result<Listener> {
    let session = Rc::downgrade(session);
    Listener::new(target, "wheel", move |ev| {
        let (Some(s), Some(wheel)) = (session.upgrade(), ev.dyn_ref::<web::WheelEvent>()) else {
            return;
        };
        ev.prevent_default();
        let unit = match wheel.delta_mode() {
            1 => WheelUnit::Line,
            2 => WheelUnit::Page,
            _ => WheelUnit::Pixel,
        };
        with_session(&s, |s| {
            s.wheel(wheel.delta_y() as f32, unit);
        });
    })
}
