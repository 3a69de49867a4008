#![cfg(target_arch = "wasm32")]
use gallery_core::{SessionConfig, ViewportSession};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod lightbox;
mod photos;
mod render;

pub(crate) type Session =
    ViewportSession<render::CssRenderer, frame::RafScheduler, lightbox::DomLightbox>;
pub(crate) type SharedSession = Rc<RefCell<Session>>;

/// Everything that has to be released on teardown.
struct Mounted {
    session: SharedSession,
    scheduler: frame::RafScheduler,
    _listeners: Vec<dom::Listener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = mount().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the view down: stop the frame loop, detach the viewer and remove
/// every listener registered by `start`.
#[wasm_bindgen]
pub fn stop() {
    let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) else {
        return;
    };
    mounted.session.borrow_mut().dispose();
    mounted.scheduler.release();
    log::info!("gallery-web stopped");
}

fn select_callback(session: Weak<RefCell<Session>>) -> render::SelectCallback {
    Rc::new(move |index: usize| {
        if let Some(s) = session.upgrade() {
            events::dispatch(&s, gallery_core::Command::OpenPanel(index));
        }
    })
}

async fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mount_el: web::HtmlElement = document
        .get_element_by_id(constants::MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::MOUNT_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let request = photos::request_for(&mount_el);

    let scheduler = frame::RafScheduler::new();
    let session: SharedSession = Rc::new_cyclic(|weak| {
        scheduler.install(weak.clone());
        let renderer =
            render::CssRenderer::new(document.clone(), mount_el.clone(), select_callback(weak.clone()));
        RefCell::new(ViewportSession::new(
            SessionConfig::default(),
            dom::viewport_size(),
            renderer,
            scheduler.clone(),
            lightbox::DomLightbox::new(document.clone()),
        ))
    });
    session.borrow_mut().init()?;

    let mut listeners = events::wire_formation_buttons(&document, &session);
    listeners.extend(events::wire_lightbox_close(&document, &session));
    listeners.push(events::wire_resize(&session)?);
    listeners.push(events::wire_keyboard(&session)?);
    listeners.extend(events::wire_navigation(&mount_el, &session)?);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            session: session.clone(),
            scheduler,
            _listeners: listeners,
        })
    });

    let items = photos::load_photos(&request).await;
    let mut s = session.borrow_mut();
    if s.is_running() {
        s.load_items(&items)?;
    }
    Ok(())
}
