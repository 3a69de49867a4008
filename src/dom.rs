use gallery_core::ViewportSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Registered event listener; removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    match Listener::new(&el, "click", move |_| handler()) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[dom] click listener on #{element_id}: {e:?}");
            None
        }
    }
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().map_err(|e| js_err(e.into()))
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) -> anyhow::Result<()> {
    el.style().set_property(property, value).map_err(js_err)
}

pub fn viewport_size() -> ViewportSize {
    let Some(w) = web::window() else {
        return ViewportSize::new(1, 1);
    };
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as u32;
    ViewportSize::new(px(w.inner_width()), px(w.inner_height()))
}
