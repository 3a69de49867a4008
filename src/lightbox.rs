use crate::constants::{ACTIVE_CLASS, BLUR_CLASS, LIGHTBOX_ID, LIGHTBOX_IMAGE_ID, MOUNT_ID};
use gallery_core::{LightboxPresenter, LightboxState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lightbox overlay driven by class toggles on existing page markup.
pub struct DomLightbox {
    document: web::Document,
}

impl DomLightbox {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn set_class(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            _ = el.class_list().toggle_with_force(class, on);
        }
    }
}

impl LightboxPresenter for DomLightbox {
    fn present(&mut self, state: &LightboxState) {
        if let Some(photo) = &state.photo {
            if let Some(img) = self
                .document
                .get_element_by_id(LIGHTBOX_IMAGE_ID)
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            {
                if img.src() != *photo {
                    img.set_src(photo);
                }
            }
        }
        self.set_class(LIGHTBOX_ID, ACTIVE_CLASS, state.open);
        self.set_class(MOUNT_ID, BLUR_CLASS, state.blur);
    }
}
