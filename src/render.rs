//! DOM renderer: panels are absolutely positioned elements placed with CSS
//! `matrix3d` transforms under a shared camera element.

use crate::constants::{PANEL_CLASS, PANEL_IMAGE_CLASS, VIEWER_CLASS};
use crate::dom::{self, Listener};
use gallery_core::{css3d, Camera, PanelObject, SceneRenderer, ViewportSize};
use std::rc::Rc;
use web_sys as web;

pub type SelectCallback = Rc<dyn Fn(usize)>;

struct PanelElement {
    root: web::HtmlElement,
    _click: Listener,
}

struct Surface {
    viewer: web::HtmlElement,
    camera: web::HtmlElement,
}

pub struct CssRenderer {
    document: web::Document,
    mount: web::HtmlElement,
    surface: Option<Surface>,
    panels: Vec<PanelElement>,
    on_select: SelectCallback,
    size: ViewportSize,
    perspective_px: Option<f32>,
}

impl CssRenderer {
    pub fn new(document: web::Document, mount: web::HtmlElement, on_select: SelectCallback) -> Self {
        Self {
            document,
            mount,
            surface: None,
            panels: Vec::new(),
            on_select,
            size: ViewportSize::new(1, 1),
            perspective_px: None,
        }
    }

    fn build_panel(&self, camera: &web::HtmlElement, panel: &PanelObject) -> anyhow::Result<PanelElement> {
        let root = dom::create_element(&self.document, "div", PANEL_CLASS)?;
        dom::set_style(&root, "position", "absolute")?;
        dom::set_style(&root, "pointer-events", "auto")?;

        let image = dom::create_element(&self.document, "img", PANEL_IMAGE_CLASS)?;
        let item = panel.item();
        image.set_attribute("src", &item.image_url).map_err(dom::js_err)?;
        image
            .set_attribute("alt", item.alt.as_deref().unwrap_or(""))
            .map_err(dom::js_err)?;

        let index = panel.index();
        let on_select = self.on_select.clone();
        let click = Listener::new(&image, "click", move |_| on_select(index))?;

        root.append_child(&image).map_err(dom::js_err)?;
        camera.append_child(&root).map_err(dom::js_err)?;
        Ok(PanelElement {
            root,
            _click: click,
        })
    }

    fn clear_panels(&mut self) {
        for panel in self.panels.drain(..) {
            panel.root.remove();
        }
    }
}

fn apply_size(surface: &Surface, size: ViewportSize) -> anyhow::Result<()> {
    let w = format!("{}px", size.width);
    let h = format!("{}px", size.height);
    for el in [&surface.viewer, &surface.camera] {
        dom::set_style(el, "width", &w)?;
        dom::set_style(el, "height", &h)?;
    }
    Ok(())
}

impl SceneRenderer for CssRenderer {
    fn attach(&mut self, size: ViewportSize) -> anyhow::Result<()> {
        if self.surface.is_some() {
            return Ok(());
        }
        let viewer = dom::create_element(&self.document, "div", VIEWER_CLASS)?;
        dom::set_style(&viewer, "overflow", "hidden")?;
        let camera = dom::create_element(&self.document, "div", "")?;
        dom::set_style(&camera, "transform-style", "preserve-3d")?;
        dom::set_style(&camera, "pointer-events", "none")?;
        viewer.append_child(&camera).map_err(dom::js_err)?;
        self.mount.append_child(&viewer).map_err(dom::js_err)?;

        let surface = Surface { viewer, camera };
        apply_size(&surface, size)?;
        self.surface = Some(surface);
        self.size = size;
        self.perspective_px = None;
        Ok(())
    }

    fn rebuild(&mut self, panels: &[PanelObject]) -> anyhow::Result<()> {
        self.clear_panels();
        let Some(camera) = self.surface.as_ref().map(|s| s.camera.clone()) else {
            anyhow::bail!("renderer is not attached");
        };
        let mut built = Vec::with_capacity(panels.len());
        for panel in panels {
            built.push(self.build_panel(&camera, panel)?);
        }
        self.panels = built;
        Ok(())
    }

    fn resize(&mut self, size: ViewportSize) {
        self.size = size;
        if let Some(surface) = &self.surface {
            if let Err(e) = apply_size(surface, size) {
                log::warn!("[render] resize: {e:?}");
            }
        }
    }

    fn render(&mut self, camera: &Camera, panels: &[PanelObject]) -> anyhow::Result<()> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        let projection =
            css3d::camera_projection(camera, self.size.width as f32, self.size.height as f32);
        if self.perspective_px != Some(projection.perspective_px) {
            dom::set_style(
                &surface.viewer,
                "perspective",
                &format!("{}px", projection.perspective_px),
            )?;
            self.perspective_px = Some(projection.perspective_px);
        }
        dom::set_style(&surface.camera, "transform", &projection.camera_transform)?;

        for (panel, element) in panels.iter().zip(&self.panels) {
            let transform = css3d::object_transform(panel.world_matrix());
            dom::set_style(&element.root, "transform", &transform)?;
        }
        Ok(())
    }

    fn detach(&mut self) {
        self.clear_panels();
        if let Some(surface) = self.surface.take() {
            surface.viewer.remove();
        }
    }
}
