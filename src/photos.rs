use crate::constants::{API_KEY_ATTR, PER_PAGE_ATTR};
use crate::dom::js_err;
use gallery_core::constants::PHOTOS_PER_PAGE;
use gallery_core::photo::{self, CuratedRequest};
use gallery_core::Item;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Build the curated-photo request. The build-time `PEXELS_API_KEY` wins over
/// the mount element's `data-api-key`.
pub fn request_for(mount: &web::Element) -> CuratedRequest {
    let api_key = option_env!("PEXELS_API_KEY")
        .map(str::to_owned)
        .or_else(|| mount.get_attribute(API_KEY_ATTR))
        .unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("[photos] no API key configured");
    }
    let per_page = mount
        .get_attribute(PER_PAGE_ATTR)
        .and_then(|v| v.parse().ok())
        .unwrap_or(PHOTOS_PER_PAGE);
    CuratedRequest::new(api_key, per_page)
}

pub async fn fetch_curated(request: &CuratedRequest) -> anyhow::Result<Vec<Item>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let init = web::RequestInit::new();
    init.set_method(request.method());
    init.set_mode(web::RequestMode::Cors);
    let req = web::Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
    for (name, value) in request.headers() {
        req.headers().set(name, value).map_err(js_err)?;
    }

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("photo request failed with status {}", resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("photo response body is not text"))?;
    Ok(photo::items_from_json(&body)?)
}

/// Single attempt; any failure degrades to an empty list.
pub async fn load_photos(request: &CuratedRequest) -> Vec<Item> {
    match fetch_curated(request).await {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[photos] load failed, showing an empty scene: {e:?}");
            Vec::new()
        }
    }
}
