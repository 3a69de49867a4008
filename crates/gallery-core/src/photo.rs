//! Curated-photo response decoding and the request it comes from.
//!
//! The network call itself belongs to the frontend; this module only knows the
//! endpoint shape and how to turn a JSON body into ordered [`Item`]s.

use crate::constants::{CURATED_ENDPOINT, PHOTOS_PER_PAGE};
use crate::error::PhotoError;
use serde::Deserialize;

/// One source photo, immutable once fetched. `index` is its position in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub image_url: String,
    pub full_url: Option<String>,
    pub alt: Option<String>,
    pub photographer: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CuratedPage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub photos: Vec<PhotoRecord>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotoRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub photographer: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub src: PhotoSources,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotoSources {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub large2x: Option<String>,
    #[serde(default)]
    pub landscape: Option<String>,
}

/// GET request description for one page of curated photos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuratedRequest {
    pub url: String,
    pub api_key: String,
}

impl CuratedRequest {
    pub fn new(api_key: impl Into<String>, per_page: u32) -> Self {
        Self {
            url: format!("{CURATED_ENDPOINT}?per_page={per_page}"),
            api_key: api_key.into(),
        }
    }

    pub fn method(&self) -> &'static str {
        "GET"
    }

    /// Header pairs to send with the request.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [("Accept", "application/json"), ("Authorization", &self.api_key)]
    }
}

impl Default for CuratedRequest {
    fn default() -> Self {
        Self::new("", PHOTOS_PER_PAGE)
    }
}

/// Decode a curated-page body into ordered items.
///
/// Records lacking a landscape URL are skipped; indices stay dense.
pub fn items_from_json(body: &str) -> Result<Vec<Item>, PhotoError> {
    let page: CuratedPage = serde_json::from_str(body)?;
    Ok(items_from_page(page))
}

pub fn items_from_page(page: CuratedPage) -> Vec<Item> {
    let mut items = Vec::with_capacity(page.photos.len());
    for record in page.photos {
        let PhotoRecord {
            id,
            photographer,
            alt,
            src,
        } = record;
        let Some(image_url) = src.landscape.filter(|u| !u.is_empty()) else {
            log::warn!("[photos] skipping record {:?}: no landscape url", id);
            continue;
        };
        items.push(Item {
            index: items.len(),
            image_url,
            full_url: src.large2x.or(src.original),
            alt: alt.filter(|a| !a.is_empty()),
            photographer,
        });
    }
    items
}
