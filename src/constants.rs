// DOM contract between the page and the WASM front-end.

// Mount point the 3D viewer is attached to; also carries the blur class.
pub const MOUNT_ID: &str = "gallery-canvas";
pub const BLUR_CLASS: &str = "blur";

// Lightbox overlay
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-image";
pub const LIGHTBOX_CLOSE_ID: &str = "lightbox-close";
pub const ACTIVE_CLASS: &str = "active";

// Panel markup
pub const VIEWER_CLASS: &str = "gallery-viewer";
pub const PANEL_CLASS: &str = "element";
pub const PANEL_IMAGE_CLASS: &str = "img";

// Optional overrides read from the mount element
pub const API_KEY_ATTR: &str = "data-api-key";
pub const PER_PAGE_ATTR: &str = "data-per-page";
