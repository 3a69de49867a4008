use std::time::Duration;

// Shared layout/animation tuning constants used by the web frontend.

// Table formation
pub const TABLE_COLUMNS: usize = 10;
pub const TABLE_SPACING: f32 = 400.0;
pub const TABLE_ORIGIN_X: f32 = -1900.0; // x of column 0
pub const TABLE_ORIGIN_Y: f32 = 800.0; // y of row 0

// Sphere formation
pub const SPHERE_RADIUS: f32 = 800.0;

// Helix formation
pub const HELIX_RADIUS: f32 = 900.0;
pub const HELIX_ANGLE_STEP: f32 = 0.35; // radians per item
pub const HELIX_RISE_PER_ITEM: f32 = 15.0; // y drop per item
pub const HELIX_TOP_Y: f32 = 450.0;

// Grid (3D block) formation
pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROWS: usize = 5;
pub const GRID_SPACING: f32 = 400.0;
pub const GRID_ORIGIN_X: f32 = -800.0;
pub const GRID_ORIGIN_Y: f32 = 800.0;
pub const GRID_LAYER_SPACING: f32 = 1000.0;
pub const GRID_ORIGIN_Z: f32 = -2000.0;

// Initial scatter: each axis uniform in [-SCATTER_EXTENT, SCATTER_EXTENT)
pub const SCATTER_EXTENT: f32 = 2000.0;

// Transitions
pub const TRANSITION_BASE: Duration = Duration::from_millis(2000);

// Camera
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_Z: f32 = 3000.0;

// Navigation bounds (distance from target)
pub const MIN_DISTANCE: f32 = 500.0;
pub const MAX_DISTANCE: f32 = 6000.0;

// Trackball tuning
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_SPEED: f32 = 1.2;
pub const PAN_SPEED: f32 = 0.3;
pub const DYNAMIC_DAMPING_FACTOR: f32 = 0.2;
pub const WHEEL_ZOOM_PIXEL: f32 = 0.000_25; // per deltaY in pixel mode
pub const WHEEL_ZOOM_LINE: f32 = 0.01;
pub const WHEEL_ZOOM_PAGE: f32 = 0.025;

// Photo source
pub const CURATED_ENDPOINT: &str = "https://api.pexels.com/v1/curated";
pub const PHOTOS_PER_PAGE: u32 = 50;
