// Host-side checks on the layout and navigation constants.

use gallery_core::constants::*;
use gallery_core::formation;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn navigation_bounds_contain_the_starting_camera() {
    assert!(MIN_DISTANCE > 0.0);
    assert!(MIN_DISTANCE < CAMERA_Z && CAMERA_Z < MAX_DISTANCE);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_and_speeds_are_sane() {
    assert!(DYNAMIC_DAMPING_FACTOR > 0.0 && DYNAMIC_DAMPING_FACTOR < 1.0);
    assert!(ROTATE_SPEED > 0.0 && ZOOM_SPEED > 0.0 && PAN_SPEED > 0.0);
    assert!(WHEEL_ZOOM_PIXEL < WHEEL_ZOOM_LINE && WHEEL_ZOOM_LINE < WHEEL_ZOOM_PAGE);
}

#[test]
fn table_columns_are_evenly_spaced() {
    let f = formation::generate(TABLE_COLUMNS);
    for pair in f.table.targets.windows(2) {
        let dx = pair[1].position.x - pair[0].position.x;
        assert!((dx - TABLE_SPACING).abs() < 1e-3);
    }
}

#[test]
fn default_transition_is_two_seconds() {
    assert_eq!(TRANSITION_BASE, Duration::from_millis(2000));
    assert_eq!(PHOTOS_PER_PAGE, 50);
}
