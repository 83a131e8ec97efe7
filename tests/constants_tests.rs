// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use wrapview_core::{Scene, VehicleModel};

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_matches_showroom_setup() {
    assert_eq!(AMBIENT_INTENSITY, 0.6);
    assert_eq!(SUN_INTENSITY, 1.2);
    assert_eq!(SUN_DIRECTION, [10.0, 10.0, 5.0]);
    assert!(AMBIENT_TINT.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_tuning_is_positive() {
    assert!(ORBIT_RADIANS_PER_PX > 0.0);
    assert!(ORBIT_KEY_STEP > 0.0);
    assert!(ZOOM_PER_WHEEL_PX > 0.0);
    assert!(ZOOM_KEY_FACTOR > 0.0 && ZOOM_KEY_FACTOR < 1.0);
}

#[test]
fn instance_buffer_fits_every_model() {
    for model in VehicleModel::ALL {
        let scene = Scene::for_model(model);
        assert!(scene.len() <= MAX_PARTS, "{model:?} has {} parts", scene.len());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_limits_are_consistent() {
    use wrapview_core::*;
    assert_eq!(APPLY_NOTICE_MS, 1200);
    assert!(ORBIT_DISTANCE_MIN > CAMERA_ZNEAR);
    assert!(ORBIT_DISTANCE_MAX < CAMERA_ZFAR);
    assert!(ORBIT_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    let start = camera_start_eye().length();
    assert!((ORBIT_DISTANCE_MIN..=ORBIT_DISTANCE_MAX).contains(&start));
    assert_eq!(CARBON_METALNESS, 1.0);
    assert_eq!(CARBON_ROUGHNESS, 0.4);
    assert_eq!(SECONDARY_NAME_MARKERS, ["roof", "mirror"]);
}
