// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_for_the_captured_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(7, Vec2::new(10.0, 20.0));
    assert_eq!(drag.advance(7, Vec2::new(14.0, 17.0)), Some(Vec2::new(4.0, -3.0)));
    assert_eq!(drag.advance(7, Vec2::new(15.0, 17.0)), Some(Vec2::new(1.0, 0.0)));
    // a second finger does not steer the orbit
    assert_eq!(drag.advance(8, Vec2::new(100.0, 100.0)), None);

    assert!(!drag.end(8));
    assert!(drag.end(7));
    assert!(!drag.active);
    assert_eq!(drag.advance(7, Vec2::new(20.0, 20.0)), None);
}

#[test]
fn drag_right_turns_yaw_negative() {
    let (d_yaw, d_pitch) = drag_to_orbit(Vec2::new(10.0, 0.0));
    assert!(d_yaw < 0.0);
    assert_eq!(d_pitch, 0.0);
    let (_, d_pitch) = drag_to_orbit(Vec2::new(0.0, 10.0));
    assert!(d_pitch > 0.0);
}

#[test]
fn wheel_zoom_is_symmetric_and_safe() {
    assert_eq!(wheel_zoom_factor(0.0), 1.0);
    assert!(wheel_zoom_factor(100.0) > 1.0);
    assert!(wheel_zoom_factor(-100.0) < 1.0);
    let product = wheel_zoom_factor(120.0) * wheel_zoom_factor(-120.0);
    assert!((product - 1.0).abs() < 1e-5);
    assert_eq!(wheel_zoom_factor(f32::NAN), 1.0);
    assert_eq!(wheel_zoom_factor(f32::INFINITY), 1.0);
}

#[test]
fn arrow_keys_orbit_and_other_keys_do_not() {
    let (l, _) = orbit_step_for_key("ArrowLeft").unwrap();
    let (r, _) = orbit_step_for_key("ArrowRight").unwrap();
    assert_eq!(l, -r);
    let (_, up) = orbit_step_for_key("ArrowUp").unwrap();
    let (_, down) = orbit_step_for_key("ArrowDown").unwrap();
    assert!(up > 0.0 && down < 0.0);
    assert_eq!(orbit_step_for_key("a"), None);
    assert_eq!(orbit_step_for_key("Enter"), None);
}

#[test]
fn plus_and_minus_zoom_inverse_amounts() {
    let zin = zoom_factor_for_key("+").unwrap();
    let zout = zoom_factor_for_key("-").unwrap();
    assert!(zin < 1.0);
    assert!((zin * zout - 1.0).abs() < 1e-6);
    assert_eq!(zoom_factor_for_key("="), Some(zin));
    assert_eq!(zoom_factor_for_key("_"), Some(zout));
    assert_eq!(zoom_factor_for_key("0"), None);
}
