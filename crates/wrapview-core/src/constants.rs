use glam::Vec3;
use std::time::Duration;

// Catalog and tuning values shared by the core and the web frontend.

// Paint
pub const DEFAULT_PRIMARY_RGB: [u8; 3] = [0xd6, 0x28, 0x28]; // #d62828
pub const SECONDARY_RGB: [u8; 3] = [0x00, 0x00, 0x00]; // two-tone roof/mirrors
pub const COLOR_SWATCHES: [&str; 5] = ["#d62828", "#000000", "#ffffff", "#0055ff", "#22c55e"];

// Decal HSL shifts as (hue, saturation, lightness)
pub const STRIPE_HSL_SHIFT: [f32; 3] = [0.1, 0.0, 0.1];
pub const SIDE_HSL_SHIFT: [f32; 3] = [-0.1, 0.1, 0.1];

// Carbon overrides whatever the finish picked
pub const CARBON_METALNESS: f32 = 1.0;
pub const CARBON_ROUGHNESS: f32 = 0.4;

// Asset naming contract (matched case-insensitively as substrings)
pub const SECONDARY_NAME_MARKERS: [&str; 2] = ["roof", "mirror"];
pub const HOOD_NAME_MARKER: &str = "hood";
pub const DOOR_NAME_MARKER: &str = "door";

// Apply notification
pub const APPLY_NOTICE_MS: u64 = 1200;

// Camera
pub const CAMERA_START_EYE: [f32; 3] = [2.0, 1.2, 3.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_DISTANCE_MIN: f32 = 1.5;
pub const ORBIT_DISTANCE_MAX: f32 = 12.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.45; // radians, just short of the poles

// Model placement in the world
pub const MODEL_SCALE: f32 = 1.2;
pub const MODEL_OFFSET_Y: f32 = -0.8;
pub const MODEL_YAW: f32 = std::f32::consts::FRAC_PI_6;

#[inline]
pub fn apply_notice_duration() -> Duration {
    Duration::from_millis(APPLY_NOTICE_MS)
}

#[inline]
pub fn camera_start_eye() -> Vec3 {
    Vec3::from(CAMERA_START_EYE)
}
