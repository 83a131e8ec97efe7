// Rendering and interaction tuning constants for the web frontend.

// Lighting: ambient fill plus one directional light
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const AMBIENT_TINT: [f32; 3] = [0.55, 0.58, 0.65]; // cool "city" fill
pub const SUN_DIRECTION: [f32; 3] = [10.0, 10.0, 5.0]; // towards the light
pub const SUN_INTENSITY: f32 = 1.2;

// Background clear color (linear)
pub const CLEAR_RGB: [f64; 3] = [0.03, 0.035, 0.045];

// Orbit controls
pub const ORBIT_RADIANS_PER_PX: f32 = 0.008; // pointer drag sensitivity
pub const ORBIT_KEY_STEP: f32 = 0.08; // radians per arrow key press
pub const ZOOM_PER_WHEEL_PX: f32 = 0.0015; // exponential zoom per wheel delta pixel
pub const ZOOM_KEY_FACTOR: f32 = 0.9; // per +/- key press

// GPU buffers
pub const MAX_PARTS: usize = 32; // instance buffer capacity
