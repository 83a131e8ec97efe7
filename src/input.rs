use crate::constants::{ORBIT_KEY_STEP, ORBIT_RADIANS_PER_PX, ZOOM_KEY_FACTOR, ZOOM_PER_WHEEL_PX};
use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Advance to `at` and return the pixel delta since the last sample.
    /// Events from other pointers are ignored.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

/// Convert a drag delta (CSS px) into (yaw, pitch) radians. Dragging right
/// spins the view left around the car, dragging down raises the eye.
#[inline]
pub fn drag_to_orbit(delta: Vec2) -> (f32, f32) {
    (
        -delta.x * ORBIT_RADIANS_PER_PX,
        delta.y * ORBIT_RADIANS_PER_PX,
    )
}

/// Distance multiplier for a wheel event; positive delta zooms out.
#[inline]
pub fn wheel_zoom_factor(delta_y: f32) -> f32 {
    if !delta_y.is_finite() {
        return 1.0;
    }
    (delta_y * ZOOM_PER_WHEEL_PX).exp()
}

#[inline]
pub fn orbit_step_for_key(key: &str) -> Option<(f32, f32)> {
    match key {
        "ArrowLeft" => Some((ORBIT_KEY_STEP, 0.0)),
        "ArrowRight" => Some((-ORBIT_KEY_STEP, 0.0)),
        "ArrowUp" => Some((0.0, ORBIT_KEY_STEP)),
        "ArrowDown" => Some((0.0, -ORBIT_KEY_STEP)),
        _ => None,
    }
}

#[inline]
pub fn zoom_factor_for_key(key: &str) -> Option<f32> {
    match key {
        "+" | "=" => Some(ZOOM_KEY_FACTOR),
        "-" | "_" => Some(1.0 / ZOOM_KEY_FACTOR),
        _ => None,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
