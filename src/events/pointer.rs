use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wrapview_core::OrbitCamera;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state
            .borrow_mut()
            .begin(ev.pointer_id(), input::pointer_css(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w
            .drag_state
            .borrow_mut()
            .advance(ev.pointer_id(), input::pointer_css(&ev));
        if let Some(delta) = delta {
            let (d_yaw, d_pitch) = input::drag_to_orbit(delta);
            w.camera.borrow_mut().orbit(d_yaw, d_pitch);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag_state.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            let cam = w.camera.borrow();
            log::debug!(
                "[orbit] yaw={:.2} pitch={:.2} dist={:.2}",
                cam.yaw,
                cam.pitch,
                cam.distance
            );
        }
    }) as Box<dyn FnMut(_)>);
    for kind in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(ev.delta_y() as f32);
        w.camera.borrow_mut().zoom(factor);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
