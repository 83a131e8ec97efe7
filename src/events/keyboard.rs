use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wrapview_core::OrbitCamera;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    camera: &Rc<RefCell<OrbitCamera>>,
    canvas: &web::HtmlCanvasElement,
) {
    let key = ev.key();
    if let Some((d_yaw, d_pitch)) = input::orbit_step_for_key(&key) {
        camera.borrow_mut().orbit(d_yaw, d_pitch);
        ev.prevent_default();
        return;
    }
    if let Some(factor) = input::zoom_factor_for_key(&key) {
        camera.borrow_mut().zoom(factor);
        return;
    }
    match key.as_str() {
        "r" | "R" => {
            *camera.borrow_mut() = OrbitCamera::default();
            log::info!("[keys] camera reset");
        }
        "Enter" => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(doc) = crate::dom::window_document() {
                doc.exit_fullscreen();
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(camera: Rc<RefCell<OrbitCamera>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &camera, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
