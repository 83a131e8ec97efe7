#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wrapview_core::{ConfigurationStore, OrbitCamera, Scene};

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wrapview starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let store = Rc::new(RefCell::new(ConfigurationStore::default()));
    let notice = Rc::new(RefCell::new(overlay::NoticeState::default()));
    overlay::hide(&document);
    ui::wire_controls(&document, &store, &notice);

    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    events::wire_global_keydown(camera.clone(), canvas.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        drag_state,
    });

    // Controls stay usable without a GPU; only the viewport goes blank
    let gpu = frame::init_gpu(&canvas).await;
    let scene = Scene::for_model(store.borrow().config().model);
    log::info!("[scene] {} parts for {}", scene.len(), scene.model().display_name());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        camera,
        canvas,
        scene,
        gpu,
        uploaded_revision: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
