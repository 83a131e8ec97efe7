use crate::input;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wrapview_core::{ConfigurationStore, OrbitCamera, Scene};

pub struct FrameContext<'a> {
    pub store: Rc<RefCell<ConfigurationStore>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Scene,
    pub gpu: Option<render::GpuState<'a>>,
    /// Store revision the GPU instances were last built from.
    pub uploaded_revision: Option<u64>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        self.sync_appearance();

        let Some(g) = self.gpu.as_mut() else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = self.camera.borrow().camera(input::canvas_aspect(&self.canvas));
        match g.render(&camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Timeout) => log::debug!("[frame] surface timeout"),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Re-resolve every part when the configuration moved since the last upload.
    fn sync_appearance(&mut self) {
        let store = self.store.borrow();
        let revision = store.revision();
        if self.uploaded_revision == Some(revision) {
            return;
        }
        let config = store.config();
        if config.model != self.scene.model() {
            log::info!("[scene] switching to {}", config.model.display_name());
            self.scene = Scene::for_model(config.model);
        }
        let resolved = self.scene.resolve_all_traced(config);
        for (part, (_, trace)) in self.scene.parts().iter().zip(&resolved) {
            log::debug!("[resolve] {} <- {}", part.mesh.name, trace.join(","));
        }
        let appearances: Vec<_> = resolved.into_iter().map(|(look, _)| look).collect();
        if let Some(g) = self.gpu.as_mut() {
            g.upload_instances(&self.scene, &appearances);
        }
        self.uploaded_revision = Some(revision);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
