#![cfg(target_arch = "wasm32")]
use instant::Instant;
use showroom_core::{showroom_scene, PointerEvent, Showroom, ShowroomConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod panel;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showroom-web starting");
    Ok(())
}

/// Handle the page keeps to feed pointer events in and register renderer callbacks.
#[wasm_bindgen]
pub struct ShowroomApp {
    showroom: Rc<RefCell<Showroom>>,
    callbacks: Rc<RefCell<frame::RendererCallbacks>>,
}

#[wasm_bindgen]
impl ShowroomApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ShowroomApp, JsValue> {
        init().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    #[wasm_bindgen(js_name = pointerOver)]
    pub fn pointer_over(&self, name: &str) {
        let mut showroom = self.showroom.borrow_mut();
        if let Some(surface) = bridge::resolve_surface(showroom.scene(), name) {
            showroom.handle(PointerEvent::Over { surface });
        }
    }

    #[wasm_bindgen(js_name = pointerOut)]
    pub fn pointer_out(&self, remaining: u32) {
        self.showroom
            .borrow_mut()
            .handle(PointerEvent::Out { remaining: remaining as usize });
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, name: Option<String>, x: f32, y: f32, z: f32) {
        let mut showroom = self.showroom.borrow_mut();
        let hit = bridge::resolve_hit(showroom.scene(), name.as_deref(), [x, y, z]);
        showroom.handle(PointerEvent::Move { hit });
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&self, time_ms: f64) {
        self.showroom
            .borrow_mut()
            .handle(PointerEvent::Down { time_ms });
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self, time_ms: f64, name: Option<String>, x: f32, y: f32, z: f32) {
        let mut showroom = self.showroom.borrow_mut();
        let hit = bridge::resolve_hit(showroom.scene(), name.as_deref(), [x, y, z]);
        showroom.handle(PointerEvent::Up { time_ms, hit });
    }

    /// Orbit controls moved the camera; ignored while a transition runs.
    #[wasm_bindgen(js_name = orbitMoved)]
    pub fn orbit_moved(&self, pose: &[f32]) {
        if let Some(pose) = bridge::pose_from_slice(pose) {
            self.showroom.borrow_mut().sync_camera(pose);
        }
    }

    #[wasm_bindgen(js_name = selectOption)]
    pub fn select_option(&self, id: &str) -> Result<(), JsValue> {
        self.showroom
            .borrow_mut()
            .select_option(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn camera(&self) -> Vec<f32> {
        self.showroom.borrow().camera().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = totalCost)]
    pub fn total_cost(&self) -> f64 {
        self.showroom.borrow().state().total_cost()
    }

    #[wasm_bindgen(js_name = onCamera)]
    pub fn on_camera(&self, f: js_sys::Function) {
        self.callbacks.borrow_mut().camera = Some(f);
    }

    #[wasm_bindgen(js_name = onMarker)]
    pub fn on_marker(&self, f: js_sys::Function) {
        self.callbacks.borrow_mut().marker = Some(f);
    }

    #[wasm_bindgen(js_name = onMaterial)]
    pub fn on_material(&self, f: js_sys::Function) {
        self.callbacks.borrow_mut().material = Some(f);
    }
}

fn init() -> anyhow::Result<ShowroomApp> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene = showroom_scene()?;
    log::info!(
        "[init] scene surfaces={} materials={}",
        scene.len(),
        scene.materials().len()
    );

    let showroom = Rc::new(RefCell::new(Showroom::new(scene, ShowroomConfig::default())));
    let callbacks = Rc::new(RefCell::new(frame::RendererCallbacks::default()));

    {
        let s = showroom.borrow();
        overlay::update_total(&document, s.state().total_cost());
        overlay::update_selection(&document, s.state().selection());
    }
    events::picker::wire_option_cards(&document, &showroom);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        showroom: showroom.clone(),
        callbacks: callbacks.clone(),
        document,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(ShowroomApp {
        showroom,
        callbacks,
    })
}
