use crate::bridge;
use crate::constants::MAX_FRAME_DT_MS;
use crate::dom;
use crate::overlay;
use instant::Instant;
use showroom_core::{Pose, Showroom, StateChange};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// JS functions the renderer registers to receive scene updates.
#[derive(Clone, Default)]
pub struct RendererCallbacks {
    pub camera: Option<js_sys::Function>,
    pub marker: Option<js_sys::Function>,
    pub material: Option<js_sys::Function>,
}

impl RendererCallbacks {
    pub fn emit_camera(&self, pose: &Pose) {
        if let Some(f) = &self.camera {
            let values = js_sys::Float32Array::from(&pose.to_array()[..]);
            if let Err(e) = f.call1(&JsValue::NULL, &values) {
                log::warn!("[frame] camera callback failed: {:?}", e);
            }
        }
    }

    fn emit_marker(&self, payload: [f32; 4]) {
        if let Some(f) = &self.marker {
            let values = js_sys::Float32Array::from(&payload[..]);
            if let Err(e) = f.call1(&JsValue::NULL, &values) {
                log::warn!("[frame] marker callback failed: {:?}", e);
            }
        }
    }

    fn emit_material(&self, surface: &str, material: &str) {
        if let Some(f) = &self.material {
            let result = f.call2(
                &JsValue::NULL,
                &JsValue::from_str(surface),
                &JsValue::from_str(material),
            );
            if let Err(e) = result {
                log::warn!("[frame] material callback failed: {:?}", e);
            }
        }
    }
}

pub struct FrameContext {
    pub showroom: Rc<RefCell<Showroom>>,
    pub callbacks: Rc<RefCell<RendererCallbacks>>,
    pub document: web::Document,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let (camera, changes) = {
            let mut showroom = self.showroom.borrow_mut();
            let camera = showroom.tick(dt);
            (camera, showroom.take_changes())
        };
        // no RefCell borrow is held while JS callbacks run
        let callbacks = self.callbacks.borrow().clone();
        if let Some(pose) = camera {
            callbacks.emit_camera(&pose);
        }
        for change in changes {
            self.apply(&callbacks, change);
        }
    }

    fn apply(&self, callbacks: &RendererCallbacks, change: StateChange) {
        match change {
            StateChange::TotalCost(total) => overlay::update_total(&self.document, total),
            StateChange::LastInteraction(label) => {
                overlay::update_last_interaction(&self.document, label.as_deref())
            }
            StateChange::Selection(selection) => {
                overlay::update_selection(&self.document, &selection)
            }
            StateChange::Cursor(style) => dom::set_body_cursor(&self.document, style.as_css()),
            StateChange::Marker { position, visible } => {
                callbacks.emit_marker(bridge::marker_payload(position, visible))
            }
            StateChange::MaterialAssigned {
                surface, material, ..
            } => {
                let name = bridge::surface_name(self.showroom.borrow().scene(), surface);
                if let Some(name) = name {
                    callbacks.emit_material(&name, material.as_str());
                }
            }
            StateChange::FloorHeight(h) => log::debug!("[frame] floor height {:.1}", h),
            StateChange::SelectedWalls(walls) => {
                log::debug!("[frame] {} walls covered", walls.len())
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
