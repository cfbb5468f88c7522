#![cfg(target_arch = "wasm32")]
use hero_core::{Variant, ViewportGate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// A mounted hero scene. Owns its frame loop and DOM listeners; `unmount`
/// (or freeing the object) tears all of them down.
#[wasm_bindgen]
pub struct HeroScene {
    ctx: Rc<RefCell<frame::FrameContext>>,
    listeners: Vec<events::Listener>,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl HeroScene {
    /// `variant` is `"cube"` or `"dollar"`. `on_frame` receives a
    /// `Float32Array` of node records after every update.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str, seed: u32, on_frame: js_sys::Function) -> Result<HeroScene, JsValue> {
        mount(variant, seed as u64, on_frame).map_err(to_js)
    }

    pub fn unmount(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        self.ctx.borrow_mut().unmount();
        log::info!("[hero] unmounted");
    }

    /// False while the viewport is below the gate or after `unmount`.
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.frame_loop.is_some() && self.ctx.borrow().composer().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.ctx
            .borrow()
            .composer()
            .map_or(0.0, |c| c.state().progress)
    }

    #[wasm_bindgen(js_name = nodeNames)]
    pub fn node_names(&self) -> js_sys::Array {
        let names = js_sys::Array::new();
        if let Some(c) = self.ctx.borrow().composer() {
            for node in c.graph().nodes() {
                names.push(&JsValue::from_str(&node.name));
            }
        }
        names
    }

    #[wasm_bindgen(js_name = nodeParents)]
    pub fn node_parents(&self) -> js_sys::Int32Array {
        let ctx = self.ctx.borrow();
        let parents = ctx
            .composer()
            .map(|c| input::parent_indices(c.graph()))
            .unwrap_or_default();
        js_sys::Int32Array::from(parents.as_slice())
    }

    #[wasm_bindgen(js_name = materialKinds)]
    pub fn material_kinds(&self) -> js_sys::Int32Array {
        let ctx = self.ctx.borrow();
        let kinds = ctx
            .composer()
            .map(|c| input::material_codes(c.graph()))
            .unwrap_or_default();
        js_sys::Int32Array::from(kinds.as_slice())
    }

    #[wasm_bindgen(js_name = primitiveKinds)]
    pub fn primitive_kinds(&self) -> js_sys::Int32Array {
        let ctx = self.ctx.borrow();
        let kinds = ctx
            .composer()
            .map(|c| input::primitive_codes(c.graph()))
            .unwrap_or_default();
        js_sys::Int32Array::from(kinds.as_slice())
    }

    /// Flat xyz positions of the rounded-box shell; empty for sphere shells.
    #[wasm_bindgen(js_name = meshPositions)]
    pub fn mesh_positions(&self) -> js_sys::Float32Array {
        let ctx = self.ctx.borrow();
        match ctx.composer().and_then(|c| c.shell_mesh()) {
            Some(mesh) => js_sys::Float32Array::from(mesh.position_floats()),
            None => js_sys::Float32Array::new_with_length(0),
        }
    }

    #[wasm_bindgen(js_name = meshNormals)]
    pub fn mesh_normals(&self) -> js_sys::Float32Array {
        let ctx = self.ctx.borrow();
        match ctx.composer().and_then(|c| c.shell_mesh()) {
            Some(mesh) => js_sys::Float32Array::from(mesh.normal_floats()),
            None => js_sys::Float32Array::new_with_length(0),
        }
    }

    #[wasm_bindgen(js_name = meshIndices)]
    pub fn mesh_indices(&self) -> js_sys::Uint32Array {
        let ctx = self.ctx.borrow();
        match ctx.composer().and_then(|c| c.shell_mesh()) {
            Some(mesh) => js_sys::Uint32Array::from(mesh.indices.as_slice()),
            None => js_sys::Uint32Array::new_with_length(0),
        }
    }

    #[wasm_bindgen(js_name = recordStride)]
    pub fn record_stride() -> usize {
        constants::RECORD_STRIDE
    }

    #[wasm_bindgen(js_name = minViewportWidth)]
    pub fn min_viewport_width() -> f64 {
        ViewportGate::default().min_width_px
    }
}

fn mount(variant: &str, seed: u64, on_frame: js_sys::Function) -> anyhow::Result<HeroScene> {
    let variant: Variant = variant.parse()?;
    let window = dom::window()?;
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(variant, seed, on_frame)));

    let (w, h) = dom::viewport_size(&window);
    ctx.borrow_mut().fit(w, h)?;
    if ctx.borrow().composer().is_none() {
        log::info!("[hero] viewport {w}px below gate, waiting for resize");
    }

    let listeners = vec![
        events::wire_pointermove(&window, ctx.clone())?,
        events::wire_resize(&window, ctx.clone())?,
    ];
    let frame_loop = Some(frame::start_loop(ctx.clone()));
    Ok(HeroScene {
        ctx,
        listeners,
        frame_loop,
    })
}
