use crate::constants::MAX_FRAME_DT_SEC;
use crate::input::{self, NodeRecord};
use hero_core::{
    AnimationClock, Camera, PointerState, ScaleConfig, SceneComposer, SceneConfig, Variant,
    ViewportGate,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct FrameContext {
    pub variant: Variant,
    pub seed: u64,
    pub gate: ViewportGate,
    pub pointer: PointerState,
    pub on_frame: js_sys::Function,

    composer: Option<SceneComposer>,
    clock: AnimationClock,
    last_elapsed: f64,
    records: Vec<NodeRecord>,
}

impl FrameContext {
    pub fn new(variant: Variant, seed: u64, on_frame: js_sys::Function) -> Self {
        Self {
            variant,
            seed,
            gate: ViewportGate::default(),
            pointer: PointerState::default(),
            on_frame,
            composer: None,
            clock: AnimationClock::start(),
            last_elapsed: 0.0,
            records: Vec::new(),
        }
    }

    pub fn composer(&self) -> Option<&SceneComposer> {
        self.composer.as_ref()
    }

    /// Mount the scene if the viewport passes the gate, drop it if not. A
    /// fresh mount restarts the clock, so the entrance plays again; a mounted
    /// scene only picks up the proportions for the new size.
    pub fn fit(&mut self, width: f64, height: f64) -> hero_core::Result<()> {
        if !self.gate.allows(width) {
            if self.composer.take().is_some() {
                log::info!("[frame] viewport {width}px below gate, scene dropped");
            }
            return Ok(());
        }
        let camera = Camera::hero(input::aspect_ratio(width, height));
        if let Some(composer) = self.composer.as_mut() {
            return composer.set_scale(ScaleConfig::for_viewport(self.variant, &camera));
        }
        let config = SceneConfig::for_variant(self.variant, self.seed).fit_viewport(&camera);
        self.composer = Some(SceneComposer::init(config, 0.0)?);
        self.clock = AnimationClock::start();
        self.last_elapsed = 0.0;
        log::info!(
            "[frame] {:?} scene mounted at {width}x{height}px (seed {})",
            self.variant,
            self.seed
        );
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.composer = None;
        self.records.clear();
    }

    /// Advance the scene one display frame and pack the node records. `None`
    /// while gated off.
    pub fn frame(&mut self) -> Option<js_sys::Float32Array> {
        let composer = self.composer.as_mut()?;
        let elapsed = self.clock.now();
        let dt = (elapsed - self.last_elapsed).clamp(0.0, MAX_FRAME_DT_SEC);
        self.last_elapsed = elapsed;

        composer.update(Duration::from_secs_f64(dt), elapsed, self.pointer);
        input::pack_records(composer.graph(), &mut self.records);
        let floats: &[f32] = bytemuck::cast_slice(&self.records);
        Some(js_sys::Float32Array::from(floats))
    }
}

/// Handle to a running requestAnimationFrame loop. Dropping it cancels the
/// pending frame and releases the tick closure.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request_id: &Cell<Option<i32>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        request_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let request_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let request_id_tick = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_id_tick.set(None);
        // Release the context before calling out, so the callback may unmount.
        let out = {
            let mut ctx = frame_ctx.borrow_mut();
            ctx.frame().map(|records| (ctx.on_frame.clone(), records))
        };
        if let Some((on_frame, records)) = out {
            if let Err(e) = on_frame.call1(&JsValue::NULL, &records) {
                log::error!("[frame] onFrame threw: {:?}", e);
            }
        }
        request_frame(&tick_clone, &request_id_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &request_id);
    FrameLoop { tick, request_id }
}
