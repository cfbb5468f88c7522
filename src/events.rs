use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener and frees the
/// closure.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] removed {} listener", self.event);
    }
}

/// Last pointer position wins; the frame loop reads it once per frame.
pub fn wire_pointermove(
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let wnd = window.clone();
    Listener::new(window.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (w, h) = dom::viewport_size(&wnd);
        let pointer = input::normalize_pointer(ev.client_x() as f64, ev.client_y() as f64, w, h);
        ctx.borrow_mut().pointer = pointer;
    })
}

/// Re-run the viewport gate whenever the window changes size.
pub fn wire_resize(
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let wnd = window.clone();
    Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        let (w, h) = dom::viewport_size(&wnd);
        if let Err(e) = ctx.borrow_mut().fit(w, h) {
            log::error!("[events] resize: {}", e);
        }
    })
}
