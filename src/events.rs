use crate::constants::{POINTER_MOVE_EVENT, RESIZE_EVENT};
use crate::dom;
use crate::error::MountError;
use crate::frame::WebBackground;
use orbfield_core::Subscription;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Removing it from the target happens on drop.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| MountError::Listen {
                event,
                detail: format!("{:?}", e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Subscription for EventListener {
    fn event(&self) -> &str {
        self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn wire_resize(
    window: &web::Window,
    background: Weak<RefCell<WebBackground>>,
) -> Result<EventListener, MountError> {
    EventListener::new(window, RESIZE_EVENT, move |_ev| {
        let (Some(bg), Some(w)) = (background.upgrade(), web::window()) else {
            return;
        };
        bg.borrow_mut().on_resize(dom::viewport(&w));
    })
}

pub fn wire_pointermove(
    window: &web::Window,
    background: Weak<RefCell<WebBackground>>,
) -> Result<EventListener, MountError> {
    EventListener::new(window, POINTER_MOVE_EVENT, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(bg) = background.upgrade() {
            bg.borrow_mut()
                .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
        }
    })
}
