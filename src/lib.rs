#![cfg(target_arch = "wasm32")]
use orbfield_core::FieldConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod seed;

use crate::constants::DEFAULT_CANVAS_ID;
use crate::frame::WebBackground;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbfield-web starting");
    Ok(())
}

/// Mount the background with a clock-derived seed.
#[wasm_bindgen]
pub fn mount(canvas_id: Option<String>) -> Result<BackgroundHandle, JsValue> {
    let seed = seed::seed_from_clock(js_sys::Date::now());
    mount_seeded(canvas_id, seed)
}

/// Mount with an explicit seed so a given look can be reproduced.
#[wasm_bindgen(js_name = mountWithSeed)]
pub fn mount_with_seed(canvas_id: Option<String>, seed: f64) -> Result<BackgroundHandle, JsValue> {
    mount_seeded(canvas_id, seed::seed_from_js(seed))
}

fn mount_seeded(canvas_id: Option<String>, seed: u64) -> Result<BackgroundHandle, JsValue> {
    let id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
    match frame::mount_background(id, &FieldConfig::default(), seed) {
        Ok(inner) => Ok(BackgroundHandle { inner }),
        Err(e) => {
            log::error!("mount error: {:#}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

/// JS-side owner of a mounted background. `free()` tears it down too.
#[wasm_bindgen]
pub struct BackgroundHandle {
    inner: Rc<RefCell<WebBackground>>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Remove the listeners and cancel the pending frame. Safe to call twice.
    pub fn unmount(&self) -> bool {
        self.inner.borrow_mut().teardown()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().is_running()
    }

    /// Frames painted so far.
    pub fn frame(&self) -> f64 {
        self.inner.borrow().frame() as f64
    }
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        if let Ok(mut bg) = self.inner.try_borrow_mut() {
            bg.teardown();
        }
    }
}
