use crate::canvas::CanvasSurface;
use crate::dom;
use crate::error::MountError;
use crate::events;
use anyhow::Context;
use orbfield_core::{Background, FieldConfig, FrameScheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebBackground = Background<CanvasSurface, RafScheduler>;

/// `FrameScheduler` bound to `requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
    tick: Closure<dyn FnMut()>,
    pending: Option<i32>,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: impl FnMut() + 'static) -> Self {
        Self {
            window,
            tick: Closure::wrap(Box::new(tick) as Box<dyn FnMut()>),
            pending: None,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        self.cancel();
        match self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending = Some(id),
            Err(e) => {
                self.pending = None;
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for RafScheduler {
    // The browser must never call back into a dropped closure.
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Mount onto `#canvas_id`: size the canvas, seed the field, listen for resize
/// and pointer moves, and start the frame loop.
pub fn mount_background(
    canvas_id: &str,
    cfg: &FieldConfig,
    seed: u64,
) -> anyhow::Result<Rc<RefCell<WebBackground>>> {
    let window = dom::window()?;
    let canvas = dom::canvas_by_id(&window, canvas_id)?;
    let ctx = dom::context_2d(&canvas).with_context(|| format!("canvas #{canvas_id}"))?;
    let surface = CanvasSurface::new(canvas, ctx);

    // The first tick fires asynchronously, after the target below is set.
    let target: Rc<OnceCell<Weak<RefCell<WebBackground>>>> = Rc::new(OnceCell::new());
    let tick_target = target.clone();
    let scheduler = RafScheduler::new(window.clone(), move || {
        if let Some(bg) = tick_target.get().and_then(Weak::upgrade) {
            bg.borrow_mut().on_frame();
        }
    });

    log::info!("[frame] seed={seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let background = Background::mount(cfg, &mut rng, surface, dom::viewport(&window), scheduler)
        .map_err(MountError::from)?;
    let background = Rc::new(RefCell::new(background));
    _ = target.set(Rc::downgrade(&background));

    let resize = events::wire_resize(&window, Rc::downgrade(&background));
    let pointer = events::wire_pointermove(&window, Rc::downgrade(&background));
    let wired = {
        let mut bg = background.borrow_mut();
        let mut first_err = None;
        for listener in [resize, pointer] {
            match listener {
                Ok(l) => bg.attach(Box::new(l)),
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            None => Ok(()),
            Some(e) => {
                // Releases whichever listener did register, then cancels the first frame.
                bg.teardown();
                Err(e)
            }
        }
    };
    wired.context("wiring window listeners")?;
    Ok(background)
}
