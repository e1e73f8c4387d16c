//! The mounted background: surface, pointer, field and loop created and torn
//! down together.
//!
//! Host event registrations are held as [`Subscription`] guards. Dropping a
//! guard releases its registration, so the listeners go away on teardown, on
//! drop of the whole background, and while unwinding.

use crate::config::{ConfigError, FieldConfig};
use crate::field::OrbField;
use crate::input::InputBridge;
use crate::render_loop::{LoopState, RenderLoop};
use crate::scheduler::FrameScheduler;
use crate::surface::{DrawSurface, SurfaceManager, Viewport};
use rand::Rng;

/// A live host listener registration; releases itself on drop.
pub trait Subscription {
    /// Event name, for logging.
    fn event(&self) -> &str;
}

pub struct Background<S, F> {
    surface: SurfaceManager<S>,
    input: InputBridge,
    field: OrbField,
    render_loop: RenderLoop<F>,
    listeners: Vec<Box<dyn Subscription>>,
}

impl<S: DrawSurface, F: FrameScheduler> Background<S, F> {
    /// Size the surface, seed the field and start the loop.
    pub fn mount<R: Rng + ?Sized>(
        cfg: &FieldConfig,
        rng: &mut R,
        surface: S,
        viewport: Viewport,
        scheduler: F,
    ) -> Result<Self, ConfigError> {
        let surface = SurfaceManager::new(surface, viewport);
        let field = OrbField::new(cfg, rng, surface.bounds())?;
        log::info!(
            "[background] mounted {} orbs on {}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            surface,
            input: InputBridge::new(),
            field,
            render_loop: RenderLoop::start(scheduler),
            listeners: Vec::new(),
        })
    }

    /// Keep a listener registration alive until teardown. Listeners are released
    /// in the order they were attached.
    pub fn attach(&mut self, listener: Box<dyn Subscription>) {
        log::debug!("[background] listening for `{}`", listener.event());
        self.listeners.push(listener);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.input.pointer_moved(x, y);
    }

    /// One tick: clear, count, advance, paint, reschedule. Does nothing once stopped.
    pub fn on_frame(&mut self) {
        if !self.render_loop.is_running() {
            return;
        }
        self.surface.clear();
        let time = self.render_loop.next_frame();
        self.field
            .advance(time, self.surface.bounds(), self.input.pointer());
        self.field.paint(self.surface.surface_mut());
        self.render_loop.reschedule();
    }

    /// Release listeners in attach order, then cancel the pending frame.
    /// Returns false when already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.render_loop.state() == LoopState::Stopped && self.listeners.is_empty() {
            return false;
        }
        for listener in self.listeners.drain(..) {
            log::debug!("[background] released `{}` listener", listener.event());
        }
        self.render_loop.stop();
        log::info!(
            "[background] torn down after {} frames",
            self.render_loop.frame()
        );
        true
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn frame(&self) -> u64 {
        self.render_loop.frame()
    }

    pub fn field(&self) -> &OrbField {
        &self.field
    }

    pub fn input(&self) -> &InputBridge {
        &self.input
    }

    pub fn surface(&self) -> &SurfaceManager<S> {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        self.render_loop.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        self.render_loop.scheduler_mut()
    }
}
