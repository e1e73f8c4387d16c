//! Drawing surface abstraction and the manager that keeps it sized to the viewport.

use crate::color::GradientStop;
use glam::DVec2;

/// Pixel dimensions reported by the host viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Read-only view of the surface size handed to orbs each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<Viewport> for Bounds {
    fn from(v: Viewport) -> Self {
        Self::new(v.width as f64, v.height as f64)
    }
}

/// 2D raster target the field paints onto.
pub trait DrawSurface {
    /// Resize the backing store. Drawing issued before this applied to the old size.
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self, width: f64, height: f64);
    /// Fill a disc with a radial gradient running from `center` out to `radius`.
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop; 3]);
}

/// Owns the drawing surface and its current pixel size.
pub struct SurfaceManager<S> {
    surface: S,
    viewport: Viewport,
}

impl<S: DrawSurface> SurfaceManager<S> {
    /// Wraps `surface` and sizes it to `viewport` immediately.
    pub fn new(surface: S, viewport: Viewport) -> Self {
        let mut manager = Self {
            surface,
            viewport: Viewport::default(),
        };
        manager.resize(viewport);
        manager
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("[surface] resize {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.surface.set_size(viewport.width, viewport.height);
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.viewport.into()
    }

    /// Clear the full surface.
    pub fn clear(&mut self) {
        let b = self.bounds();
        self.surface.clear(b.width, b.height);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetSize { width: u32, height: u32 },
    Clear { width: f64, height: f64 },
    Glow {
        center: DVec2,
        radius: f64,
        stops: [GradientStop; 3],
    },
}

/// Headless surface that records every call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn glows(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Glow { .. }))
    }

    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop; 3]) {
        self.commands.push(DrawCommand::Glow {
            center,
            radius,
            stops: *stops,
        });
    }
}
