use glam::DVec2;
use orbfield_core::{DrawSurface, GradientStop};
use std::f64::consts::TAU;
use web_sys as web;

/// `DrawSurface` over an HTML canvas and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop; 3]) {
        let r = radius.max(0.0);
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, r)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[canvas] radial gradient failed: {:?}", e);
                return;
            }
        };
        for stop in stops {
            if let Err(e) = gradient.add_color_stop(stop.offset as f32, &stop.color.css()) {
                log::warn!("[canvas] color stop {} failed: {:?}", stop.color, e);
                return;
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, r, 0.0, TAU) {
            log::warn!("[canvas] arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
