use crate::error::MountError;
use orbfield_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, MountError> {
    web::window().ok_or(MountError::NoWindow)
}

pub fn canvas_by_id(window: &web::Window, id: &str) -> Result<web::HtmlCanvasElement, MountError> {
    let document = window.document().ok_or(MountError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id.to_owned()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")
        .map_err(|e| MountError::NoContext(format!("{:?}", e)))?
        .ok_or_else(|| MountError::NoContext("canvas already has another context".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| MountError::NoContext(format!("{:?}", e)))
}

/// Current viewport in CSS pixels; the canvas backing store is sized to match.
pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
            .max(0.0) as u32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}
