//! Surface access: locating and sizing the page's canvas element.
//!
//! The host page must contain exactly one `<canvas id="canvas">` element.
//! [`acquire`] looks it up, stretches it to the screen's full pixel
//! dimensions, and returns it; [`context_2d`] hands out the 2D drawing
//! context. Every failure mode is an explicit [`SurfaceError`] variant so
//! callers handle the missing-element case instead of tripping over an
//! absent reference.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::consts::CANVAS_ELEMENT_ID;

/// Errors raised while locating and preparing the drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// No global window object; the module is not running in a page.
    #[error("no window object in this environment")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// No element with the expected id exists in the document.
    #[error("no element with id `{0}` in the document")]
    NotFound(&'static str),
    /// The element with the expected id is not a `<canvas>`.
    #[error("element `{0}` is not a canvas")]
    NotACanvas(&'static str),
    /// The canvas refused to produce a 2D drawing context.
    #[error("2d context unavailable on canvas `{0}`")]
    ContextUnavailable(&'static str),
    /// A DOM call failed outright.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Locate the page's canvas element and size it to the full screen.
///
/// Resizing the backing store clears any prior pixel content; the caller is
/// expected to redraw from scratch afterwards.
///
/// # Errors
///
/// Returns a [`SurfaceError`] if there is no window/document, no element
/// with the expected id, or the element is not a canvas.
pub fn acquire() -> Result<HtmlCanvasElement, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or(SurfaceError::NotFound(CANVAS_ELEMENT_ID))?
        .dyn_into()
        .map_err(|_| SurfaceError::NotACanvas(CANVAS_ELEMENT_ID))?;

    let (width, height) = screen_size(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// Acquire the 2D drawing context of `canvas`.
///
/// # Errors
///
/// Returns [`SurfaceError::ContextUnavailable`] if the canvas has already
/// been bound to a different context kind, or the platform refuses.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .map_err(dom_error)?
        .ok_or(SurfaceError::ContextUnavailable(CANVAS_ELEMENT_ID))?
        .dyn_into()
        .map_err(|_| SurfaceError::ContextUnavailable(CANVAS_ELEMENT_ID))
}

/// The screen's full pixel dimensions, clamped to zero.
fn screen_size(window: &Window) -> Result<(u32, u32), SurfaceError> {
    let screen = window.screen().map_err(dom_error)?;
    let width = screen.width().map_err(dom_error)?;
    let height = screen.height().map_err(dom_error)?;
    Ok((width.max(0) as u32, height.max(0) as u32))
}

fn dom_error(value: JsValue) -> SurfaceError {
    SurfaceError::Dom(format!("{value:?}"))
}
