//! Rendering: paints the dot lattice onto a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives the grid config and
//! the canvas dimensions and produces pixels — it does not touch the DOM
//! or mutate any other state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::boot::draw_grid_with`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::grid::GridConfig;

/// Fill colour for grid dots.
const DOT_FILL: &str = "#000";

/// Paint the full dot lattice onto `ctx`.
///
/// `width` and `height` are the canvas backing-store dimensions in pixels.
/// Dots are drawn column-major; they never overlap at any sane spacing, so
/// draw order is not visible in the output. The context's fill style is
/// left set to the dot colour afterwards.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    config: &GridConfig,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(DOT_FILL);
    for center in config.dot_centers(width, height) {
        ctx.begin_path();
        ctx.arc(center.x, center.y, config.dot_radius, 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    Ok(())
}
