//! Bootstrap: the entry points the host page wires to its load lifecycle.
//!
//! The host HTML loads the wasm module and calls [`on_load`] from its
//! `load` event handler; the event registration itself lives on the page,
//! not here. [`draw_grid`] is also exported on its own so the host can
//! repaint without reloading. Errors cross the wasm boundary as thrown JS
//! exceptions and surface through the page's default error handling.

use std::sync::Once;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::grid::GridConfig;
use crate::{render, surface};

static LOG_INIT: Once = Once::new();

/// Install the panic hook and console logger exactly once per module load.
fn init_logging() {
    LOG_INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("console logger already installed"));
        }
    });
}

/// Entry point for the page `load` event: draw the component grid once.
///
/// # Errors
///
/// Thrown as a JS exception if the canvas is missing or drawing fails.
#[wasm_bindgen(js_name = onLoad)]
pub fn on_load() -> Result<(), JsValue> {
    draw_grid()
}

/// Draw the grid that components fall on, using the default geometry.
///
/// Acquiring the surface resizes it to the full screen, which clears prior
/// content; invoking this again therefore repaints an identical grid.
///
/// # Errors
///
/// Thrown as a JS exception if the canvas is missing or drawing fails.
#[wasm_bindgen(js_name = drawGrid)]
pub fn draw_grid() -> Result<(), JsValue> {
    init_logging();
    draw_grid_with(&GridConfig::default())
}

/// Draw the grid with an explicit [`GridConfig`].
///
/// This is the Rust-level seam behind the wasm exports: drawing logic is
/// parameterized here while the exported surface stays zero-argument.
///
/// # Errors
///
/// Returns `Err` if the surface cannot be acquired or a `Canvas2D` call
/// fails.
pub fn draw_grid_with(config: &GridConfig) -> Result<(), JsValue> {
    let canvas = surface::acquire()?;
    let ctx = surface::context_2d(&canvas)?;

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    log::debug!(
        "drawing {} dots onto {width}x{height} canvas",
        config.dot_count(width, height)
    );

    render::draw(&ctx, config, width, height)
}
