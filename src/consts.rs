//! Shared constants for the grid crate.

// ── DOM ─────────────────────────────────────────────────────────

/// Id of the canvas element the host page must provide.
pub const CANVAS_ELEMENT_ID: &str = "canvas";

// ── Grid geometry ───────────────────────────────────────────────

/// Default radius of a grid dot, in pixels.
pub const DEFAULT_DOT_RADIUS_PX: f64 = 1.0;

/// Default spacing between grid dots, in pixels.
pub const DEFAULT_DOT_SPACING_PX: f64 = 24.0;
