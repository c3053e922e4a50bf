//! Dot-grid canvas bootstrap for the schematic editor page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On page
//! load it locates the host page's canvas element, sizes it to the full
//! screen, and paints the fixed-pitch dot lattice that schematic components
//! are placed on. The host JavaScript layer is responsible only for loading
//! the module and calling [`boot::on_load`] from the page's `load` event.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Entry points exported to the host page |
//! | [`grid`] | Grid parameters and dot-lattice geometry |
//! | [`render`] | Painting the lattice onto a 2D context |
//! | [`surface`] | Locating and sizing the canvas element |
//! | [`consts`] | Shared constants (element id, default geometry) |

pub mod boot;
pub mod consts;
pub mod grid;
pub mod render;
pub mod surface;
