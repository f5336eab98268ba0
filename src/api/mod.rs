//! Boundary types: what the engine consumes from and exposes to its host

pub mod raster;
pub mod render;
pub mod wasm;
