//! Disturbance Engine - image sprites as interactive particle fields, in WASM
//!
//! An image is sampled into a grid of particles. A pointer near the grid
//! kicks particles away, and they spring back to where they were sampled.
//!
//! Architecture:
//! - core/        - Hot-path indexing and console logging macros
//! - domain/      - Particle physics and field configuration
//! - spatial/     - Particle grid and active-set buffers
//! - simulation/  - Tick orchestration, lifecycle, perf, render extract
//! - api/         - Raster/renderer boundaries and the JS handle

// Macros first so every later module sees them
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel render extract (JS calls this once before use)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Disturbance engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::raster::{RasterSampler, RgbaImage};
pub use api::render::Renderer;
pub use api::wasm::FieldHandle;
pub use domain::config::FieldConfig;
pub use domain::particle::{Particle, SettlePolicy};
pub use simulation::{EngineState, FieldCore, PerfStats};
pub use spatial::active_buffer::{ActiveBuffer, ParticleIndex};
pub use spatial::grid::{CellWindow, Grid};
