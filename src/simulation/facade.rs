use wasm_bindgen::prelude::*;

use crate::api::raster::RgbaImage;
use crate::domain::config::FieldConfig;

use super::perf_stats::PerfStats;
use super::FieldCore;

/// JS handle for one disturbance field.
///
/// The host owns the frame loop: forward pointer events, call `tick()` from
/// `requestAnimationFrame` while it returns `true`, and draw from
/// `extract_positions()` + `colors_ptr()` after each tick.
#[wasm_bindgen]
pub struct FieldHandle {
    core: FieldCore,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Build from canvas `ImageData.data` (RGBA, `width * height * 4` bytes).
    #[wasm_bindgen(constructor)]
    pub fn new(
        rgba: &[u8],
        width: u32,
        height: u32,
        pixel_size: u32,
        push_radius: f32,
        friction: f32,
        ease: f32,
    ) -> Result<FieldHandle, JsValue> {
        let image = RgbaImage::new(rgba, width, height).map_err(|e| JsValue::from_str(&e))?;
        let core = FieldCore::initialize(&image, width, height, pixel_size, push_radius, friction, ease)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Build with a JSON config (camelCase keys, all optional).
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(
        rgba: &[u8],
        width: u32,
        height: u32,
        config_json: String,
    ) -> Result<FieldHandle, JsValue> {
        let config = FieldConfig::from_json(&config_json).map_err(|e| JsValue::from_str(&e))?;
        let image = RgbaImage::new(rgba, width, height).map_err(|e| JsValue::from_str(&e))?;
        let core = FieldCore::with_config(&image, width, height, config)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    pub fn pointer_enter(&mut self) {
        self.core.on_pointer_enter();
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.on_pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    /// Advance one frame; `false` means stop scheduling frames.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.grid().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.grid().height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> usize { self.core.active_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn dropped_count(&self) -> u32 { self.core.dropped_last_tick() }

    #[wasm_bindgen(getter)]
    pub fn particle_size(&self) -> f32 { self.core.config().resolved_particle_size() }

    pub fn is_idle(&self) -> bool {
        self.core.is_idle()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER EXTRACT ===

    /// Refresh the position buffer and return its address in WASM memory.
    /// Read `positions_len()` f32 values from there, `[x, y]` per particle.
    pub fn extract_positions(&mut self) -> *const f32 {
        self.core.extract_positions()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    /// ABGR colors, one per particle, same order as positions.
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}
