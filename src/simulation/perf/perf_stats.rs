use wasm_bindgen::prelude::*;

/// Per-tick counters and timings. Filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) scan_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) recovery_ms: f64,
    pub(super) scanned_cells: u32,
    pub(super) admitted: u32,
    pub(super) integrated: u32,
    pub(super) survivors: u32,
    pub(super) dropped: u32,
    pub(super) recovered: u32,
    pub(super) active_count: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn scan_ms(&self) -> f64 { self.scan_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn recovery_ms(&self) -> f64 { self.recovery_ms }
    #[wasm_bindgen(getter)]
    pub fn scanned_cells(&self) -> u32 { self.scanned_cells }
    #[wasm_bindgen(getter)]
    pub fn admitted(&self) -> u32 { self.admitted }
    #[wasm_bindgen(getter)]
    pub fn integrated(&self) -> u32 { self.integrated }
    #[wasm_bindgen(getter)]
    pub fn survivors(&self) -> u32 { self.survivors }
    #[wasm_bindgen(getter)]
    pub fn dropped(&self) -> u32 { self.dropped }
    #[wasm_bindgen(getter)]
    pub fn recovered(&self) -> u32 { self.recovered }
    #[wasm_bindgen(getter)]
    pub fn active_count(&self) -> u32 { self.active_count }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
