//! Field - the disturbance simulation
//!
//! One tick, run to completion:
//! 1. activation scan: cells around the pointer that are at rest join the active set
//! 2. integration: every active particle is pushed, integrated, and kept if still displaced
//! 3. the two active buffers swap
//!
//! Only the active set is touched per tick. The scan costs the window area,
//! never the whole grid. The lone full-grid pass is overflow recovery, which
//! runs only after survivors were dropped at the `max_active` cap.

use crate::api::raster::RasterSampler;
use crate::api::render::Renderer;
use crate::domain::config::FieldConfig;
use crate::spatial::active_buffer::ActiveBuffer;
use crate::spatial::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/scan.rs"]
mod scan;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/recovery.rs"]
mod recovery;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::FieldHandle;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Engine lifecycle.
///
/// `Idle -> Active` on pointer enter or move. `Active -> Idle` only once the
/// pointer has left and a compaction pass leaves the active set empty, so a
/// spring-back in progress always finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Active,
}

/// `position` is `None` until a move event reports where the pointer is,
/// and goes back to `None` on leave.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerState {
    over: bool,
    position: Option<(f32, f32)>,
}

impl PointerState {
    /// Where the pointer acts this tick, if it is over the surface at a known spot.
    #[inline]
    pub(crate) fn active_position(&self) -> Option<(f32, f32)> {
        if self.over { self.position } else { None }
    }
}

pub struct FieldCore {
    grid: Grid,
    config: FieldConfig,
    push_radius_sq: f32,

    // Current active set and the compaction target; swapped every tick
    active: ActiveBuffer,
    swap: ActiveBuffer,

    state: EngineState,
    pointer: PointerState,
    detached: bool,

    frame: u64,
    dropped_last_tick: u32,
    dropped_total: u64,
    recovery_pending: bool,

    // Render extract buffers (JS reads these through raw pointers)
    render_positions: Vec<f32>,
    render_colors: Vec<u32>,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FieldCore {
    /// Build a field with default settle policy and buffer sizing.
    pub fn initialize<S: RasterSampler + ?Sized>(
        sampler: &S,
        width: u32,
        height: u32,
        pixel_size: u32,
        push_radius: f32,
        friction: f32,
        ease: f32,
    ) -> Result<Self, String> {
        let config = FieldConfig {
            pixel_size,
            push_radius,
            friction,
            ease,
            ..FieldConfig::default()
        };
        Self::with_config(sampler, width, height, config)
    }

    pub fn with_config<S: RasterSampler + ?Sized>(
        sampler: &S,
        width: u32,
        height: u32,
        config: FieldConfig,
    ) -> Result<Self, String> {
        init::create_field_core(sampler, width, height, config)
    }

    // === Pointer input ===

    pub fn on_pointer_enter(&mut self) {
        commands::pointer_enter(self);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y);
    }

    pub fn on_pointer_leave(&mut self) {
        commands::pointer_leave(self);
    }

    /// Advance one frame. Returns whether any particle is still displaced,
    /// i.e. whether the host should schedule another tick.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// Release buffers and particle storage and stop reacting to input.
    pub fn teardown(&mut self) {
        commands::teardown(self);
    }

    // === Rendering ===

    /// Full-grid draw: one `clear`, then every particle.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_extract::render(self, renderer);
    }

    /// Pack `[x0, y0, x1, y1, ...]` for every particle and return the buffer start.
    pub fn extract_positions(&mut self) -> *const f32 {
        render_extract::extract_positions(self)
    }

    pub fn positions_len(&self) -> usize {
        self.render_positions.len()
    }

    /// Particle colors, same order as positions. Fixed after init.
    pub fn colors_ptr(&self) -> *const u32 {
        self.render_colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render_colors.len()
    }

    // === Introspection ===

    pub fn state(&self) -> EngineState { self.state }

    pub fn is_idle(&self) -> bool { self.state == EngineState::Idle }

    pub fn is_detached(&self) -> bool { self.detached }

    pub fn pointer_over(&self) -> bool { self.pointer.over }

    pub fn active_count(&self) -> usize { self.active.len() }

    pub fn particle_count(&self) -> usize { self.grid.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Survivors dropped at the `max_active` cap during the last tick.
    pub fn dropped_last_tick(&self) -> u32 { self.dropped_last_tick }

    pub fn dropped_total(&self) -> u64 { self.dropped_total }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn config(&self) -> &FieldConfig { &self.config }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

// Tick phases
impl FieldCore {
    /// Push every at-rest particle under the pointer window onto the active set.
    pub(crate) fn activation_scan(&mut self) -> scan::ScanCounts {
        scan::activation_scan(self)
    }

    /// Integrate the active set into the swap buffer, then swap.
    pub(crate) fn integrate_active(&mut self) -> integrate::IntegrateCounts {
        integrate::integrate_active(self)
    }

    /// Rebuild the active set after survivors were dropped at the cap.
    fn recover_overflow(&mut self) -> u32 {
        recovery::recover_overflow(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
