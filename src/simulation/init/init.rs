use crate::api::raster::RasterSampler;
use crate::domain::config::FieldConfig;
use crate::spatial::active_buffer::ActiveBuffer;
use crate::spatial::grid::Grid;

use super::perf_stats::PerfStats;
use super::{EngineState, FieldCore, PointerState};

pub(super) fn create_field_core<S: RasterSampler + ?Sized>(
    sampler: &S,
    width: u32,
    height: u32,
    config: FieldConfig,
) -> Result<FieldCore, String> {
    config.validate()?;

    let grid = Grid::build(sampler, width, height, &config);

    // Never start the buffers larger than the grid could fill.
    let capacity = config
        .initial_active_capacity
        .min(grid.len().max(1));

    let render_colors: Vec<u32> = grid.particles().iter().map(|p| p.color()).collect();
    let render_positions = vec![0.0f32; grid.len() * 2];

    console_log!(
        "field built: {}x{} px, stride {}, {} particles ({}), window radius {} cells",
        width,
        height,
        config.pixel_size,
        grid.len(),
        if grid.is_dense() { "dense" } else { "sparse" },
        grid.radius_scaled()
    );

    Ok(FieldCore {
        push_radius_sq: config.push_radius * config.push_radius,
        grid,
        config,
        active: ActiveBuffer::new(capacity),
        swap: ActiveBuffer::new(capacity),
        state: EngineState::Idle,
        pointer: PointerState::default(),
        detached: false,
        frame: 0,
        dropped_last_tick: 0,
        dropped_total: 0,
        recovery_pending: false,
        render_positions,
        render_colors,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
