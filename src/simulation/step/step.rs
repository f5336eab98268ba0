use super::perf_timer::lap_ms;
use super::{EngineState, FieldCore, PerfTimer};

pub(super) fn tick(field: &mut FieldCore) -> bool {
    // Idle means the pointer is gone and nothing is in flight: no work at all.
    if field.detached || field.state == EngineState::Idle {
        return false;
    }

    let perf_on = field.perf_enabled;
    if perf_on {
        field.perf_stats.reset();
    }
    let tick_start = PerfTimer::start_if(perf_on);

    // 1. Admit at-rest particles under the pointer.
    let t0 = PerfTimer::start_if(perf_on);
    let scan = field.activation_scan();
    let scan_ms = lap_ms(t0);

    // 2 + 3. Push, integrate, compact, swap.
    let t0 = PerfTimer::start_if(perf_on);
    let integrated = field.integrate_active();
    let integrate_ms = lap_ms(t0);

    field.dropped_last_tick = integrated.dropped;
    field.dropped_total += integrated.dropped as u64;
    if integrated.dropped > 0 {
        if !field.recovery_pending {
            console_warn!(
                "active set full ({}): dropped {} displaced particles, recovery pending",
                field.config.max_active,
                integrated.dropped
            );
        }
        field.recovery_pending = true;
    }

    // Parked particles rejoin once the survivors leave room.
    let t0 = PerfTimer::start_if(perf_on);
    let recovered = if integrated.dropped == 0 { field.recover_overflow() } else { 0 };
    let recovery_ms = lap_ms(t0);

    if !field.pointer.over && field.active.is_empty() {
        field.state = EngineState::Idle;
    }
    field.frame += 1;

    if perf_on {
        let stats = &mut field.perf_stats;
        stats.scan_ms = scan_ms;
        stats.integrate_ms = integrate_ms;
        stats.recovery_ms = recovery_ms;
        stats.scanned_cells = scan.cells;
        stats.admitted = scan.admitted;
        stats.integrated = integrated.integrated;
        stats.survivors = integrated.survivors;
        stats.dropped = integrated.dropped;
        stats.recovered = recovered;
        stats.active_count = field.active.len() as u32;
        stats.particle_count = field.grid.len() as u32;
        stats.tick_ms = lap_ms(tick_start);
    }

    // 4. Tell the host whether another tick is needed.
    !field.active.is_empty()
}
