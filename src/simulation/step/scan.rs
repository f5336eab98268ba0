use super::FieldCore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanCounts {
    pub(crate) cells: u32,
    pub(crate) admitted: u32,
}

/// Admit at-rest particles inside the pointer window.
///
/// Particles already displaced are skipped: they are either still in the
/// active set from the last compaction or parked after an overflow, and in
/// both cases pushing them again would integrate them twice per tick.
pub(super) fn activation_scan(field: &mut FieldCore) -> ScanCounts {
    let mut counts = ScanCounts::default();
    let Some((px, py)) = field.pointer.active_position() else {
        return counts;
    };
    let Some(window) = field.grid.activation_window(px, py) else {
        return counts;
    };

    let policy = field.config.settle_policy;
    for row in window.row_start..=window.row_end {
        for col in window.col_start..=window.col_end {
            counts.cells += 1;
            let Some(idx) = field.grid.particle_at_cell(row, col) else {
                continue;
            };
            if !field.grid.particle(idx).is_displaced_with(policy) {
                field.active.push(idx);
                counts.admitted += 1;
            }
        }
    }
    counts
}
