use crate::spatial::active_buffer::ParticleIndex;

use super::FieldCore;

/// Refill the active set from the grid after an overflow.
///
/// Only runs while a recovery is pending and the active set has room. The
/// rebuilt set holds every displaced particle once, up to `max_active`; if
/// the cap is hit again the recovery stays pending for a later tick.
/// Returns how many particles the rebuilt set holds.
pub(super) fn recover_overflow(field: &mut FieldCore) -> u32 {
    let max_active = field.config.max_active;
    if !field.recovery_pending || field.active.len() >= max_active {
        return 0;
    }

    let policy = field.config.settle_policy;
    field.active.reset();
    let mut saturated = false;
    for (idx, particle) in field.grid.particles().iter().enumerate() {
        if !particle.is_displaced_with(policy) {
            continue;
        }
        if field.active.len() == max_active {
            saturated = true;
            break;
        }
        field.active.push(idx as ParticleIndex);
    }

    field.recovery_pending = saturated;
    if !saturated {
        console_log!("active set recovered: {} particles back in flight", field.active.len());
    }
    field.active.len() as u32
}
