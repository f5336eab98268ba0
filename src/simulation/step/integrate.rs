use super::FieldCore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct IntegrateCounts {
    pub(crate) integrated: u32,
    pub(crate) survivors: u32,
    pub(crate) dropped: u32,
}

/// Integrate every active particle and compact survivors into the swap buffer.
///
/// The active set is walked newest-first (reverse insertion order). Particles
/// do not interact, so order only matters for reproducible buffer contents.
/// Survivors beyond `max_active` are dropped for this tick and stay where
/// they are until recovery or a later scan picks them up again.
pub(super) fn integrate_active(field: &mut FieldCore) -> IntegrateCounts {
    let mut counts = IntegrateCounts::default();
    let max_active = field.config.max_active;
    let len = field.active.len();
    field.swap.reset();
    // Survivors never outnumber the active set or the cap, so the loop never grows `swap`.
    field.swap.reserve(len.min(max_active));

    // No push once the pointer is gone; particles only relax.
    let pointer = field.pointer.active_position();
    let push_radius = field.config.push_radius;
    let push_radius_sq = field.push_radius_sq;
    let policy = field.config.settle_policy;

    for i in (0..len).rev() {
        // SAFETY: i < len
        let idx = unsafe { field.active.at(i) };
        let particle = field.grid.particle_mut(idx);
        if let Some((px, py)) = pointer {
            particle.apply_proximity_impulse(px, py, push_radius, push_radius_sq);
        }
        particle.integrate();
        counts.integrated += 1;

        if particle.is_displaced_with(policy) {
            if field.swap.len() < max_active {
                field.swap.push(idx);
                counts.survivors += 1;
            } else {
                counts.dropped += 1;
            }
        }
    }

    std::mem::swap(&mut field.active, &mut field.swap);
    counts
}
