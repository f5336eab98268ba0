use super::{EngineState, FieldCore, PointerState};

pub(super) fn pointer_enter(field: &mut FieldCore) {
    if field.detached {
        return;
    }
    // No position yet: nothing is pushed until the first move.
    field.pointer.over = true;
    field.state = EngineState::Active;
}

pub(super) fn pointer_move(field: &mut FieldCore, x: f32, y: f32) {
    if field.detached {
        return;
    }
    field.pointer.position = Some((x, y));
    field.pointer.over = true;
    field.state = EngineState::Active;
}

/// The field stays Active: particles in flight keep settling until a
/// compaction pass empties the active set.
pub(super) fn pointer_leave(field: &mut FieldCore) {
    if field.detached {
        return;
    }
    field.pointer.over = false;
    field.pointer.position = None;
}

pub(super) fn teardown(field: &mut FieldCore) {
    if field.detached {
        return;
    }
    field.detached = true;
    field.pointer = PointerState::default();
    field.state = EngineState::Idle;
    field.recovery_pending = false;

    field.active.release();
    field.swap.release();
    field.grid.release();
    field.render_positions = Vec::new();
    field.render_colors = Vec::new();

    console_log!("field torn down after {} frames", field.frame);
}
