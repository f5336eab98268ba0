//! Particle storage: the sampled grid and the per-tick active set

pub mod active_buffer;
pub mod grid;
