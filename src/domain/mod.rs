//! Particle physics and field settings

pub mod config;
pub mod particle;
