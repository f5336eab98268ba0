//! Shared low-level helpers

#[macro_use]
pub mod utils;
