//! JS-facing surface

pub use crate::simulation::{FieldHandle, PerfStats};
