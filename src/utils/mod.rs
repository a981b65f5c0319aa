//! Small helpers that don't belong to a layer.
//!
//! - [`process_memory`] - Resident set size of the running process

pub mod process_memory;
