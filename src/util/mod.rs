//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod general;
pub mod timer;

pub use general::*;
pub use timer::{timed, Stopwatch};
