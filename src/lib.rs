//! Shared library for `GradeTracker`
//! Student, course, and grade model with GPA statistics and JSON snapshots.

pub mod core;

pub use crate::core::error::{Result, TrackerError};
pub use crate::core::{config, events, get_version, grading, models, report, snapshot};
