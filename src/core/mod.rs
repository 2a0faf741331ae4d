//! Core grade-tracking functionality shared by the CLI and library users

pub mod config;
pub mod error;
pub mod events;
pub mod grading;
pub mod models;
pub mod report;
pub mod snapshot;

/// Returns the current version of the `GradeTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
