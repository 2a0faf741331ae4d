//! Data models for `GradeTracker`

pub mod course;
pub mod roster;
pub mod student;

pub use course::{Course, CourseId};
pub use roster::Roster;
pub use student::{Student, StudentId};
