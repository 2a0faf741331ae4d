//! Error types shared by the grade-tracking core

use crate::core::models::{CourseId, StudentId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by roster operations and snapshot persistence
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A grade operation targeted a student who is not enrolled in the course
    #[error("student {student_id} is not enrolled in course {course_id}")]
    NotEnrolled {
        /// Course the grade was addressed to
        course_id: CourseId,
        /// Student that is missing from the course roster
        student_id: StudentId,
    },

    /// The snapshot document is missing required keys or holds values of the wrong type
    #[error("malformed snapshot document: {0}")]
    MalformedDocument(String),

    /// The snapshot file could not be read or written
    #[error("cannot access snapshot file {path:?}: {source}")]
    FileAccess {
        /// Path of the snapshot file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The roster could not be encoded as a snapshot document
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    /// An operation was invoked on an entity that is not configured for it
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// No student with the given id exists in the roster
    #[error("no student with id {0}")]
    StudentNotFound(StudentId),

    /// No course with the given id exists in the roster
    #[error("no course with id {0}")]
    CourseNotFound(CourseId),

    /// No course with the given code exists in the roster
    #[error("no course with code '{0}'")]
    CourseCodeNotFound(String),

    /// A student with the same id is already in the roster
    #[error("a student with id {0} already exists")]
    DuplicateStudent(StudentId),

    /// A course with the same id is already in the roster
    #[error("a course with id {0} already exists")]
    DuplicateCourse(CourseId),

    /// A course with the same code is already in the roster
    #[error("a course with code '{0}' already exists")]
    DuplicateCourseCode(String),
}

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Build a [`TrackerError::FileAccess`] for `path`
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors that leave the roster untouched and can be reported
    /// to the user as a plain message (as opposed to persistence failures)
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::MalformedDocument(_) | Self::FileAccess { .. } | Self::Encode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enrolled_message() {
        let err = TrackerError::NotEnrolled {
            course_id: 101,
            student_id: 7,
        };
        assert_eq!(err.to_string(), "student 7 is not enrolled in course 101");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_file_access_is_not_recoverable() {
        let err = TrackerError::file_access(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("missing.json"));
        assert!(!err.is_recoverable());
    }
}
