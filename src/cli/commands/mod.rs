//! CLI command handlers for `GradeTracker`.
//!
//! Each command group is implemented in its own submodule. Mutating commands
//! load the snapshot, apply one change, and save it back.

pub mod config;
pub mod course;
pub mod grade;
pub mod report;
pub mod student;

use grade_tracker::config::Config;
use grade_tracker::models::{CourseId, Roster};
use grade_tracker::{snapshot, Result, TrackerError};
use logger::{info, verbose};
use std::path::PathBuf;

/// Snapshot file named by the effective configuration
pub fn data_path(config: &Config) -> PathBuf {
    PathBuf::from(&config.paths.data_file)
}

/// Load the roster from the configured snapshot, or start empty on first run
///
/// # Errors
/// Propagates snapshot read and decode failures
pub fn load_roster(config: &Config) -> Result<Roster> {
    let path = data_path(config);
    if path.exists() {
        snapshot::load(&path)
    } else {
        info!("No snapshot at {}; starting with an empty roster", path.display());
        Ok(Roster::new())
    }
}

/// Save the roster to the configured snapshot and flush its event log
///
/// # Errors
/// Propagates directory creation and snapshot write failures
pub fn save_roster(roster: &mut Roster, config: &Config) -> Result<()> {
    let path = data_path(config);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| TrackerError::FileAccess {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    snapshot::save(roster, &path)?;

    for event in roster.events_mut().take() {
        info!("{}", event.description);
        verbose!("{event}");
    }
    Ok(())
}

/// Resolve a course code to its id
///
/// # Errors
/// [`TrackerError::CourseCodeNotFound`] if no course has that code
pub fn course_id_for(roster: &Roster, code: &str) -> Result<CourseId> {
    roster
        .find_course_by_code(code)
        .map(|course| course.course_id)
        .ok_or_else(|| TrackerError::CourseCodeNotFound(code.to_string()))
}
