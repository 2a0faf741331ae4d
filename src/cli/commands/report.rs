//! Report command handlers
//!
//! GPA lookup, markdown student reports, the course summary table, and the
//! referential integrity check.

use super::load_roster;
use grade_tracker::config::Config;
use grade_tracker::models::StudentId;
use grade_tracker::report::{course_summary, student_report};
use grade_tracker::{Result, TrackerError};
use logger::{info, warn};
use std::path::{Path, PathBuf};

/// Print a student's credit-weighted GPA
///
/// # Errors
/// Unknown student, or a student with no credited courses
pub fn gpa(student_id: StudentId, config: &Config) -> Result<()> {
    let roster = load_roster(config)?;
    let student = roster
        .find_student(student_id)
        .ok_or(TrackerError::StudentNotFound(student_id))?;
    let gpa = roster.student_gpa(student_id)?;
    println!("{} ({student_id}): GPA {gpa:.2}", student.name);
    Ok(())
}

/// Write a student's markdown report to `output`, or into the reports directory
///
/// # Errors
/// Unknown student, or the report file cannot be written
pub fn student(student_id: StudentId, output: Option<&Path>, config: &Config) -> Result<()> {
    let roster = load_roster(config)?;
    let report = student_report(&roster, student_id)?;

    let output_path = output.map_or_else(
        || default_report_path(config, student_id),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| TrackerError::FileAccess {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(&output_path, report).map_err(|source| TrackerError::FileAccess {
        path: output_path.clone(),
        source,
    })?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    Ok(())
}

/// Print the statistics table for every course
///
/// # Errors
/// Snapshot load failures
pub fn summary(config: &Config) -> Result<()> {
    let roster = load_roster(config)?;
    print!("{}", course_summary(&roster));
    Ok(())
}

/// List student enrollments whose course is missing from the roster
///
/// # Errors
/// Snapshot load failures
pub fn check(config: &Config) -> Result<()> {
    let roster = load_roster(config)?;
    let dangling = roster.dangling_references();

    if dangling.is_empty() {
        println!("✓ No dangling references");
        return Ok(());
    }

    for (student_id, course_id) in &dangling {
        warn!("Dangling enrollment: student {student_id} / course {course_id}");
        println!("✗ student {student_id} <-> course {course_id}");
    }
    println!("{} dangling reference(s)", dangling.len());
    Ok(())
}

fn default_report_path(config: &Config, student_id: StudentId) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!("student-{student_id}.md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_path() {
        let mut config = Config::default();
        config.paths.reports_dir = "/srv/reports".to_string();
        assert_eq!(
            default_report_path(&config, 42),
            PathBuf::from("/srv/reports/student-42.md")
        );
    }
}
