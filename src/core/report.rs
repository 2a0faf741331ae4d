//! Markdown reports for students and courses

use crate::core::error::{Result, TrackerError};
use crate::core::grading::{percentage_to_letter, LetterGrade};
use crate::core::models::{Course, Roster, StudentId};
use std::fmt::Write;

/// Render a student's grade report: one row per enrolled course, then the GPA
///
/// # Errors
/// [`TrackerError::StudentNotFound`] if no such student exists
pub fn student_report(roster: &Roster, student_id: StudentId) -> Result<String> {
    let student = roster
        .find_student(student_id)
        .ok_or(TrackerError::StudentNotFound(student_id))?;
    let courses = roster.courses_for_student(student_id)?;

    let mut output = String::new();
    let _ = writeln!(output, "# Grade Report: {} ({})", student.name, student.student_id);
    let _ = writeln!(output);

    if courses.is_empty() {
        let _ = writeln!(output, "_Not enrolled in any course._");
    } else {
        let _ = writeln!(output, "| Code | Course | Credits | Grade | Letter |");
        let _ = writeln!(output, "|------|--------|---------|-------|--------|");
        for course in &courses {
            let (grade, letter) = course.grade(student_id).map_or_else(
                || ("-".to_string(), "-".to_string()),
                |g| (format!("{g:.2}"), percentage_to_letter(g).to_string()),
            );
            let _ = writeln!(
                output,
                "| {} | {} | {} | {grade} | {letter} |",
                course.code, course.name, course.credits
            );
        }
    }

    let _ = writeln!(output);
    match roster.student_gpa(student_id) {
        Ok(gpa) => {
            let _ = writeln!(output, "**GPA:** {gpa:.2}");
        }
        Err(_) => {
            let _ = writeln!(output, "**GPA:** n/a");
        }
    }

    Ok(output)
}

/// Render the summary table of every course's statistics
#[must_use]
pub fn course_summary(roster: &Roster) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Course Summary");
    let _ = writeln!(output);

    if roster.courses().is_empty() {
        let _ = writeln!(output, "_No courses._");
        return output;
    }

    let _ = writeln!(
        output,
        "| ID | Course | Credits | Average | Median | Std Dev |"
    );
    let _ = writeln!(
        output,
        "|----|--------|---------|---------|--------|---------|"
    );
    for course in roster.courses() {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} |",
            course.course_id,
            course.name,
            course.credits,
            course.average_grade(),
            course.median_grade(),
            course.standard_deviation()
        );
    }
    output
}

/// Count of each letter grade in a course, best first, omitting letters nobody earned
#[must_use]
pub fn letter_counts(course: &Course) -> Vec<(LetterGrade, usize)> {
    let distribution = course.grade_distribution();
    LetterGrade::ALL
        .into_iter()
        .map(|letter| {
            let count = distribution.iter().filter(|&&l| l == letter).count();
            (letter, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Render the statistics and letter distribution of a single course
#[must_use]
pub fn course_detail(course: &Course) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# {} - {}", course.code, course.name);
    let _ = writeln!(output);
    if !course.description.is_empty() {
        let _ = writeln!(output, "{}", course.description);
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "- **Course ID:** {}", course.course_id);
    let _ = writeln!(output, "- **Credits:** {}", course.credits);
    let _ = writeln!(output, "- **Max percentage:** {:.1}", course.max_percentage);
    if let (Some(start), Some(end)) = (course.start_date, course.end_date) {
        let _ = writeln!(output, "- **Runs:** {start} to {end}");
    }
    let _ = writeln!(
        output,
        "- **Enrolled:** {} ({} graded)",
        course.enrolled_student_ids().len(),
        course.graded_count()
    );
    let _ = writeln!(output, "- **Average:** {:.2}", course.average_grade());
    let _ = writeln!(output, "- **Median:** {:.2}", course.median_grade());
    let _ = writeln!(output, "- **Std Dev:** {:.2}", course.standard_deviation());
    let _ = writeln!(
        output,
        "- **Average grade points:** {:.2}",
        course.average_grade_points()
    );

    let counts = letter_counts(course);
    if !counts.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "| Letter | Count |");
        let _ = writeln!(output, "|--------|-------|");
        for (letter, count) in counts {
            let _ = writeln!(output, "| {letter} | {count} |");
        }
    }

    output
}
