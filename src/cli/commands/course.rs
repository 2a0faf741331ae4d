//! Course and enrollment command handlers

use super::{course_id_for, load_roster, save_roster};
use crate::args::CourseSubcommand;
use grade_tracker::config::Config;
use grade_tracker::models::{Course, Roster, StudentId};
use grade_tracker::report::course_detail;
use grade_tracker::{Result, TrackerError};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) -> Result<()> {
    match subcommand {
        CourseSubcommand::Add {
            id,
            code,
            name,
            description,
            credits,
            max_percentage,
            start,
            end,
        } => {
            let mut course = Course::new(name, code, description, id, credits, max_percentage);
            if let (Some(start), Some(end)) = (start, end) {
                if end < start {
                    return Err(TrackerError::InvalidState(format!(
                        "course end date {end} is before its start date {start}"
                    )));
                }
                course.set_dates(start, end);
            }

            let mut roster = load_roster(config)?;
            let label = format!("{} - {}", course.code, course.name);
            roster.add_course(course)?;
            save_roster(&mut roster, config)?;
            println!("✓ Added course {label}");
        }
        CourseSubcommand::List => print!("{}", render_list(&load_roster(config)?)),
        CourseSubcommand::Remove { id, cascade } => {
            let mut roster = load_roster(config)?;
            let course = if cascade {
                roster.remove_course_cascade(id)?
            } else {
                roster.remove_course(id)?
            };
            save_roster(&mut roster, config)?;
            println!("✓ Removed course {} - {}", course.code, course.name);
        }
        CourseSubcommand::Show { code } => {
            let roster = load_roster(config)?;
            let course = roster
                .find_course_by_code(&code)
                .ok_or(TrackerError::CourseCodeNotFound(code))?;
            print!("{}", course_detail(course));
        }
    }
    Ok(())
}

/// Enroll a student in the course with the given code
///
/// # Errors
/// Unknown student or course code, or persistence failures
pub fn enroll(student_id: StudentId, code: &str, config: &Config) -> Result<()> {
    let mut roster = load_roster(config)?;
    let course_id = course_id_for(&roster, code)?;
    if roster.enroll(student_id, course_id)? {
        save_roster(&mut roster, config)?;
        println!("✓ Enrolled student {student_id} in {code}");
    } else {
        println!("✓ Student {student_id} is already enrolled in {code}");
    }
    Ok(())
}

/// Drop a student from the course with the given code
///
/// # Errors
/// Unknown student or course code, or persistence failures
pub fn drop_enrollment(student_id: StudentId, code: &str, config: &Config) -> Result<()> {
    let mut roster = load_roster(config)?;
    let course_id = course_id_for(&roster, code)?;
    if roster.drop_enrollment(student_id, course_id)? {
        save_roster(&mut roster, config)?;
        println!("✓ Dropped student {student_id} from {code}");
    } else {
        println!("✓ Student {student_id} was not enrolled in {code}");
    }
    Ok(())
}

fn render_list(roster: &Roster) -> String {
    if roster.courses().is_empty() {
        return "No courses.\n".to_string();
    }

    let mut output = String::new();
    for course in roster.courses() {
        output.push_str(&format!(
            "{:>6}  {:<10} {}  ({} credits, {} enrolled)\n",
            course.course_id,
            course.code,
            course.name,
            course.credits,
            course.enrolled_student_ids().len()
        ));
    }
    output
}
