//! Grade command handlers

use super::{course_id_for, load_roster, save_roster};
use crate::args::GradeSubcommand;
use grade_tracker::config::Config;
use grade_tracker::grading::percentage_to_letter;
use grade_tracker::Result;

/// Dispatch grade subcommands
pub fn run(subcommand: GradeSubcommand, config: &Config) -> Result<()> {
    let mut roster = load_roster(config)?;

    match subcommand {
        GradeSubcommand::Set {
            student,
            course,
            value,
        } => {
            let course_id = course_id_for(&roster, &course)?;
            let previous = roster.record_grade(student, course_id, value)?;
            save_roster(&mut roster, config)?;
            match previous {
                Some(old) => println!(
                    "✓ Updated {course} grade for {student}: {old:.2} -> {value:.2} ({})",
                    percentage_to_letter(value)
                ),
                None => println!(
                    "✓ Recorded {course} grade for {student}: {value:.2} ({})",
                    percentage_to_letter(value)
                ),
            }
        }
        GradeSubcommand::Clear { student, course } => {
            let course_id = course_id_for(&roster, &course)?;
            match roster.clear_grade(student, course_id)? {
                Some(old) => {
                    save_roster(&mut roster, config)?;
                    println!("✓ Cleared {course} grade {old:.2} for {student}");
                }
                None => println!("✓ Student {student} has no grade in {course}"),
            }
        }
    }
    Ok(())
}
