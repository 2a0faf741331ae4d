//! Student command handlers

use super::{load_roster, save_roster};
use crate::args::StudentSubcommand;
use grade_tracker::config::Config;
use grade_tracker::models::{Roster, Student, StudentId};
use grade_tracker::Result;

/// Dispatch student subcommands
pub fn run(subcommand: StudentSubcommand, config: &Config) -> Result<()> {
    match subcommand {
        StudentSubcommand::Add { id, name } => add(id, name, config),
        StudentSubcommand::List => {
            print!("{}", render_list(&load_roster(config)?));
            Ok(())
        }
        StudentSubcommand::Remove { id, cascade } => remove(id, cascade, config),
    }
}

fn add(id: StudentId, name: String, config: &Config) -> Result<()> {
    let mut roster = load_roster(config)?;
    roster.add_student(Student::new(name.clone(), id))?;
    save_roster(&mut roster, config)?;
    println!("✓ Added student {name} ({id})");
    Ok(())
}

fn remove(id: StudentId, cascade: bool, config: &Config) -> Result<()> {
    let mut roster = load_roster(config)?;
    let student = if cascade {
        roster.remove_student_cascade(id)?
    } else {
        roster.remove_student(id)?
    };
    save_roster(&mut roster, config)?;
    println!("✓ Removed student {} ({id})", student.name);
    Ok(())
}

/// One line per student: id, name, and the codes of their courses
fn render_list(roster: &Roster) -> String {
    if roster.students().is_empty() {
        return "No students.\n".to_string();
    }

    let mut output = String::new();
    for student in roster.students() {
        let codes: Vec<String> = student
            .enrolled_course_ids()
            .iter()
            .map(|&course_id| {
                roster
                    .find_course(course_id)
                    .map_or_else(|| format!("#{course_id}"), |c| c.code.clone())
            })
            .collect();
        output.push_str(&format!(
            "{:>8}  {}  [{}]\n",
            student.student_id,
            student.name,
            codes.join(", ")
        ));
    }
    output
}
