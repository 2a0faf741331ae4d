//! JSON snapshot persistence for the roster
//!
//! A snapshot is a document with two arrays, `students` and `courses`. Course
//! records carry `studentGrades` positionally aligned with `enrolledStudentsID`,
//! where `null` marks an enrolled student without a grade. Student records list
//! the ids of their courses in `enrolledCourses`; ids that resolve to no course
//! are dropped on load.
//!
//! When grades were recorded in a different order than students enrolled, the
//! course record also carries `gradeOrder`, the graded student ids in recording
//! order. Loading replays grades in that order.

use crate::core::error::{Result, TrackerError};
use crate::core::models::{Course, CourseId, Roster, Student, StudentId};
use chrono::NaiveDate;
use logger::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Indentation used when writing snapshots
const INDENT: &[u8] = b"    ";

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDocument {
    students: Vec<StudentRecord>,
    courses: Vec<CourseRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StudentRecord {
    name: String,
    #[serde(rename = "studentID")]
    student_id: StudentId,
    #[serde(rename = "enrolledCourses", default)]
    enrolled_courses: Vec<CourseId>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CourseRecord {
    #[serde(rename = "courseCode")]
    code: String,
    #[serde(rename = "courseName")]
    name: String,
    #[serde(rename = "courseDescription")]
    description: String,
    #[serde(rename = "courseID")]
    course_id: CourseId,
    credits: u32,
    #[serde(rename = "percentageGrade")]
    max_percentage: f64,
    #[serde(rename = "enrolledStudentsID", default)]
    enrolled_students: Vec<StudentId>,
    /// Integers and floats both deserialize into `f64`; other value types are rejected
    #[serde(rename = "studentGrades", default)]
    student_grades: Vec<Option<f64>>,
    /// Graded student ids in recording order; omitted when it matches enrollment order
    #[serde(rename = "gradeOrder", default, skip_serializing_if = "Vec::is_empty")]
    grade_order: Vec<StudentId>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            student_id: student.student_id,
            enrolled_courses: student.enrolled_course_ids().to_vec(),
        }
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        let enrolled_students = course.enrolled_student_ids().to_vec();
        let student_grades = enrolled_students
            .iter()
            .map(|&student_id| course.grade(student_id))
            .collect();

        let recorded = course.graded_student_ids();
        let enrollment_order = enrolled_students
            .iter()
            .copied()
            .filter(|&id| course.grade(id).is_some());
        let grade_order = if recorded.iter().copied().eq(enrollment_order) {
            Vec::new()
        } else {
            recorded
        };

        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            description: course.description.clone(),
            course_id: course.course_id,
            credits: course.credits,
            max_percentage: course.max_percentage,
            enrolled_students,
            student_grades,
            grade_order,
            start_date: course.start_date,
            end_date: course.end_date,
        }
    }
}

impl CourseRecord {
    fn into_course(self) -> Result<Course> {
        let mut course = Course::new(
            self.name,
            self.code,
            self.description,
            self.course_id,
            self.credits,
            self.max_percentage,
        );
        course.start_date = self.start_date;
        course.end_date = self.end_date;

        if self.student_grades.len() > self.enrolled_students.len() {
            warn!(
                "Course {}: discarding {} grade(s) with no matching enrolled student",
                course.code,
                self.student_grades.len() - self.enrolled_students.len()
            );
        }

        let mut aligned: Vec<(StudentId, f64)> = Vec::new();
        let mut grades = self.student_grades.into_iter();
        for student_id in self.enrolled_students {
            course.enroll(student_id);
            if let Some(Some(grade)) = grades.next() {
                aligned.push((student_id, grade));
            }
        }

        // Replay in recording order first, then any graded student it does not name
        for student_id in self.grade_order {
            if course.grade(student_id).is_some() {
                continue;
            }
            if let Some(&(_, grade)) = aligned.iter().find(|&&(id, _)| id == student_id) {
                course.add_grade(student_id, grade)?;
            } else {
                debug!(
                    "Course {}: gradeOrder names ungraded student {student_id}; skipping",
                    course.code
                );
            }
        }
        for (student_id, grade) in aligned {
            if course.grade(student_id).is_none() {
                course.add_grade(student_id, grade)?;
            }
        }

        debug!(
            "Loaded course {} with {} enrolled and {} graded",
            course.code,
            course.enrolled_student_ids().len(),
            course.graded_count()
        );
        Ok(course)
    }
}

impl SnapshotDocument {
    fn from_roster(roster: &Roster) -> Self {
        Self {
            students: roster.students().iter().map(StudentRecord::from).collect(),
            courses: roster.courses().iter().map(CourseRecord::from).collect(),
        }
    }

    /// Rebuild the roster: courses first so students can be linked against them
    fn into_roster(self) -> Result<Roster> {
        let mut courses = Vec::with_capacity(self.courses.len());
        for record in self.courses {
            let course = record.into_course()?;
            if courses.iter().any(|c: &Course| c.course_id == course.course_id) {
                warn!("Snapshot lists course id {} more than once", course.course_id);
            }
            courses.push(course);
        }

        let mut students = Vec::with_capacity(self.students.len());
        for record in self.students {
            let mut student = Student::new(record.name, record.student_id);
            for course_id in record.enrolled_courses {
                match courses.iter_mut().find(|c| c.course_id == course_id) {
                    Some(course) => {
                        student.add_course(course_id);
                        course.enroll(student.student_id);
                        debug!(
                            "Linked student {} to course {}",
                            student.student_id, course.code
                        );
                    }
                    None => debug!(
                        "Student {} references unknown course id {course_id}; skipping",
                        student.student_id
                    ),
                }
            }
            if students
                .iter()
                .any(|s: &Student| s.student_id == student.student_id)
            {
                warn!(
                    "Snapshot lists student id {} more than once",
                    student.student_id
                );
            }
            students.push(student);
        }

        Ok(Roster::from_parts(students, courses))
    }
}

/// Encode the roster as a pretty-printed JSON snapshot
///
/// # Errors
/// [`TrackerError::Encode`] if serialization fails
pub fn to_json(roster: &Roster) -> Result<String> {
    let document = SnapshotDocument::from_roster(roster);

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| TrackerError::Encode(e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| TrackerError::Encode(e.to_string()))
}

/// Decode a JSON snapshot into a roster, re-linking students to courses by id
///
/// # Errors
/// [`TrackerError::MalformedDocument`] if the text is not valid JSON, lacks the
/// `students` or `courses` key, or holds a grade that is not a number
pub fn from_json(text: &str) -> Result<Roster> {
    let document: SnapshotDocument =
        serde_json::from_str(text).map_err(|e| TrackerError::MalformedDocument(e.to_string()))?;
    document.into_roster()
}

/// Write a snapshot of the roster to `path`
///
/// The snapshot is written to a sibling temporary file first and then renamed
/// over `path`, so a failed write never leaves a truncated snapshot behind.
///
/// # Errors
/// - [`TrackerError::FileAccess`] if the file cannot be written
/// - [`TrackerError::Encode`] if serialization fails
pub fn save(roster: &Roster, path: &Path) -> Result<()> {
    let json = to_json(roster)?;
    let staging = staging_path(path);

    if let Err(source) = fs::write(&staging, json) {
        let _ = fs::remove_file(&staging);
        return Err(TrackerError::file_access(path, source));
    }
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(TrackerError::file_access(path, source));
    }

    info!(
        "Saved {} student(s) and {} course(s) to {}",
        roster.students().len(),
        roster.courses().len(),
        path.display()
    );
    Ok(())
}

/// Read a snapshot from `path`
///
/// # Errors
/// - [`TrackerError::FileAccess`] if the file cannot be read
/// - [`TrackerError::MalformedDocument`] if its contents are not a valid snapshot
pub fn load(path: &Path) -> Result<Roster> {
    let text = fs::read_to_string(path).map_err(|source| TrackerError::file_access(path, source))?;
    let roster = from_json(&text)?;

    info!(
        "Loaded {} student(s) and {} course(s) from {}",
        roster.students().len(),
        roster.courses().len(),
        path.display()
    );
    Ok(roster)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("snapshot"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
