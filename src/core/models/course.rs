//! Course model

use crate::core::error::{Result, TrackerError};
use crate::core::grading::{self, stats, LetterGrade};
use crate::core::models::StudentId;
use chrono::NaiveDate;

/// Unique course identifier
pub type CourseId = u32;

/// Represents a course with its enrolled students and their recorded grades
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Course name (e.g., "Software Construction")
    pub name: String,

    /// Course code (e.g., "CPSC210")
    pub code: String,

    /// Free-form description
    pub description: String,

    /// Unique identifier
    pub course_id: CourseId,

    /// Credit weight used for GPA
    pub credits: u32,

    /// Grading ceiling for percentage scores
    pub max_percentage: f64,

    /// First day of the course, if scheduled
    pub start_date: Option<NaiveDate>,

    /// Last day of the course, if scheduled
    pub end_date: Option<NaiveDate>,

    /// Enrolled students in enrollment order, without duplicates
    enrolled_student_ids: Vec<StudentId>,

    /// Recorded grades in recording order; at most one entry per enrolled student
    grades: Vec<(StudentId, f64)>,
}

impl Course {
    /// Create a new course with no enrollments
    ///
    /// # Arguments
    /// * `name` - Full course name
    /// * `code` - Course code
    /// * `description` - Course description
    /// * `course_id` - Unique identifier
    /// * `credits` - Credit weight
    /// * `max_percentage` - Grading ceiling
    #[must_use]
    pub const fn new(
        name: String,
        code: String,
        description: String,
        course_id: CourseId,
        credits: u32,
        max_percentage: f64,
    ) -> Self {
        Self {
            name,
            code,
            description,
            course_id,
            credits,
            max_percentage,
            start_date: None,
            end_date: None,
            enrolled_student_ids: Vec::new(),
            grades: Vec::new(),
        }
    }

    /// Set the course schedule
    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start_date = Some(start);
        self.end_date = Some(end);
    }

    /// Enrolled student ids in enrollment order
    #[must_use]
    pub fn enrolled_student_ids(&self) -> &[StudentId] {
        &self.enrolled_student_ids
    }

    /// Whether the student is enrolled
    #[must_use]
    pub fn is_enrolled(&self, student_id: StudentId) -> bool {
        self.enrolled_student_ids.contains(&student_id)
    }

    /// Enroll a student
    ///
    /// # Returns
    /// `true` if the student was added, `false` if already enrolled
    pub fn enroll(&mut self, student_id: StudentId) -> bool {
        if self.is_enrolled(student_id) {
            return false;
        }
        self.enrolled_student_ids.push(student_id);
        true
    }

    /// Remove a student together with any grade recorded for them
    ///
    /// # Returns
    /// `true` if the student was enrolled
    pub fn remove(&mut self, student_id: StudentId) -> bool {
        let Some(index) = self
            .enrolled_student_ids
            .iter()
            .position(|&id| id == student_id)
        else {
            return false;
        };
        self.enrolled_student_ids.remove(index);
        self.grades.retain(|&(id, _)| id != student_id);
        true
    }

    /// Record a grade for an enrolled student, replacing any earlier grade in place
    ///
    /// # Returns
    /// The grade that was replaced, if any
    ///
    /// # Errors
    /// - [`TrackerError::NotEnrolled`] if the student is not enrolled (the course is unchanged)
    /// - [`TrackerError::InvalidState`] if the grade is NaN or infinite
    pub fn add_grade(&mut self, student_id: StudentId, grade: f64) -> Result<Option<f64>> {
        self.ensure_enrolled(student_id)?;
        if !grade.is_finite() {
            return Err(TrackerError::InvalidState(format!(
                "grade for student {student_id} must be a finite number, got {grade}"
            )));
        }

        if let Some(entry) = self.grades.iter_mut().find(|(id, _)| *id == student_id) {
            let previous = entry.1;
            entry.1 = grade;
            return Ok(Some(previous));
        }
        self.grades.push((student_id, grade));
        Ok(None)
    }

    /// Clear the grade of an enrolled student, leaving them ungraded
    ///
    /// # Returns
    /// The grade that was cleared, if the student had one
    ///
    /// # Errors
    /// [`TrackerError::NotEnrolled`] if the student is not enrolled
    pub fn remove_grade(&mut self, student_id: StudentId) -> Result<Option<f64>> {
        self.ensure_enrolled(student_id)?;
        let index = self.grades.iter().position(|&(id, _)| id == student_id);
        Ok(index.map(|i| self.grades.remove(i).1))
    }

    /// The grade recorded for a student, or `None` if ungraded
    #[must_use]
    pub fn grade(&self, student_id: StudentId) -> Option<f64> {
        self.grades
            .iter()
            .find(|&&(id, _)| id == student_id)
            .map(|&(_, grade)| grade)
    }

    /// All recorded grades in recording order
    #[must_use]
    pub fn recorded_grades(&self) -> Vec<f64> {
        self.grades.iter().map(|&(_, grade)| grade).collect()
    }

    /// Ids of graded students in recording order
    #[must_use]
    pub fn graded_student_ids(&self) -> Vec<StudentId> {
        self.grades.iter().map(|&(id, _)| id).collect()
    }

    /// Number of students with a recorded grade
    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.grades.len()
    }

    /// Mean of the recorded grades (`0.0` if none)
    #[must_use]
    pub fn average_grade(&self) -> f64 {
        stats::mean(&self.recorded_grades())
    }

    /// Median of the recorded grades (`0.0` if none)
    #[must_use]
    pub fn median_grade(&self) -> f64 {
        stats::median(&self.recorded_grades())
    }

    /// Sample standard deviation of the recorded grades (`0.0` for fewer than two)
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        stats::sample_std_dev(&self.recorded_grades())
    }

    /// Letter grade of every recorded grade, in recording order
    #[must_use]
    pub fn grade_distribution(&self) -> Vec<LetterGrade> {
        self.grades
            .iter()
            .map(|&(_, grade)| grading::percentage_to_letter(grade))
            .collect()
    }

    /// Mean grade points over the recorded grades (`0.0` if none)
    #[must_use]
    pub fn average_grade_points(&self) -> f64 {
        let points: Vec<f64> = self
            .grades
            .iter()
            .map(|&(_, grade)| grading::percentage_to_points(grade))
            .collect();
        stats::mean(&points)
    }

    /// Whether `on` falls within the course schedule (both ends inclusive)
    ///
    /// # Errors
    /// [`TrackerError::InvalidState`] unless both the start and end dates are set
    pub fn is_active(&self, on: NaiveDate) -> Result<bool> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Ok(start <= on && on <= end),
            _ => Err(TrackerError::InvalidState(format!(
                "course {} has no complete schedule (start and end dates are required)",
                self.code
            ))),
        }
    }

    fn ensure_enrolled(&self, student_id: StudentId) -> Result<()> {
        if self.is_enrolled(student_id) {
            Ok(())
        } else {
            Err(TrackerError::NotEnrolled {
                course_id: self.course_id,
                student_id,
            })
        }
    }
}
