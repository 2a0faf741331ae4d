//! Roster model - the in-memory aggregate of every student and course

use super::{Course, CourseId, Student, StudentId};
use crate::core::error::{Result, TrackerError};
use crate::core::events::EventLog;
use crate::core::grading::calculate_gpa;

/// All students and courses currently loaded, plus the log of changes made to them
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    courses: Vec<Course>,
    events: EventLog,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
            events: EventLog::new(),
        }
    }

    /// Build a roster from already-linked collections without recording events
    #[must_use]
    pub(crate) const fn from_parts(students: Vec<Student>, courses: Vec<Course>) -> Self {
        Self {
            students,
            courses,
            events: EventLog::new(),
        }
    }

    /// All students in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Changes recorded since the roster was created or last drained
    #[must_use]
    pub const fn events(&self) -> &EventLog {
        &self.events
    }

    /// Mutable access to the change log (e.g., to drain it)
    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }

    /// Add a student
    ///
    /// # Errors
    /// [`TrackerError::DuplicateStudent`] if a student with the same id exists
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.find_student(student.student_id).is_some() {
            return Err(TrackerError::DuplicateStudent(student.student_id));
        }
        self.events.record(format!(
            "Added student {} ({})",
            student.name, student.student_id
        ));
        self.students.push(student);
        Ok(())
    }

    /// Add a course
    ///
    /// # Errors
    /// - [`TrackerError::DuplicateCourse`] if a course with the same id exists
    /// - [`TrackerError::DuplicateCourseCode`] if a course with the same code exists
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.find_course(course.course_id).is_some() {
            return Err(TrackerError::DuplicateCourse(course.course_id));
        }
        if self.find_course_by_code(&course.code).is_some() {
            return Err(TrackerError::DuplicateCourseCode(course.code));
        }
        self.events.record(format!(
            "Added course {} {} ({})",
            course.code, course.name, course.course_id
        ));
        self.courses.push(course);
        Ok(())
    }

    /// Find a student by id
    #[must_use]
    pub fn find_student(&self, student_id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Find a student by id for modification
    pub fn find_student_mut(&mut self, student_id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.student_id == student_id)
    }

    /// Find a course by id
    #[must_use]
    pub fn find_course(&self, course_id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    /// Find a course by id for modification
    pub fn find_course_mut(&mut self, course_id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.course_id == course_id)
    }

    /// Find a course by its code (exact match)
    #[must_use]
    pub fn find_course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Find a course by its code for modification
    pub fn find_course_by_code_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.code == code)
    }

    /// Enroll a student in a course, linking both sides
    ///
    /// Enrolling twice is harmless; neither side gains a duplicate.
    ///
    /// # Returns
    /// `true` if either side gained a new link
    ///
    /// # Errors
    /// [`TrackerError::StudentNotFound`] or [`TrackerError::CourseNotFound`]
    pub fn enroll(&mut self, student_id: StudentId, course_id: CourseId) -> Result<bool> {
        let (student_index, course_index) = self.locate(student_id, course_id)?;

        let student = &mut self.students[student_index];
        let course = &mut self.courses[course_index];
        let student_changed = student.add_course(course_id);
        let course_changed = course.enroll(student_id);

        if student_changed || course_changed {
            self.events.record(format!(
                "Enrolled student {} ({student_id}) in {}",
                student.name, course.code
            ));
        }
        Ok(student_changed || course_changed)
    }

    /// Unlink a student from a course; any grade they had there is discarded
    ///
    /// # Returns
    /// `true` if either side had the link
    ///
    /// # Errors
    /// [`TrackerError::StudentNotFound`] or [`TrackerError::CourseNotFound`]
    pub fn drop_enrollment(&mut self, student_id: StudentId, course_id: CourseId) -> Result<bool> {
        let (student_index, course_index) = self.locate(student_id, course_id)?;

        let student = &mut self.students[student_index];
        let course = &mut self.courses[course_index];
        let student_changed = student.drop_course(course_id);
        let course_changed = course.remove(student_id);

        if student_changed || course_changed {
            self.events.record(format!(
                "Dropped student {} ({student_id}) from {}",
                student.name, course.code
            ));
        }
        Ok(student_changed || course_changed)
    }

    /// Record a grade for a student in a course
    ///
    /// # Returns
    /// The grade that was replaced, if any
    ///
    /// # Errors
    /// - [`TrackerError::CourseNotFound`] if the course does not exist
    /// - Any error from [`Course::add_grade`], notably [`TrackerError::NotEnrolled`]
    pub fn record_grade(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
        grade: f64,
    ) -> Result<Option<f64>> {
        let course = self
            .find_course_mut(course_id)
            .ok_or(TrackerError::CourseNotFound(course_id))?;
        let previous = course.add_grade(student_id, grade)?;
        let code = course.code.clone();

        self.events.record(match previous {
            Some(old) => {
                format!("Changed grade of student {student_id} in {code} from {old} to {grade}")
            }
            None => format!("Recorded grade {grade} for student {student_id} in {code}"),
        });
        Ok(previous)
    }

    /// Clear the grade of a student in a course
    ///
    /// # Returns
    /// The grade that was cleared, if any
    ///
    /// # Errors
    /// - [`TrackerError::CourseNotFound`] if the course does not exist
    /// - [`TrackerError::NotEnrolled`] if the student is not enrolled in it
    pub fn clear_grade(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Option<f64>> {
        let course = self
            .find_course_mut(course_id)
            .ok_or(TrackerError::CourseNotFound(course_id))?;
        let cleared = course.remove_grade(student_id)?;
        let code = course.code.clone();

        if cleared.is_some() {
            self.events
                .record(format!("Cleared grade of student {student_id} in {code}"));
        }
        Ok(cleared)
    }

    /// Remove a student without touching course rosters
    ///
    /// Courses keep referencing the removed id; use
    /// [`remove_student_cascade`](Self::remove_student_cascade) to clean them too.
    ///
    /// # Errors
    /// [`TrackerError::StudentNotFound`] if no such student exists
    pub fn remove_student(&mut self, student_id: StudentId) -> Result<Student> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or(TrackerError::StudentNotFound(student_id))?;
        let student = self.students.remove(index);
        self.events.record(format!(
            "Removed student {} ({student_id})",
            student.name
        ));
        Ok(student)
    }

    /// Remove a student and drop them (and their grades) from every course
    ///
    /// # Errors
    /// [`TrackerError::StudentNotFound`] if no such student exists
    pub fn remove_student_cascade(&mut self, student_id: StudentId) -> Result<Student> {
        let student = self.remove_student(student_id)?;
        for course in &mut self.courses {
            course.remove(student_id);
        }
        Ok(student)
    }

    /// Remove a course without touching student enrollments
    ///
    /// Students keep referencing the removed id; use
    /// [`remove_course_cascade`](Self::remove_course_cascade) to clean them too.
    ///
    /// # Errors
    /// [`TrackerError::CourseNotFound`] if no such course exists
    pub fn remove_course(&mut self, course_id: CourseId) -> Result<Course> {
        let index = self
            .courses
            .iter()
            .position(|c| c.course_id == course_id)
            .ok_or(TrackerError::CourseNotFound(course_id))?;
        let course = self.courses.remove(index);
        self.events
            .record(format!("Removed course {} ({course_id})", course.code));
        Ok(course)
    }

    /// Remove a course and drop it from every student's enrollments
    ///
    /// # Errors
    /// [`TrackerError::CourseNotFound`] if no such course exists
    pub fn remove_course_cascade(&mut self, course_id: CourseId) -> Result<Course> {
        let course = self.remove_course(course_id)?;
        for student in &mut self.students {
            student.drop_course(course_id);
        }
        Ok(course)
    }

    /// Courses a student is enrolled in; ids that resolve to no course are skipped
    ///
    /// # Errors
    /// [`TrackerError::StudentNotFound`] if no such student exists
    pub fn courses_for_student(&self, student_id: StudentId) -> Result<Vec<&Course>> {
        let student = self
            .find_student(student_id)
            .ok_or(TrackerError::StudentNotFound(student_id))?;
        Ok(student
            .enrolled_course_ids()
            .iter()
            .filter_map(|&course_id| self.find_course(course_id))
            .collect())
    }

    /// Credit-weighted GPA over the courses a student is enrolled in
    ///
    /// # Errors
    /// - [`TrackerError::StudentNotFound`] if no such student exists
    /// - [`TrackerError::InvalidState`] if the student has no credits to weigh
    pub fn student_gpa(&self, student_id: StudentId) -> Result<f64> {
        calculate_gpa(self.courses_for_student(student_id)?)
    }

    /// Student enrollments whose course id resolves to no course, as `(student_id, course_id)`
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(StudentId, CourseId)> {
        let mut dangling = Vec::new();
        for student in &self.students {
            for &course_id in student.enrolled_course_ids() {
                if self.find_course(course_id).is_none() {
                    dangling.push((student.student_id, course_id));
                }
            }
        }
        dangling
    }

    fn locate(&self, student_id: StudentId, course_id: CourseId) -> Result<(usize, usize)> {
        let student_index = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or(TrackerError::StudentNotFound(student_id))?;
        let course_index = self
            .courses
            .iter()
            .position(|c| c.course_id == course_id)
            .ok_or(TrackerError::CourseNotFound(course_id))?;
        Ok((student_index, course_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_student(Student::new("Alice".to_string(), 123))
            .unwrap();
        roster
            .add_student(Student::new("Bob".to_string(), 456))
            .unwrap();
        roster
            .add_course(Course::new(
                "Intro to Java".to_string(),
                "CPSC210".to_string(),
                "An introductory course.".to_string(),
                101,
                4,
                100.0,
            ))
            .unwrap();
        roster
            .add_course(Course::new(
                "Linear Algebra".to_string(),
                "MATH221".to_string(),
                String::new(),
                102,
                3,
                100.0,
            ))
            .unwrap();
        roster
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut roster = sample_roster();

        assert!(matches!(
            roster.add_student(Student::new("Alice Again".to_string(), 123)),
            Err(TrackerError::DuplicateStudent(123))
        ));
        assert!(matches!(
            roster.add_course(Course::new(
                "Other".to_string(),
                "OTHER".to_string(),
                String::new(),
                101,
                3,
                100.0
            )),
            Err(TrackerError::DuplicateCourse(101))
        ));
        assert!(matches!(
            roster.add_course(Course::new(
                "Other".to_string(),
                "MATH221".to_string(),
                String::new(),
                999,
                3,
                100.0
            )),
            Err(TrackerError::DuplicateCourseCode(_))
        ));
        assert_eq!(roster.students().len(), 2);
        assert_eq!(roster.courses().len(), 2);
    }

    #[test]
    fn test_lookups() {
        let roster = sample_roster();

        assert_eq!(roster.find_student(456).unwrap().name, "Bob");
        assert!(roster.find_student(1).is_none());
        assert_eq!(roster.find_course(102).unwrap().code, "MATH221");
        assert_eq!(roster.find_course_by_code("CPSC210").unwrap().course_id, 101);
        assert!(roster.find_course_by_code("cpsc210").is_none());
    }

    #[test]
    fn test_enroll_links_both_sides_once() {
        let mut roster = sample_roster();

        assert!(roster.enroll(123, 101).unwrap());
        assert!(!roster.enroll(123, 101).unwrap());

        assert_eq!(roster.find_student(123).unwrap().enrolled_course_ids(), &[101]);
        assert_eq!(roster.find_course(101).unwrap().enrolled_student_ids(), &[123]);
    }

    #[test]
    fn test_enroll_unknown_ids() {
        let mut roster = sample_roster();

        assert!(matches!(
            roster.enroll(999, 101),
            Err(TrackerError::StudentNotFound(999))
        ));
        assert!(matches!(
            roster.enroll(123, 999),
            Err(TrackerError::CourseNotFound(999))
        ));
    }

    #[test]
    fn test_drop_enrollment_discards_grade() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();
        roster.record_grade(123, 101, 91.0).unwrap();

        assert!(roster.drop_enrollment(123, 101).unwrap());
        assert!(roster.find_student(123).unwrap().enrolled_course_ids().is_empty());
        let course = roster.find_course(101).unwrap();
        assert!(!course.is_enrolled(123));
        assert_eq!(course.grade(123), None);
    }

    #[test]
    fn test_record_grade_for_unenrolled_student() {
        let mut roster = sample_roster();

        assert!(matches!(
            roster.record_grade(123, 101, 80.0),
            Err(TrackerError::NotEnrolled { .. })
        ));
        assert!(roster.find_course(101).unwrap().recorded_grades().is_empty());
    }

    #[test]
    fn test_record_and_clear_grade() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();

        assert_eq!(roster.record_grade(123, 101, 70.0).unwrap(), None);
        assert_eq!(roster.record_grade(123, 101, 85.0).unwrap(), Some(70.0));
        assert_eq!(roster.clear_grade(123, 101).unwrap(), Some(85.0));
        assert_eq!(roster.find_course(101).unwrap().grade(123), None);
    }

    #[test]
    fn test_remove_student_does_not_cascade() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();

        let removed = roster.remove_student(123).unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(roster.find_student(123).is_none());
        assert!(roster.find_course(101).unwrap().is_enrolled(123));
    }

    #[test]
    fn test_remove_student_cascade() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();
        roster.enroll(123, 102).unwrap();
        roster.record_grade(123, 102, 64.0).unwrap();

        roster.remove_student_cascade(123).unwrap();
        for course in roster.courses() {
            assert!(!course.is_enrolled(123));
            assert!(course.recorded_grades().is_empty());
        }
    }

    #[test]
    fn test_remove_course_leaves_dangling_reference() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();

        roster.remove_course(101).unwrap();
        assert_eq!(roster.find_student(123).unwrap().enrolled_course_ids(), &[101]);
        assert_eq!(roster.dangling_references(), vec![(123, 101)]);
        assert!(roster.courses_for_student(123).unwrap().is_empty());
    }

    #[test]
    fn test_remove_course_cascade() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();
        roster.enroll(456, 101).unwrap();

        let removed = roster.remove_course_cascade(101).unwrap();
        assert_eq!(removed.code, "CPSC210");
        assert!(roster.dangling_references().is_empty());
        assert!(roster.students().iter().all(|s| !s.is_enrolled_in(101)));
        assert!(matches!(
            roster.remove_course(101),
            Err(TrackerError::CourseNotFound(101))
        ));
    }

    #[test]
    fn test_student_gpa() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();
        roster.enroll(456, 101).unwrap();
        roster.record_grade(123, 101, 90.0).unwrap();
        roster.record_grade(456, 101, 80.0).unwrap();

        let gpa = roster.student_gpa(123).unwrap();
        assert!((gpa - 3.65).abs() < 1e-9);

        // Bob has one course, so his GPA matches the course average too
        assert!((roster.student_gpa(456).unwrap() - gpa).abs() < 1e-9);
    }

    #[test]
    fn test_student_gpa_without_courses() {
        let roster = sample_roster();
        assert!(matches!(
            roster.student_gpa(123),
            Err(TrackerError::InvalidState(_))
        ));
        assert!(matches!(
            roster.student_gpa(1),
            Err(TrackerError::StudentNotFound(1))
        ));
    }

    #[test]
    fn test_changes_are_logged() {
        let mut roster = sample_roster();
        let before = roster.events().len();

        roster.enroll(123, 101).unwrap();
        roster.enroll(123, 101).unwrap();
        roster.record_grade(123, 101, 77.0).unwrap();

        let events = roster.events_mut().take();
        assert_eq!(events.len(), before + 2);
        assert!(events
            .iter()
            .any(|e| e.description.contains("Enrolled student Alice (123) in CPSC210")));
        assert!(roster.events().is_empty());
    }

    #[test]
    fn test_only_actual_changes_are_logged() {
        let mut roster = sample_roster();
        roster.enroll(123, 101).unwrap();
        roster.events_mut().clear();

        // Nothing to clear, nothing to drop
        assert_eq!(roster.clear_grade(123, 101).unwrap(), None);
        assert!(!roster.drop_enrollment(456, 101).unwrap());
        assert!(roster.events().is_empty());

        roster.record_grade(123, 101, 64.0).unwrap();
        assert_eq!(roster.clear_grade(123, 101).unwrap(), Some(64.0));
        assert_eq!(roster.events().len(), 2);
    }
}
