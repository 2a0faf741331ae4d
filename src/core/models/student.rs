//! Student model

use crate::core::models::CourseId;

/// Unique student identifier
pub type StudentId = u32;

/// Represents a student and the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Student name
    pub name: String,

    /// Unique identifier
    pub student_id: StudentId,

    /// Enrolled course ids in enrollment order
    enrolled_course_ids: Vec<CourseId>,
}

impl Student {
    /// Create a new student with no enrollments
    #[must_use]
    pub const fn new(name: String, student_id: StudentId) -> Self {
        Self {
            name,
            student_id,
            enrolled_course_ids: Vec::new(),
        }
    }

    /// Enrolled course ids in enrollment order
    #[must_use]
    pub fn enrolled_course_ids(&self) -> &[CourseId] {
        &self.enrolled_course_ids
    }

    /// Whether the student is enrolled in the course
    #[must_use]
    pub fn is_enrolled_in(&self, course_id: CourseId) -> bool {
        self.enrolled_course_ids.contains(&course_id)
    }

    /// Add a course by id
    ///
    /// # Returns
    /// `true` if the course was added, `false` if it was already listed
    pub fn add_course(&mut self, course_id: CourseId) -> bool {
        if self.is_enrolled_in(course_id) {
            return false;
        }
        self.enrolled_course_ids.push(course_id);
        true
    }

    /// Drop the first occurrence of a course
    ///
    /// # Returns
    /// `true` if the course was listed
    pub fn drop_course(&mut self, course_id: CourseId) -> bool {
        match self.enrolled_course_ids.iter().position(|&id| id == course_id) {
            Some(index) => {
                self.enrolled_course_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every course
    pub fn clear_courses(&mut self) {
        self.enrolled_course_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new("Alice".to_string(), 123);

        assert_eq!(student.name, "Alice");
        assert_eq!(student.student_id, 123);
        assert!(student.enrolled_course_ids().is_empty());
    }

    #[test]
    fn test_add_course() {
        let mut student = Student::new("Alice".to_string(), 123);

        assert!(student.add_course(101));
        assert!(student.add_course(102));
        assert_eq!(student.enrolled_course_ids(), &[101, 102]);

        // Adding a duplicate should not duplicate
        assert!(!student.add_course(101));
        assert_eq!(student.enrolled_course_ids().len(), 2);
    }

    #[test]
    fn test_drop_course() {
        let mut student = Student::new("Bob".to_string(), 456);
        student.add_course(101);
        student.add_course(102);

        assert!(student.drop_course(101));
        assert_eq!(student.enrolled_course_ids(), &[102]);
        assert!(!student.drop_course(101));
        assert!(!student.is_enrolled_in(101));
        assert!(student.is_enrolled_in(102));
    }

    #[test]
    fn test_clear_courses() {
        let mut student = Student::new("Cara".to_string(), 789);
        student.add_course(1);
        student.add_course(2);

        student.clear_courses();
        assert!(student.enrolled_course_ids().is_empty());
    }
}
