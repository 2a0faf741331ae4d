//! Grade scale, descriptive statistics, and GPA weighting

pub mod gpa;
pub mod scale;
pub mod stats;

pub use gpa::calculate_gpa;
pub use scale::{
    letter_to_points, percentage_to_letter, percentage_to_points, points_for_label, LetterGrade,
};
