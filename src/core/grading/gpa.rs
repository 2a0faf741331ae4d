//! Credit-weighted GPA

use crate::core::error::{Result, TrackerError};
use crate::core::models::Course;

/// Compute the credit-weighted GPA over a set of courses.
///
/// Each course contributes its average grade points (over all grades recorded
/// in that course) multiplied by its credits; the sum is divided by the total
/// credits.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidState`] when there are no courses or the
/// credits sum to zero, since the GPA is undefined in both cases.
pub fn calculate_gpa<'a, I>(courses: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut weighted_points = 0.0;
    let mut total_credits: u64 = 0;
    let mut course_count = 0_usize;

    for course in courses {
        weighted_points += course.average_grade_points() * f64::from(course.credits);
        total_credits += u64::from(course.credits);
        course_count += 1;
    }

    if course_count == 0 {
        return Err(TrackerError::InvalidState(
            "GPA is undefined without any courses".to_string(),
        ));
    }
    if total_credits == 0 {
        return Err(TrackerError::InvalidState(format!(
            "GPA is undefined: {course_count} course(s) carry zero total credits"
        )));
    }

    #[allow(clippy::cast_precision_loss)]
    Ok(weighted_points / total_credits as f64)
}
