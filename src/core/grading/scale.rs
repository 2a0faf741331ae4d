//! Percentage to letter grade to grade point conversion

use std::fmt;
use std::str::FromStr;

/// Letter grade used between a percentage score and its grade-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterGrade {
    /// A+ (90 and above)
    APlus,
    /// A (85 to below 90)
    A,
    /// A- (80 to below 85)
    AMinus,
    /// B+ (75 to below 80)
    BPlus,
    /// B (70 to below 75)
    B,
    /// C+ (65 to below 70)
    CPlus,
    /// C (60 to below 65)
    C,
    /// D+ (accepted for grade points only; no percentage band produces it)
    DPlus,
    /// D (55 to below 60)
    D,
    /// E (50 to below 55)
    E,
    /// F (below 50)
    F,
}

/// Lower bound (inclusive) of each percentage band, highest first.
/// Anything below the last bound is an F.
const PERCENTAGE_BANDS: [(f64, LetterGrade); 9] = [
    (90.0, LetterGrade::APlus),
    (85.0, LetterGrade::A),
    (80.0, LetterGrade::AMinus),
    (75.0, LetterGrade::BPlus),
    (70.0, LetterGrade::B),
    (65.0, LetterGrade::CPlus),
    (60.0, LetterGrade::C),
    (55.0, LetterGrade::D),
    (50.0, LetterGrade::E),
];

impl LetterGrade {
    /// Every letter grade, best first
    pub const ALL: [Self; 11] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::DPlus,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// The conventional label (e.g., "A+", "B")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Grade points on the 0.0 - 4.0 scale
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus => 4.0,
            Self::A => 3.7,
            Self::AMinus => 3.3,
            Self::BPlus => 3.0,
            Self::B => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::DPlus => 1.7,
            Self::D => 1.3,
            Self::E => 1.0,
            Self::F => 0.0,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|letter| letter.as_str() == s)
            .ok_or_else(|| format!("Unknown letter grade: '{s}'"))
    }
}

/// Map a percentage score to its letter grade.
///
/// Bands are inclusive at the bottom: 90 is an A+, 89.99 is an A.
/// A NaN percentage falls through every band and maps to F.
#[must_use]
pub fn percentage_to_letter(percentage: f64) -> LetterGrade {
    PERCENTAGE_BANDS
        .iter()
        .find(|(lower, _)| percentage >= *lower)
        .map_or(LetterGrade::F, |&(_, letter)| letter)
}

/// Grade points for a letter grade
#[must_use]
pub const fn letter_to_points(letter: LetterGrade) -> f64 {
    letter.points()
}

/// Grade points for a letter label; unrecognized labels are worth 0.0
#[must_use]
pub fn points_for_label(label: &str) -> f64 {
    label.parse::<LetterGrade>().map_or(0.0, LetterGrade::points)
}

/// Grade points earned by a percentage score
#[must_use]
pub fn percentage_to_points(percentage: f64) -> f64 {
    percentage_to_letter(percentage).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (100.0, LetterGrade::APlus),
            (90.0, LetterGrade::APlus),
            (89.99, LetterGrade::A),
            (85.0, LetterGrade::A),
            (84.99, LetterGrade::AMinus),
            (80.0, LetterGrade::AMinus),
            (79.99, LetterGrade::BPlus),
            (75.0, LetterGrade::BPlus),
            (74.99, LetterGrade::B),
            (70.0, LetterGrade::B),
            (69.99, LetterGrade::CPlus),
            (65.0, LetterGrade::CPlus),
            (64.99, LetterGrade::C),
            (60.0, LetterGrade::C),
            (59.99, LetterGrade::D),
            (55.0, LetterGrade::D),
            (54.99, LetterGrade::E),
            (50.0, LetterGrade::E),
            (49.99, LetterGrade::F),
            (0.0, LetterGrade::F),
            (-5.0, LetterGrade::F),
        ];

        for (percentage, expected) in cases {
            assert_eq!(
                percentage_to_letter(percentage),
                expected,
                "percentage {percentage}"
            );
        }
    }

    #[test]
    fn test_scale_never_produces_d_plus() {
        let produced: Vec<LetterGrade> = (0..=1000)
            .map(|tenths| percentage_to_letter(f64::from(tenths) / 10.0))
            .collect();
        assert!(!produced.contains(&LetterGrade::DPlus));
    }

    #[test]
    fn test_points_table() {
        let expected = [
            ("A+", 4.0),
            ("A", 3.7),
            ("A-", 3.3),
            ("B+", 3.0),
            ("B", 2.7),
            ("C+", 2.3),
            ("C", 2.0),
            ("D+", 1.7),
            ("D", 1.3),
            ("E", 1.0),
            ("F", 0.0),
        ];

        for (label, points) in expected {
            assert!((points_for_label(label) - points).abs() < f64::EPSILON, "{label}");
            let letter: LetterGrade = label.parse().unwrap();
            assert!((letter_to_points(letter) - points).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_unknown_label_is_worth_nothing() {
        assert!(points_for_label("Z").abs() < f64::EPSILON);
        assert!(points_for_label("").abs() < f64::EPSILON);
        assert!(points_for_label("a+").abs() < f64::EPSILON);
        assert!("B-".parse::<LetterGrade>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(LetterGrade::AMinus.to_string(), "A-");
        assert_eq!(LetterGrade::DPlus.to_string(), "D+");
    }

    #[test]
    fn test_percentage_to_points() {
        assert!((percentage_to_points(92.0) - 4.0).abs() < f64::EPSILON);
        assert!((percentage_to_points(81.0) - 3.3).abs() < f64::EPSILON);
        assert!(percentage_to_points(12.0).abs() < f64::EPSILON);
    }
}
