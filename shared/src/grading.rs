//! Strength grading engine
//!
//! Maps a measured exercise value to a fitness grade using age- and
//! bodyweight-adjusted thresholds.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All grading logic operates on rows already fetched
//!    from the database, so it is unit-testable without one
//! 2. **Exact Arithmetic**: Thresholds and coefficients are SQL decimals and
//!    stay `Decimal` end to end, no float drift
//! 3. **Ordered Grades**: Beginner < Novice < Intermediate < Advanced < Elite;
//!    classification walks the ladder from the top down

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Member gender as stored in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    /// Database column value ("M" or "F")
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            other => Err(format!("Invalid gender: {}", other)),
        }
    }
}

/// Fitness grade, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

impl Grade {
    /// All grades in ascending order
    pub const ASCENDING: [Grade; 5] = [
        Grade::Beginner,
        Grade::Novice,
        Grade::Intermediate,
        Grade::Advanced,
        Grade::Elite,
    ];

    /// Human-readable label, also the value stored in physical_records.grade
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Beginner => "Beginner",
            Grade::Novice => "Novice",
            Grade::Intermediate => "Intermediate",
            Grade::Advanced => "Advanced",
            Grade::Elite => "Elite",
        }
    }

    /// The next grade up the ladder, if any
    pub fn next(&self) -> Option<Grade> {
        match self {
            Grade::Beginner => Some(Grade::Novice),
            Grade::Novice => Some(Grade::Intermediate),
            Grade::Intermediate => Some(Grade::Advanced),
            Grade::Advanced => Some(Grade::Elite),
            Grade::Elite => None,
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Grade::Beginner),
            "Novice" => Ok(Grade::Novice),
            "Intermediate" => Ok(Grade::Intermediate),
            "Advanced" => Ok(Grade::Advanced),
            "Elite" => Ok(Grade::Elite),
            other => Err(format!("Invalid grade: {}", other)),
        }
    }
}

/// Per-grade thresholds from one evaluation_standards row
///
/// Each threshold is nullable; a standard may only define the lower part of
/// the ladder for some gender/category/bodyweight combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThresholds {
    pub beginner: Option<Decimal>,
    pub novice: Option<Decimal>,
    pub intermediate: Option<Decimal>,
    pub advanced: Option<Decimal>,
    pub elite: Option<Decimal>,
}

impl GradeThresholds {
    /// Threshold for a specific grade
    pub fn get(&self, grade: Grade) -> Option<Decimal> {
        match grade {
            Grade::Beginner => self.beginner,
            Grade::Novice => self.novice,
            Grade::Intermediate => self.intermediate,
            Grade::Advanced => self.advanced,
            Grade::Elite => self.elite,
        }
    }

    /// Multiply every defined threshold by the age coefficient
    ///
    /// Products are normalized so a 2-scale threshold times a 3-scale
    /// coefficient does not serialize with five decimal places.
    pub fn scaled(&self, coefficient: Decimal) -> GradeThresholds {
        let scale = |t: Option<Decimal>| t.map(|v| (v * coefficient).normalize());
        GradeThresholds {
            beginner: scale(self.beginner),
            novice: scale(self.novice),
            intermediate: scale(self.intermediate),
            advanced: scale(self.advanced),
            elite: scale(self.elite),
        }
    }
}

/// One age_coefficients row relevant to a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientEntry {
    pub age: i32,
    pub coefficient: Decimal,
}

/// Result of grading one measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Assigned grade
    pub grade: Grade,
    /// Thresholds after age adjustment
    pub adjusted: GradeThresholds,
    /// Nearest defined threshold above the assigned grade, if any
    pub next_level_target: Option<Decimal>,
    /// Distance to the next level, >= 0, rounded to 2 decimals; 0 when no
    /// higher level is defined
    pub remaining: Decimal,
}

// ============================================================================
// Coefficient Resolution
// ============================================================================

/// Resolve the age coefficient from the nearest stored neighbors
///
/// `below` is the row with the largest age <= the query age, `above` the row
/// with the smallest age > the query age. The numerically closer age wins;
/// an equidistant tie takes the lower age. With only one side present that
/// side is used. Returns `None` when no coefficient exists at all (the
/// caller maps this to NotFound).
pub fn resolve_coefficient(
    below: Option<CoefficientEntry>,
    above: Option<CoefficientEntry>,
    age: i32,
) -> Option<Decimal> {
    match (below, above) {
        (Some(b), Some(a)) => {
            let dist_below = age - b.age;
            let dist_above = a.age - age;
            if dist_below <= dist_above {
                Some(b.coefficient)
            } else {
                Some(a.coefficient)
            }
        }
        (Some(b), None) => Some(b.coefficient),
        (None, Some(a)) => Some(a.coefficient),
        (None, None) => None,
    }
}

// ============================================================================
// Grade Assignment
// ============================================================================

/// Assign a grade by walking the ladder from Elite down to Beginner
///
/// The first defined threshold the measured value meets or exceeds wins;
/// undefined thresholds are skipped. A value below every defined threshold
/// grades as Beginner.
pub fn assign_grade(adjusted: &GradeThresholds, measured: Decimal) -> Grade {
    for grade in Grade::ASCENDING.iter().rev() {
        if let Some(threshold) = adjusted.get(*grade) {
            if measured >= threshold {
                return *grade;
            }
        }
    }
    Grade::Beginner
}

/// Nearest defined threshold strictly above the assigned grade
pub fn next_level_target(adjusted: &GradeThresholds, assigned: Grade) -> Option<Decimal> {
    let mut current = assigned;
    while let Some(next) = current.next() {
        if let Some(threshold) = adjusted.get(next) {
            return Some(threshold);
        }
        current = next;
    }
    None
}

/// Grade one measurement against a standard and an age coefficient
///
/// Steps, in order:
/// 1. scale every defined threshold by `coefficient`
/// 2. classify `measured` top-down
/// 3. compute the next-level target and the remaining distance,
///    `max(0, target - measured)` rounded to 2 decimals
pub fn assess(
    thresholds: &GradeThresholds,
    coefficient: Decimal,
    measured: Decimal,
) -> StrengthAssessment {
    let adjusted = thresholds.scaled(coefficient);
    let grade = assign_grade(&adjusted, measured);
    let target = next_level_target(&adjusted, grade);
    let remaining = target
        .map(|t| (t - measured).max(Decimal::ZERO).round_dp(2))
        .unwrap_or(Decimal::ZERO);

    StrengthAssessment {
        grade,
        adjusted,
        next_level_target: target,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn standard() -> GradeThresholds {
        GradeThresholds {
            beginner: Some(dec("50")),
            novice: Some(dec("70")),
            intermediate: Some(dec("90")),
            advanced: None,
            elite: None,
        }
    }

    #[test]
    fn grades_novice_against_adjusted_thresholds() {
        // thresholds {50, 70, 90}, coefficient 1.1 -> {55, 77, 99};
        // measured 80 -> Novice, next target 99, remaining 19
        let result = assess(&standard(), dec("1.1"), dec("80"));

        assert_eq!(result.grade, Grade::Novice);
        assert_eq!(result.adjusted.beginner, Some(dec("55.0")));
        assert_eq!(result.adjusted.novice, Some(dec("77.0")));
        assert_eq!(result.adjusted.intermediate, Some(dec("99.0")));
        assert_eq!(result.next_level_target, Some(dec("99.0")));
        assert_eq!(result.remaining, dec("19.00"));
    }

    #[rstest]
    #[case("30", Grade::Beginner)]
    #[case("55", Grade::Beginner)]
    #[case("76.9", Grade::Beginner)]
    #[case("77", Grade::Novice)]
    #[case("98.99", Grade::Novice)]
    #[case("99", Grade::Intermediate)]
    #[case("500", Grade::Intermediate)]
    fn grade_boundaries(#[case] measured: &str, #[case] expected: Grade) {
        let result = assess(&standard(), dec("1.1"), dec(measured));
        assert_eq!(result.grade, expected);
    }

    #[test]
    fn threshold_exactly_met_counts() {
        let adjusted = standard().scaled(Decimal::ONE);
        assert_eq!(assign_grade(&adjusted, dec("90")), Grade::Intermediate);
        assert_eq!(assign_grade(&adjusted, dec("70")), Grade::Novice);
    }

    #[test]
    fn null_thresholds_are_skipped() {
        let thresholds = GradeThresholds {
            beginner: Some(dec("50")),
            novice: None,
            intermediate: Some(dec("90")),
            advanced: None,
            elite: Some(dec("150")),
        };
        let adjusted = thresholds.scaled(Decimal::ONE);

        // 100 clears intermediate, skipping the undefined novice slot
        assert_eq!(assign_grade(&adjusted, dec("100")), Grade::Intermediate);
        // the next defined level above Intermediate is Elite, not Advanced
        assert_eq!(
            next_level_target(&adjusted, Grade::Intermediate),
            Some(dec("150"))
        );
    }

    #[test]
    fn below_all_thresholds_defaults_to_beginner() {
        let result = assess(&standard(), Decimal::ONE, dec("10"));
        assert_eq!(result.grade, Grade::Beginner);
        // next level above Beginner is Novice
        assert_eq!(result.next_level_target, Some(dec("70")));
        assert_eq!(result.remaining, dec("60.00"));
    }

    #[test]
    fn top_of_ladder_has_no_target() {
        let thresholds = GradeThresholds {
            beginner: Some(dec("50")),
            novice: Some(dec("70")),
            intermediate: Some(dec("90")),
            advanced: Some(dec("110")),
            elite: Some(dec("130")),
        };
        let result = assess(&thresholds, Decimal::ONE, dec("200"));
        assert_eq!(result.grade, Grade::Elite);
        assert_eq!(result.next_level_target, None);
        assert_eq!(result.remaining, Decimal::ZERO);
    }

    #[test]
    fn remaining_is_never_negative() {
        // measured sits past the novice threshold but below intermediate
        let result = assess(&standard(), Decimal::ONE, dec("89.5"));
        assert_eq!(result.remaining, dec("0.50"));

        let result = assess(&standard(), Decimal::ONE, dec("70"));
        assert_eq!(result.remaining, dec("20.00"));
    }

    #[rstest]
    #[case(24, "0.9")] // closer below
    #[case(26, "1.1")] // closer above
    #[case(25, "0.9")] // equidistant tie -> lower age
    #[case(20, "0.9")] // exact match on the below row
    fn coefficient_nearest_age(#[case] age: i32, #[case] expected: &str) {
        let below = CoefficientEntry {
            age: 20,
            coefficient: dec("0.9"),
        };
        let above = CoefficientEntry {
            age: 30,
            coefficient: dec("1.1"),
        };
        assert_eq!(
            resolve_coefficient(Some(below), Some(above), age),
            Some(dec(expected))
        );
    }

    #[test]
    fn coefficient_one_sided() {
        let only_below = CoefficientEntry {
            age: 40,
            coefficient: dec("1.05"),
        };
        assert_eq!(
            resolve_coefficient(Some(only_below), None, 60),
            Some(dec("1.05"))
        );

        let only_above = CoefficientEntry {
            age: 20,
            coefficient: dec("0.95"),
        };
        assert_eq!(
            resolve_coefficient(None, Some(only_above), 15),
            Some(dec("0.95"))
        );
    }

    #[test]
    fn coefficient_missing_entirely() {
        assert_eq!(resolve_coefficient(None, None, 30), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_measured() -> impl Strategy<Value = Decimal> {
            // two-decimal values in [0, 500], matching the numeric(10,2) column
            (0u32..=50_000u32).prop_map(|cents| Decimal::new(cents as i64, 2))
        }

        proptest! {
            // Increasing the measured value never decreases the grade
            #[test]
            fn grade_is_monotonic(a in arb_measured(), b in arb_measured()) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let standard = GradeThresholds {
                    beginner: Some(Decimal::new(5000, 2)),
                    novice: Some(Decimal::new(7000, 2)),
                    intermediate: Some(Decimal::new(9000, 2)),
                    advanced: Some(Decimal::new(11000, 2)),
                    elite: Some(Decimal::new(13000, 2)),
                };
                let low = assess(&standard, Decimal::ONE, lo);
                let high = assess(&standard, Decimal::ONE, hi);
                prop_assert!(low.grade <= high.grade);
            }

            // remaining >= 0 and equals target - measured when a target exists
            #[test]
            fn remaining_matches_target(measured in arb_measured()) {
                let standard = GradeThresholds {
                    beginner: Some(Decimal::new(5000, 2)),
                    novice: Some(Decimal::new(7000, 2)),
                    intermediate: Some(Decimal::new(9000, 2)),
                    advanced: None,
                    elite: None,
                };
                let result = assess(&standard, Decimal::ONE, measured);
                prop_assert!(result.remaining >= Decimal::ZERO);
                match result.next_level_target {
                    Some(target) => {
                        let expected = (target - measured).max(Decimal::ZERO).round_dp(2);
                        prop_assert_eq!(result.remaining, expected);
                    }
                    None => prop_assert_eq!(result.remaining, Decimal::ZERO),
                }
            }
        }
    }
}
