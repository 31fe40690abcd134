use serde::{Deserialize, Serialize};

use super::ValidationError;

pub const MAX_LISTENING: i32 = 68;
pub const MAX_STRUCTURE: i32 = 68;
pub const MAX_READING: i32 = 67;
pub const MAX_TOTAL: i32 = 677;

/// Converted section scores of one test attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub listening_comprehension: i32,
    pub structure_written_expression: i32,
    pub reading_comprehension: i32,
}

impl SectionScores {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_section("listening_comprehension", self.listening_comprehension, MAX_LISTENING)?;
        check_section(
            "structure_written_expression",
            self.structure_written_expression,
            MAX_STRUCTURE,
        )?;
        check_section("reading_comprehension", self.reading_comprehension, MAX_READING)
    }

    /// `(listening + structure + reading) * 10 / 3`, truncated and capped at
    /// [`MAX_TOTAL`]. Out-of-range sections saturate instead of overflowing.
    pub fn total(&self) -> i32 {
        let sum = self
            .listening_comprehension
            .saturating_add(self.structure_written_expression)
            .saturating_add(self.reading_comprehension);
        (sum.saturating_mul(10) / 3).min(MAX_TOTAL)
    }
}

fn check_section(field: &'static str, value: i32, max: i32) -> Result<(), ValidationError> {
    if !(0..=max).contains(&value) {
        return Err(ValidationError::OutOfRange { field, max });
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateScore {
    pub student_id: i64,
    /// Plot id of the schedule the test was taken in.
    pub test_plot_id: i64,
    #[serde(flatten)]
    pub sections: SectionScores,
}

impl CreateScore {
    /// Validates the submission and returns its total score.
    pub fn validate(&self) -> Result<i32, ValidationError> {
        if self.student_id <= 0 {
            return Err(ValidationError::Required {
                field: "student_id",
            });
        }
        if self.test_plot_id <= 0 {
            return Err(ValidationError::Required {
                field: "test_plot_id",
            });
        }
        self.sections.validate()?;
        Ok(self.sections.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(l: i32, s: i32, r: i32) -> SectionScores {
        SectionScores {
            listening_comprehension: l,
            structure_written_expression: s,
            reading_comprehension: r,
        }
    }

    #[test]
    fn computes_total() {
        assert_eq!(scores(50, 50, 50).total(), 500);
        assert_eq!(scores(31, 31, 31).total(), 310);
        assert_eq!(scores(0, 0, 0).total(), 0);
        assert_eq!(scores(68, 68, 67).total(), 676);
    }

    #[test]
    fn total_of_unvalidated_sections_does_not_overflow() {
        assert_eq!(scores(i32::MAX, i32::MAX, 1).total(), MAX_TOTAL);
        assert!(scores(i32::MIN, -1, 0).total() < 0);
    }

    #[test]
    fn enforces_section_bounds() {
        assert_eq!(scores(68, 68, 67).validate(), Ok(()));
        assert_eq!(
            scores(69, 0, 0).validate(),
            Err(ValidationError::OutOfRange {
                field: "listening_comprehension",
                max: 68
            })
        );
        assert!(scores(0, 0, 68).validate().is_err());
        assert!(scores(0, -1, 0).validate().is_err());
    }

    #[test]
    fn create_score_reads_flat_json() {
        let create: CreateScore = serde_json::from_str(
            r#"{
                "student_id": 3,
                "test_plot_id": 20250501001,
                "listening_comprehension": 55,
                "structure_written_expression": 50,
                "reading_comprehension": 52
            }"#,
        )
        .unwrap();
        assert_eq!(create.validate(), Ok(523));
    }

    #[test]
    fn create_score_requires_ids() {
        let create = CreateScore {
            student_id: 0,
            test_plot_id: 1,
            sections: scores(1, 1, 1),
        };
        assert_eq!(
            create.validate(),
            Err(ValidationError::Required {
                field: "student_id"
            })
        );
    }
}
