//! Registration domain: students, registrations, payments and scores.
//!
//! Plain data types with their validation rules. Schedules, which these
//! reference by plot id, live in [`crate::schedule`].

pub mod payment;
pub mod registration;
pub mod score;
pub mod student;

use thiserror::Error;

pub use payment::{CreatePayment, PaymentMethod, PaymentStatus};
pub use registration::{RegistrationNumber, RegistrationStatus};
pub use score::{CreateScore, SectionScores};
pub use student::{CreateStudent, Student, UpdateStudent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },
    #[error("{0} is not a valid email address")]
    Email(String),
    #[error("{field} must be between 0 and {max}")]
    OutOfRange { field: &'static str, max: i32 },
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("unsupported {field}: {value}")]
    Unsupported { field: &'static str, value: String },
    #[error("invalid registration number: {0}")]
    RegistrationNumber(String),
}

pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}
