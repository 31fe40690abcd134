use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ValidationError, check_length};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub major: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateStudent {
    pub student_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub major: String,
}

impl CreateStudent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("student_number", &self.student_number, 8, 20)?;
        check_length("full_name", &self.full_name, 3, 100)?;
        check_length("phone", &self.phone, 10, 15)?;
        check_email(&self.email)?;
        check_length("major", &self.major, 1, 100)
    }
}

/// Contact details a student may change after registering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateStudent {
    pub phone: String,
    pub email: String,
}

impl UpdateStudent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("phone", &self.phone, 10, 15)?;
        check_email(&self.email)
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::Email(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let labels_ok = domain.split('.').count() >= 2 && domain.split('.').all(|l| !l.is_empty());
    if local.is_empty() || domain.contains('@') || !labels_ok {
        return Err(invalid());
    }
    Ok(())
}
