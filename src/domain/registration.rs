use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ValidationError;

const ROMAN_MONTHS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    PaymentVerified,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PaymentVerified => "payment_verified",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "payment_verified" => Ok(Self::PaymentVerified),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ValidationError::Unsupported {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Registration number `NNN/<roman month>/YYYY`, e.g. `001/V/2025`.
///
/// `order` counts registrations within the month, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationNumber {
    pub order: u32,
    pub month: u32,
    pub year: i32,
}

impl RegistrationNumber {
    pub fn new(order: u32, date: NaiveDate) -> Result<Self, ValidationError> {
        if !(1..=999).contains(&order) {
            return Err(ValidationError::RegistrationNumber(format!(
                "order {order} out of range"
            )));
        }
        Ok(Self {
            order,
            month: date.month(),
            year: date.year(),
        })
    }
}

impl fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roman = ROMAN_MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        write!(f, "{:03}/{}/{}", self.order, roman, self.year)
    }
}

impl FromStr for RegistrationNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::RegistrationNumber(s.to_string());

        let mut parts = s.split('/');
        let (Some(order), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if order.len() != 3 || year.len() != 4 {
            return Err(invalid());
        }
        let order: u32 = order.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month = ROMAN_MONTHS
            .iter()
            .position(|m| *m == month)
            .ok_or_else(invalid)?;

        if order == 0 {
            return Err(invalid());
        }
        Ok(Self {
            order,
            month: month as u32 + 1,
            year,
        })
    }
}

impl Serialize for RegistrationNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RegistrationNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_roman_month() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let number = RegistrationNumber::new(1, date).unwrap();
        assert_eq!(number.to_string(), "001/V/2025");

        let december = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(
            RegistrationNumber::new(42, december).unwrap().to_string(),
            "042/XII/2024"
        );
    }

    #[test]
    fn parses_formatted_numbers() {
        let number: RegistrationNumber = "123/IX/2025".parse().unwrap();
        assert_eq!(
            number,
            RegistrationNumber {
                order: 123,
                month: 9,
                year: 2025
            }
        );
        assert_eq!(number.to_string(), "123/IX/2025");
    }

    #[test]
    fn rejects_malformed_numbers() {
        for raw in ["1/V/2025", "001/XIII/2025", "001/V/25", "000/V/2025", "001/V/2025/x", "abc"] {
            assert!(raw.parse::<RegistrationNumber>().is_err(), "{raw} accepted");
        }
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(RegistrationNumber::new(1000, date).is_err());
    }

    #[test]
    fn status_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::PaymentVerified).unwrap(),
            "\"payment_verified\""
        );
        assert_eq!(
            "approved".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Approved
        );
        assert!("done".parse::<RegistrationStatus>().is_err());
    }
}
