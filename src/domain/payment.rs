use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    VirtualAccount,
    PaymentGateway,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Method selected, nothing paid yet.
    #[default]
    Pending,
    Processing,
    Paid,
    /// Checked by an administrator.
    Verified,
    Rejected,
    Expired,
    Failed,
    /// Withdrawn by the student.
    Cancelled,
}

impl PaymentStatus {
    /// No further transitions happen from a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Verified | Self::Rejected | Self::Expired | Self::Failed | Self::Cancelled
        )
    }
}

/// Initial payment method selection for a registration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePayment {
    pub registration_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
}

impl CreatePayment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.registration_id <= 0 {
            return Err(ValidationError::Required {
                field: "registration_id",
            });
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::Unsupported {
                field: "amount",
                value: self.amount.to_string(),
            });
        }
        // Only bank transfers are accepted for now.
        if self.payment_method != PaymentMethod::BankTransfer {
            return Err(ValidationError::Unsupported {
                field: "payment_method",
                value: format!("{:?}", self.payment_method),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        let terminal = [
            PaymentStatus::Verified,
            PaymentStatus::Rejected,
            PaymentStatus::Expired,
            PaymentStatus::Failed,
            PaymentStatus::Cancelled,
        ];
        for status in terminal {
            assert!(status.is_terminal(), "{status:?}");
        }
        for status in [PaymentStatus::Pending, PaymentStatus::Processing, PaymentStatus::Paid] {
            assert!(!status.is_terminal(), "{status:?}");
        }
    }

    #[test]
    fn accepts_bank_transfer_only() {
        let mut payment: CreatePayment = serde_json::from_str(
            r#"{"registration_id": 1, "amount": 150000, "payment_method": "bank_transfer"}"#,
        )
        .unwrap();
        assert_eq!(payment.validate(), Ok(()));

        payment.payment_method = PaymentMethod::VirtualAccount;
        assert!(matches!(
            payment.validate(),
            Err(ValidationError::Unsupported {
                field: "payment_method",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_amount_and_missing_registration() {
        let payment = CreatePayment {
            registration_id: 1,
            amount: -1.0,
            payment_method: PaymentMethod::BankTransfer,
        };
        assert!(payment.validate().is_err());

        let payment = CreatePayment {
            registration_id: 0,
            amount: 10.0,
            payment_method: PaymentMethod::BankTransfer,
        };
        assert_eq!(
            payment.validate(),
            Err(ValidationError::Required {
                field: "registration_id"
            })
        );
    }
}
