//! Customer purchase record
//!
//! One entry per purchase order: who bought, when, what (size, design,
//! colour) and three independent amounts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::Money;

/// Labels of the required text fields, in form order
pub const FIELD_CUSTOMER_NAME: &str = "Customer Name";
pub const FIELD_SIZE: &str = "Size";
pub const FIELD_DESIGN: &str = "Design";
pub const FIELD_COLOUR: &str = "Colour";

/// The values submitted for a new record, before an ID is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub customer_name: String,
    pub purchase_date: NaiveDate,
    pub size: String,
    pub design: String,
    pub colour: String,
    pub rate: Money,
    pub bill_amount: Money,
    pub balance_amount: Money,
}

impl RecordDraft {
    /// Check the presence and sign rules a new record must satisfy
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        let missing: Vec<&'static str> = [
            (FIELD_CUSTOMER_NAME, &self.customer_name),
            (FIELD_SIZE, &self.size),
            (FIELD_DESIGN, &self.design),
            (FIELD_COLOUR, &self.colour),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

        if !missing.is_empty() {
            return Err(RecordValidationError::MissingFields(missing));
        }

        for (label, amount) in [
            ("Rate", self.rate),
            ("Bill Amount", self.bill_amount),
            ("Balance Amount", self.balance_amount),
        ] {
            if amount.is_negative() {
                return Err(RecordValidationError::NegativeAmount(label));
            }
        }

        Ok(())
    }
}

/// A stored customer purchase record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Customer name (not unique)
    pub customer_name: String,

    /// Date of purchase
    pub purchase_date: NaiveDate,

    pub size: String,
    pub design: String,
    pub colour: String,

    pub rate: Money,
    pub bill_amount: Money,

    /// Outstanding balance; independent of `bill_amount`
    pub balance_amount: Money,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the balance was last changed
    pub updated_at: DateTime<Utc>,
}

impl CustomerRecord {
    /// Build a record from a draft, storing its values unchanged
    ///
    /// No validation happens here; see [`RecordDraft::validate`].
    pub fn from_draft(draft: RecordDraft) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            customer_name: draft.customer_name,
            purchase_date: draft.purchase_date,
            size: draft.size,
            design: draft.design,
            colour: draft.colour,
            rate: draft.rate,
            bill_amount: draft.bill_amount,
            balance_amount: draft.balance_amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the outstanding balance
    pub fn set_balance(&mut self, balance: Money) {
        self.balance_amount = balance;
        self.updated_at = Utc::now();
    }

    /// Exact, case-sensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.customer_name == name
    }
}

impl fmt::Display for CustomerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.customer_name, self.purchase_date)
    }
}

/// Validation errors for new records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    MissingFields(Vec<&'static str>),
    NegativeAmount(&'static str),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => write!(
                f,
                "Please fill all the details before submitting. Missing: {}",
                fields.join(", ")
            ),
            Self::NegativeAmount(field) => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ravi() -> RecordDraft {
        RecordDraft {
            customer_name: "Ravi".into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            size: "M".into(),
            design: "Check".into(),
            colour: "Blue".into(),
            rate: Money::from_cents(10000),
            bill_amount: Money::from_cents(50000),
            balance_amount: Money::from_cents(20000),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(ravi().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let mut draft = ravi();
        draft.customer_name = String::new();
        draft.colour = "   ".into();

        assert_eq!(
            draft.validate(),
            Err(RecordValidationError::MissingFields(vec![
                FIELD_CUSTOMER_NAME,
                FIELD_COLOUR
            ]))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut draft = ravi();
        draft.bill_amount = Money::from_cents(-1);
        assert_eq!(
            draft.validate(),
            Err(RecordValidationError::NegativeAmount("Bill Amount"))
        );
    }

    #[test]
    fn test_zero_amounts_allowed() {
        let mut draft = ravi();
        draft.rate = Money::zero();
        draft.bill_amount = Money::zero();
        draft.balance_amount = Money::zero();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_from_draft_keeps_values() {
        let mut draft = ravi();
        draft.customer_name = "  Ravi ".into();
        let record = CustomerRecord::from_draft(draft.clone());

        assert_eq!(record.customer_name, draft.customer_name);
        assert_eq!(record.size, "M");
        assert_eq!(record.balance_amount, Money::from_cents(20000));
        assert_eq!(record.created_at, record.updated_at);
        assert!(record.has_name("  Ravi "));
        assert!(!record.has_name("Ravi"));
    }

    #[test]
    fn test_set_balance_touches_only_balance() {
        let mut record = CustomerRecord::from_draft(ravi());
        let before = record.clone();
        record.set_balance(Money::from_cents(5000));

        assert_eq!(record.balance_amount, Money::from_cents(5000));
        assert_eq!(record.bill_amount, before.bill_amount);
        assert_eq!(record.customer_name, before.customer_name);
        assert_eq!(record.id, before.id);
    }

    #[test]
    fn test_validation_message() {
        let err = RecordValidationError::MissingFields(vec![FIELD_SIZE]);
        assert_eq!(
            err.to_string(),
            "Please fill all the details before submitting. Missing: Size"
        );
    }
}
