//! Form input parsing
//!
//! Both front ends collect the same eight fields as text. `RecordInput` turns
//! that text into a [`RecordDraft`], applying the rules the entry widgets
//! enforce: the purchase date may not lie before today and amounts must be
//! well-formed and non-negative. Text fields are trimmed here, where the
//! typing happens; empty ones are passed through so the service can report
//! every missing field at once.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, RecordDraft};

/// Date format accepted by the entry forms
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text of an "add customer" submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub customer_name: String,
    /// Empty means today
    pub purchase_date: String,
    pub size: String,
    pub design: String,
    pub colour: String,
    /// Empty amounts mean zero
    pub rate: String,
    pub bill_amount: String,
    pub balance_amount: String,
}

impl RecordInput {
    /// Parse the submission against the current date
    pub fn parse(&self, today: NaiveDate) -> LedgerResult<RecordDraft> {
        Ok(RecordDraft {
            customer_name: self.customer_name.trim().to_string(),
            purchase_date: parse_purchase_date(&self.purchase_date, today)?,
            size: self.size.trim().to_string(),
            design: self.design.trim().to_string(),
            colour: self.colour.trim().to_string(),
            rate: parse_amount("Rate", &self.rate)?,
            bill_amount: parse_amount("Bill Amount", &self.bill_amount)?,
            balance_amount: parse_amount("Balance Amount", &self.balance_amount)?,
        })
    }
}

/// Parse a purchase date, rejecting dates before `today`
pub fn parse_purchase_date(input: &str, today: NaiveDate) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    let date = NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            input
        ))
    })?;

    if date < today {
        return Err(LedgerError::Validation(format!(
            "Date of Purchase cannot be before {}",
            today.format(INPUT_DATE_FORMAT)
        )));
    }

    Ok(date)
}

/// Parse a non-negative amount entered in a form; empty means zero
pub fn parse_amount(label: &str, input: &str) -> LedgerResult<Money> {
    if input.trim().is_empty() {
        return Ok(Money::zero());
    }

    let amount = Money::parse(input)
        .map_err(|e| LedgerError::Validation(format!("{}: {}", label, e)))?;

    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative",
            label
        )));
    }

    Ok(amount)
}
