//! Customer record display formatting
//!
//! Renders the customer list as a table and single records as a detail
//! block. Amounts always use the configured currency symbol.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::{CustomerRecord, Money};

/// Message shown when the list is empty
pub const EMPTY_LIST_MESSAGE: &str = "No customers added yet.";

/// Shown in place of a total that overflows
pub const TOTAL_OUT_OF_RANGE: &str = "out of range";

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer Name")]
    customer_name: String,
    #[tabled(rename = "Date of Purchase")]
    purchase_date: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Design")]
    design: String,
    #[tabled(rename = "Colour")]
    colour: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Bill Amount")]
    bill_amount: String,
    #[tabled(rename = "Balance Amount")]
    balance_amount: String,
}

impl RecordRow {
    fn new(record: &CustomerRecord, symbol: &str, date_format: &str) -> Self {
        Self {
            id: record.id.to_string(),
            customer_name: record.customer_name.clone(),
            purchase_date: record.purchase_date.format(date_format).to_string(),
            size: record.size.clone(),
            design: record.design.clone(),
            colour: record.colour.clone(),
            rate: record.rate.format_with_symbol(symbol),
            bill_amount: record.bill_amount.format_with_symbol(symbol),
            balance_amount: record.balance_amount.format_with_symbol(symbol),
        }
    }
}

/// Format all records as a table in insertion order, followed by the
/// outstanding total
pub fn format_record_list(records: &[CustomerRecord], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow::new(r, symbol, date_format))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    let total = Money::checked_sum(records.iter().map(|r| r.balance_amount))
        .map(|total| total.format_with_symbol(symbol))
        .unwrap_or_else(|| TOTAL_OUT_OF_RANGE.to_string());

    format!(
        "{}\n{} record(s), total outstanding: {}\n",
        table,
        records.len(),
        total
    )
}

/// Format one record for the detail view
pub fn format_record_details(record: &CustomerRecord, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Record:           {}\n", record.id));
    output.push_str(&format!("Customer Name:    {}\n", record.customer_name));
    output.push_str(&format!(
        "Date of Purchase: {}\n",
        record.purchase_date.format(date_format)
    ));
    output.push_str(&format!("Size:             {}\n", record.size));
    output.push_str(&format!("Design:           {}\n", record.design));
    output.push_str(&format!("Colour:           {}\n", record.colour));
    output.push_str(&format!(
        "Rate:             {}\n",
        record.rate.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Bill Amount:      {}\n",
        record.bill_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance Amount:   {}\n",
        record.balance_amount.format_with_symbol(symbol)
    ));

    if record.updated_at != record.created_at {
        output.push_str(&format!(
            "Last updated:     {}\n",
            record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}

/// Format the change history of this session, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordDraft;
    use chrono::NaiveDate;

    fn record(name: &str, balance: i64) -> CustomerRecord {
        CustomerRecord::from_draft(RecordDraft {
            customer_name: name.into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            size: "M".into(),
            design: "Check".into(),
            colour: "Blue".into(),
            rate: Money::from_cents(10000),
            bill_amount: Money::from_cents(50000),
            balance_amount: Money::from_cents(balance),
        })
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_record_list(&[], "₹", "%Y-%m-%d"),
            "No customers added yet.\n"
        );
    }

    #[test]
    fn test_list_shows_all_columns_and_total() {
        let records = vec![record("Ravi", 20000), record("Asha", 5050)];
        let output = format_record_list(&records, "₹", "%Y-%m-%d");

        assert!(output.contains("Customer Name"));
        assert!(output.contains("Balance Amount"));
        assert!(output.contains("Ravi"));
        assert!(output.contains("2024-01-10"));
        assert!(output.contains("₹ 500.00"));
        assert!(output.contains("total outstanding: ₹ 250.50"));
        assert!(output.find("Ravi").unwrap() < output.find("Asha").unwrap());
    }

    #[test]
    fn test_details_use_configured_symbol() {
        let output = format_record_details(&record("Ravi", 20000), "Rs.", "%d/%m/%Y");
        assert!(output.contains("Customer Name:    Ravi"));
        assert!(output.contains("Date of Purchase: 10/01/2024"));
        assert!(output.contains("Balance Amount:   Rs. 200.00"));
        assert!(!output.contains("Last updated"));
    }

    #[test]
    fn test_history() {
        assert_eq!(format_history(&[]), "No changes recorded yet.\n");

        let entry = AuditEntry::create(&record("Ravi", 0));
        let output = format_history(&[entry]);
        assert!(output.contains("CREATE"));
        assert!(output.contains("Ravi"));
    }

    #[test]
    fn test_overflowing_total_still_lists_records() {
        let half = i64::MAX / 2 + 1;
        let records = vec![record("Ravi", half), record("Asha", half)];
        let output = format_record_list(&records, "₹", "%Y-%m-%d");

        assert!(output.contains("Asha"));
        assert!(output.contains("2 record(s), total outstanding: out of range"));
    }
}
