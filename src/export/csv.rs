//! CSV export of customer records
//!
//! One row per record in insertion order. Amounts are written as plain
//! two-decimal numbers so spreadsheets can sum them.

use std::io::Write;
use std::path::Path;

use crate::error::LedgerResult;
use crate::models::CustomerRecord;
use crate::storage::write_atomic;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Customer Name",
    "Date of Purchase",
    "Size",
    "Design",
    "Colour",
    "Rate",
    "Bill Amount",
    "Balance Amount",
];

/// Write records as CSV to any writer
pub fn export_records_csv<W: Write>(records: &[CustomerRecord], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for record in records {
        csv_writer.write_record([
            record.id.to_string(),
            record.customer_name.clone(),
            record.purchase_date.format("%Y-%m-%d").to_string(),
            record.size.clone(),
            record.design.clone(),
            record.colour.clone(),
            record.rate.format_plain(),
            record.bill_amount.format_plain(),
            record.balance_amount.format_plain(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export records to a file, replacing it atomically
pub fn export_records_to_file(records: &[CustomerRecord], path: &Path) -> LedgerResult<()> {
    write_atomic(path, |writer| export_records_csv(records, writer))?;
    log::info!("Exported {} record(s) to {}", records.len(), path.display());
    Ok(())
}
