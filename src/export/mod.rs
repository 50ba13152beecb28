//! Export module
//!
//! CSV export of the customer list for use in spreadsheets.

pub mod csv;

pub use self::csv::{export_records_csv, export_records_to_file, CSV_HEADERS};
