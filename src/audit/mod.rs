//! Audit trail for fibertrack
//!
//! Records every record creation and balance edit with before/after values.
//!
//! - `AuditEntry`: one operation on one record, with timestamp and diff.
//! - `AuditLogger`: keeps the session's entries and optionally mirrors them
//!   to a JSONL file.
//! - `generate_diff`: human-readable summary of what changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
