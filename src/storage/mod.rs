//! Storage layer for fibertrack
//!
//! Records live only for the session. `RecordRepository` is the seam a
//! durable backend would implement; `MemoryRepository` is the one that ships.

pub mod file_io;
pub mod memory;

pub use file_io::write_atomic;
pub use memory::MemoryRepository;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::error::LedgerResult;
use crate::models::{CustomerRecord, Money, RecordId};

/// Persistence interface for customer records
pub trait RecordRepository {
    /// Append a record at the end of the sequence
    fn append(&mut self, record: CustomerRecord) -> LedgerResult<()>;

    /// All records in insertion order
    fn list(&self) -> LedgerResult<Vec<CustomerRecord>>;

    /// Look up a record by ID
    fn get(&self, id: RecordId) -> LedgerResult<Option<CustomerRecord>>;

    /// First record (in insertion order) with exactly this customer name
    fn find_by_name(&self, name: &str) -> LedgerResult<Option<CustomerRecord>>;

    /// Overwrite the balance of one record, returning the updated record
    fn update_balance(&mut self, id: RecordId, balance: Money) -> LedgerResult<Option<CustomerRecord>>;

    /// Overwrite the balance of every record with this customer name
    ///
    /// Returns how many records were touched; zero is not an error.
    fn update_balance_by_name(&mut self, name: &str, balance: Money) -> LedgerResult<usize>;

    fn count(&self) -> LedgerResult<usize>;
}

/// Fields excluded from audit diffs
const DIFF_IGNORED: &[&str] = &["updated_at"];

/// Per-session storage: the record repository plus the audit trail
pub struct Storage {
    pub records: Box<dyn RecordRepository>,
    audit: AuditLogger,
}

impl Storage {
    /// Create storage over an arbitrary repository
    pub fn new(records: Box<dyn RecordRepository>, audit: AuditLogger) -> Self {
        Self { records, audit }
    }

    /// Create an empty in-memory session
    pub fn in_memory(audit: AuditLogger) -> Self {
        Self::new(Box::new(MemoryRepository::new()), audit)
    }

    /// The session audit trail
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record the creation of a record
    pub fn log_create(&mut self, record: &CustomerRecord) -> LedgerResult<()> {
        self.audit.log(AuditEntry::create(record))
    }

    /// Record a change to a record
    pub fn log_update(&mut self, before: &CustomerRecord, after: &CustomerRecord) -> LedgerResult<()> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a, DIFF_IGNORED),
            _ => None,
        };
        self.audit.log(AuditEntry::update(before, after, diff))
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory(AuditLogger::in_memory())
    }
}
