//! Session audit logger
//!
//! Keeps every audit entry of the session in memory and, when a log path is
//! configured, appends each entry to that file as one JSON line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Collects audit entries for the current session
#[derive(Debug, Default)]
pub struct AuditLogger {
    entries: Vec<AuditEntry>,
    /// Optional JSONL file that mirrors the in-memory entries
    log_path: Option<PathBuf>,
}

impl AuditLogger {
    /// Create a logger that only keeps entries in memory
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create a logger that also appends entries to `log_path`
    pub fn with_file(log_path: PathBuf) -> Self {
        Self {
            entries: Vec::new(),
            log_path: Some(log_path),
        }
    }

    /// Record an audit entry
    ///
    /// The entry is kept even if writing the file fails.
    pub fn log(&mut self, entry: AuditEntry) -> LedgerResult<()> {
        let result = match &self.log_path {
            Some(path) => append_line(path, &entry),
            None => Ok(()),
        };
        self.entries.push(entry);
        result
    }

    /// All entries of this session, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The most recent `count` entries, oldest first
    pub fn recent(&self, count: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the mirror file, if any
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

fn append_line(path: &Path, entry: &AuditEntry) -> LedgerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!("Failed to create audit log directory: {}", e))
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

    let json = serde_json::to_string(entry)
        .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

    writeln!(file, "{}", json)
        .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;

    file.flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush audit log: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{CustomerRecord, Money, RecordDraft};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_entry(name: &str) -> AuditEntry {
        AuditEntry::create(&CustomerRecord::from_draft(RecordDraft {
            customer_name: name.into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            size: "L".into(),
            design: "Plain".into(),
            colour: "Red".into(),
            rate: Money::zero(),
            bill_amount: Money::zero(),
            balance_amount: Money::zero(),
        }))
    }

    #[test]
    fn test_in_memory_log() {
        let mut logger = AuditLogger::in_memory();
        assert!(logger.is_empty());

        logger.log(create_test_entry("Asha")).unwrap();

        assert_eq!(logger.len(), 1);
        assert_eq!(logger.entries()[0].operation, Operation::Create);
        assert!(logger.log_path().is_none());
    }

    #[test]
    fn test_recent() {
        let mut logger = AuditLogger::in_memory();
        for i in 0..10 {
            logger.log(create_test_entry(&format!("Customer {}", i))).unwrap();
        }

        let recent = logger.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].customer_name, "Customer 7");
        assert_eq!(recent[2].customer_name, "Customer 9");
        assert_eq!(logger.recent(50).len(), 10);
    }

    #[test]
    fn test_file_mirror() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("audit.log");
        let mut logger = AuditLogger::with_file(path.clone());

        logger.log(create_test_entry("Asha")).unwrap();
        logger.log(create_test_entry("Ravi")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: AuditEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.customer_name, "Ravi");
    }

    #[test]
    fn test_failed_write_still_keeps_entry() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let mut logger = AuditLogger::with_file(temp_dir.path().to_path_buf());

        let result = logger.log(create_test_entry("Asha"));
        assert!(matches!(result, Err(LedgerError::Io(_))));
        assert_eq!(logger.len(), 1);
    }
}
