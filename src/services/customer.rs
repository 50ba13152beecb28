//! Customer record service
//!
//! Business logic on top of the record repository: validation on the way in,
//! ID and name lookup, balance edits and the audit trail.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CustomerRecord, Money, RecordDraft, RecordId};
use crate::storage::Storage;

/// Service for customer record management
pub struct CustomerService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CustomerService<'a> {
    /// Create a new customer service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new record
    ///
    /// Either the record is appended in full or the store is left untouched.
    pub fn add(&mut self, draft: RecordDraft) -> LedgerResult<CustomerRecord> {
        draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let record = CustomerRecord::from_draft(draft);
        self.storage.records.append(record.clone())?;
        log::info!("Added customer record {} for '{}'", record.id, record.customer_name);

        if let Err(e) = self.storage.log_create(&record) {
            log::warn!("Audit log write failed: {}", e);
        }

        Ok(record)
    }

    /// All records in insertion order
    pub fn list(&self) -> LedgerResult<Vec<CustomerRecord>> {
        self.storage.records.list()
    }

    pub fn count(&self) -> LedgerResult<usize> {
        self.storage.records.count()
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> LedgerResult<CustomerRecord> {
        self.storage
            .records
            .get(id)?
            .ok_or_else(|| LedgerError::record_not_found(id.to_string()))
    }

    /// First record with this exact customer name
    pub fn select_by_name(&self, name: &str) -> LedgerResult<Option<CustomerRecord>> {
        self.storage.records.find_by_name(name)
    }

    /// Find a record by ID or, failing that, by name (first match)
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<CustomerRecord>> {
        if let Some(record) = self.find_by_id_text(identifier)? {
            return Ok(Some(record));
        }
        self.select_by_name(identifier.trim())
    }

    /// Resolve an ID or a name that must identify exactly one record
    pub fn resolve_unique(&self, identifier: &str) -> LedgerResult<CustomerRecord> {
        if let Some(record) = self.find_by_id_text(identifier)? {
            return Ok(record);
        }

        let name = identifier.trim();
        let mut matches: Vec<CustomerRecord> = self
            .list()?
            .into_iter()
            .filter(|r| r.has_name(name))
            .collect();

        match matches.len() {
            0 => Err(LedgerError::record_not_found(name)),
            1 => Ok(matches.remove(0)),
            n => Err(LedgerError::Ambiguous {
                name: name.to_string(),
                matches: n,
            }),
        }
    }

    /// Set the balance of a single record
    pub fn update_balance(&mut self, id: RecordId, balance: Money) -> LedgerResult<CustomerRecord> {
        ensure_non_negative(balance)?;

        let before = self.get(id)?;
        let after = self
            .storage
            .records
            .update_balance(id, balance)?
            .ok_or_else(|| LedgerError::record_not_found(id.to_string()))?;

        log::info!(
            "Balance of {} ('{}') set to {}",
            after.id,
            after.customer_name,
            balance.format_plain()
        );
        if let Err(e) = self.storage.log_update(&before, &after) {
            log::warn!("Audit log write failed: {}", e);
        }

        Ok(after)
    }

    /// Set the balance of every record with this customer name
    ///
    /// Returns how many records changed. No match is not an error.
    pub fn update_balance_by_name(&mut self, name: &str, balance: Money) -> LedgerResult<usize> {
        ensure_non_negative(balance)?;

        let before: Vec<CustomerRecord> = self
            .list()?
            .into_iter()
            .filter(|r| r.has_name(name))
            .collect();

        let updated = self.storage.records.update_balance_by_name(name, balance)?;
        log::info!("Balance of {} record(s) named '{}' set to {}", updated, name, balance.format_plain());

        for old in &before {
            if let Some(new) = self.storage.records.get(old.id)? {
                if let Err(e) = self.storage.log_update(old, &new) {
                    log::warn!("Audit log write failed: {}", e);
                }
            }
        }

        Ok(updated)
    }

    /// Sum of all outstanding balances
    pub fn total_outstanding(&self) -> LedgerResult<Money> {
        Money::checked_sum(self.list()?.iter().map(|r| r.balance_amount)).ok_or_else(|| {
            LedgerError::Validation("Total outstanding is too large to represent".into())
        })
    }

    fn find_by_id_text(&self, identifier: &str) -> LedgerResult<Option<CustomerRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|r| r.id.matches(identifier)))
    }
}

fn ensure_non_negative(balance: Money) -> LedgerResult<()> {
    if balance.is_negative() {
        return Err(LedgerError::Validation(
            "Balance Amount cannot be negative".into(),
        ));
    }
    Ok(())
}
