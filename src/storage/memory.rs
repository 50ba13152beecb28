//! In-memory record repository
//!
//! Holds the session's records in insertion order. Nothing here can fail;
//! the `Result` return types come from the repository trait.

use crate::error::LedgerResult;
use crate::models::{CustomerRecord, Money, RecordId};

use super::RecordRepository;

/// Session-lifetime record store backed by a `Vec`
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: Vec<CustomerRecord>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the records without cloning
    pub fn iter(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.records.iter()
    }
}

impl RecordRepository for MemoryRepository {
    fn append(&mut self, record: CustomerRecord) -> LedgerResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn list(&self) -> LedgerResult<Vec<CustomerRecord>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: RecordId) -> LedgerResult<Option<CustomerRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> LedgerResult<Option<CustomerRecord>> {
        Ok(self.records.iter().find(|r| r.has_name(name)).cloned())
    }

    fn update_balance(&mut self, id: RecordId, balance: Money) -> LedgerResult<Option<CustomerRecord>> {
        Ok(self.records.iter_mut().find(|r| r.id == id).map(|record| {
            record.set_balance(balance);
            record.clone()
        }))
    }

    fn update_balance_by_name(&mut self, name: &str, balance: Money) -> LedgerResult<usize> {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.has_name(name)) {
            record.set_balance(balance);
            updated += 1;
        }
        Ok(updated)
    }

    fn count(&self) -> LedgerResult<usize> {
        Ok(self.records.len())
    }
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

    fn balances(repo: &MemoryRepository) -> Vec<i64> {
        repo.iter().map(|r| r.balance_amount.cents()).collect()
    }

    #[test]
    fn test_empty() {
        let repo = MemoryRepository::new();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut repo = MemoryRepository::new();
        for name in ["Ravi", "Asha", "Zubin", "Asha"] {
            repo.append(record(name, 0)).unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|r| r.customer_name)
            .collect();
        assert_eq!(names, vec!["Ravi", "Asha", "Zubin", "Asha"]);
        assert_eq!(repo.list().unwrap(), repo.list().unwrap());
    }

    #[test]
    fn test_append_does_not_validate() {
        let mut repo = MemoryRepository::new();
        repo.append(record("", -500)).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut repo = MemoryRepository::new();
        let first = record("Asha", 100);
        let first_id = first.id;
        repo.append(record("Ravi", 0)).unwrap();
        repo.append(first).unwrap();
        repo.append(record("Asha", 200)).unwrap();

        assert_eq!(repo.find_by_name("Asha").unwrap().unwrap().id, first_id);
        assert!(repo.find_by_name("asha").unwrap().is_none());
    }

    #[test]
    fn test_update_by_name_without_match_is_noop() {
        let mut repo = MemoryRepository::new();
        repo.append(record("Ravi", 100)).unwrap();
        let before = repo.list().unwrap();

        assert_eq!(repo.update_balance_by_name("Nobody", Money::from_cents(1)).unwrap(), 0);
        assert_eq!(repo.list().unwrap(), before);
    }

    #[test]
    fn test_update_by_name_single_match() {
        let mut repo = MemoryRepository::new();
        repo.append(record("Ravi", 100)).unwrap();
        repo.append(record("Asha", 200)).unwrap();
        let before = repo.list().unwrap();

        assert_eq!(repo.update_balance_by_name("Ravi", Money::from_cents(50)).unwrap(), 1);

        let after = repo.list().unwrap();
        assert_eq!(after[0].balance_amount, Money::from_cents(50));
        assert_eq!(after[0].bill_amount, before[0].bill_amount);
        assert_eq!(after[0].customer_name, before[0].customer_name);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn test_update_by_name_touches_every_match() {
        let mut repo = MemoryRepository::new();
        repo.append(record("Ravi", 100)).unwrap();
        repo.append(record("Asha", 200)).unwrap();
        repo.append(record("Ravi", 300)).unwrap();

        assert_eq!(repo.update_balance_by_name("Ravi", Money::from_cents(7)).unwrap(), 2);
        assert_eq!(balances(&repo), vec![7, 200, 7]);
    }

    #[test]
    fn test_update_by_id_touches_one_record() {
        let mut repo = MemoryRepository::new();
        let target = record("Ravi", 300);
        let id = target.id;
        repo.append(record("Ravi", 100)).unwrap();
        repo.append(target).unwrap();

        let updated = repo.update_balance(id, Money::from_cents(9)).unwrap().unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(balances(&repo), vec![100, 9]);

        assert!(repo.update_balance(RecordId::new(), Money::zero()).unwrap().is_none());
        assert_eq!(repo.get(id).unwrap().unwrap().balance_amount, Money::from_cents(9));
    }
}
