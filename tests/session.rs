//! Library-level session scenarios

use chrono::NaiveDate;
use fibertrack::audit::{AuditLogger, Operation};
use fibertrack::forms::RecordInput;
use fibertrack::models::{Money, RecordDraft};
use fibertrack::services::CustomerService;
use fibertrack::storage::Storage;
use tempfile::TempDir;

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
fn add_list_and_update_balance() {
    let mut storage = Storage::default();
    let mut service = CustomerService::new(&mut storage);

    let added = service.add(ravi()).unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], added);
    assert_eq!(listed[0].balance_amount.to_string(), "₹ 200.00");

    service
        .update_balance(added.id, Money::parse("50.00").unwrap())
        .unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, added.id);
    assert_eq!(listed[0].customer_name, "Ravi");
    assert_eq!(listed[0].bill_amount, Money::from_cents(50000));
    assert_eq!(listed[0].balance_amount.to_string(), "₹ 50.00");
}

#[test]
fn stored_record_equals_draft() {
    let mut storage = Storage::default();
    let mut service = CustomerService::new(&mut storage);

    let mut draft = ravi();
    draft.customer_name = "  Ravi ".into();
    draft.design = "Check ".into();
    let added = service.add(draft.clone()).unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed, vec![added]);
    assert_eq!(listed[0].customer_name, draft.customer_name);
    assert_eq!(listed[0].design, draft.design);
    assert_eq!(listed[0].balance_amount, draft.balance_amount);
}

#[test]
fn empty_customer_name_is_rejected() {
    let mut storage = Storage::default();
    let mut service = CustomerService::new(&mut storage);

    let mut draft = ravi();
    draft.customer_name = String::new();

    let err = service.add(draft).unwrap_err();
    assert!(err.is_validation());
    assert!(err
        .to_string()
        .contains("Please fill all the details before submitting."));
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn form_input_flows_into_store() {
    let mut storage = Storage::default();
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    let input = RecordInput {
        customer_name: "Asha".into(),
        size: "L".into(),
        design: "Plain".into(),
        colour: "Red".into(),
        balance_amount: "₹ 75.5".into(),
        ..Default::default()
    };

    let mut service = CustomerService::new(&mut storage);
    let record = service.add(input.parse(today).unwrap()).unwrap();

    assert_eq!(record.purchase_date, today);
    assert_eq!(record.rate, Money::zero());
    assert_eq!(record.balance_amount, Money::from_cents(7550));
}

#[test]
fn id_update_leaves_namesakes_alone() {
    let mut storage = Storage::default();
    let mut service = CustomerService::new(&mut storage);

    let first = service.add(ravi()).unwrap();
    let second = service.add(ravi()).unwrap();

    service.update_balance(second.id, Money::zero()).unwrap();

    assert_eq!(service.get(first.id).unwrap().balance_amount, Money::from_cents(20000));
    assert_eq!(service.get(second.id).unwrap().balance_amount, Money::zero());
    assert!(service.resolve_unique("Ravi").unwrap_err().is_ambiguous());

    assert_eq!(service.update_balance_by_name("Ravi", Money::from_cents(1)).unwrap(), 2);
    assert_eq!(service.total_outstanding().unwrap(), Money::from_cents(2));
}

#[test]
fn audit_trail_is_mirrored_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("audit.log");

    let mut storage = Storage::in_memory(AuditLogger::with_file(log_path.clone()));
    {
        let mut service = CustomerService::new(&mut storage);
        let record = service.add(ravi()).unwrap();
        service.update_balance(record.id, Money::from_cents(5000)).unwrap();
    }

    let entries = storage.audit().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, Operation::Create);
    assert_eq!(entries[1].operation, Operation::Update);
    assert!(entries[1]
        .diff_summary
        .as_deref()
        .unwrap()
        .contains("balance_amount"));

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(last["operation"], "update");
    assert_eq!(last["after"]["balance_amount"], "50.00");
}
