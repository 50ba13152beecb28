//! fibertrack - customer record keeper for a fabric business
//!
//! This library holds one session's customer purchase records in memory:
//! who bought, when, what (size, design, colour) and the rate, bill and
//! outstanding balance amounts. Records are appended, listed in insertion
//! order and have their balance edited; nothing outlives the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, IDs, money)
//! - `storage`: Record repository and session store
//! - `services`: Business logic layer
//! - `audit`: Audit trail of creates and balance edits
//! - `forms`: Parsing raw form text into drafts
//! - `display`: Terminal tables and detail blocks
//! - `export`: CSV export
//! - `cli`: Line-oriented shell
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fibertrack::models::{Money, RecordDraft};
//! use fibertrack::services::CustomerService;
//! use fibertrack::storage::Storage;
//!
//! let mut storage = Storage::default();
//! let mut service = CustomerService::new(&mut storage);
//!
//! let record = service.add(RecordDraft {
//!     customer_name: "Ravi".into(),
//!     purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     size: "M".into(),
//!     design: "Check".into(),
//!     colour: "Blue".into(),
//!     rate: Money::from_cents(10000),
//!     bill_amount: Money::from_cents(50000),
//!     balance_amount: Money::from_cents(20000),
//! })?;
//!
//! service.update_balance(record.id, Money::from_cents(5000))?;
//! assert_eq!(service.get(record.id)?.balance_amount.to_string(), "₹ 50.00");
//! # Ok::<(), fibertrack::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::LedgerError;
