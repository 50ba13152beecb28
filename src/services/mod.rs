//! Service layer for fibertrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, lookups and audit logging.

pub mod customer;

pub use customer::CustomerService;
