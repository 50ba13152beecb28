//! Core data models for fibertrack
//!
//! Customer purchase records, their identifiers and the money type used for
//! rate, bill and balance amounts.

pub mod ids;
pub mod money;
pub mod record;

pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use record::{CustomerRecord, RecordDraft, RecordValidationError};
