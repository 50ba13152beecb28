//! Display formatting for terminal output
//!
//! Tables and detail blocks for the line-oriented shell.

pub mod record;

pub use record::{
    format_history, format_record_details, format_record_list, EMPTY_LIST_MESSAGE,
    TOTAL_OUT_OF_RANGE,
};
