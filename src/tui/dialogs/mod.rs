//! Dialog modules for the TUI

pub mod edit_balance;
pub mod help;
