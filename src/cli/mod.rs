//! CLI command handlers
//!
//! The line-oriented shell, bridging clap parsing of each input line with the
//! service layer.

pub mod shell;

pub use shell::{tokenize, Flow, Shell, ShellCommand};
