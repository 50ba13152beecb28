//! Terminal User Interface module
//!
//! Interactive ratatui front end: an "add customer" form, the customer list
//! with a detail pane, and a dialog for editing a balance.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
