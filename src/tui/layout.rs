//! Screen regions for the TUI
//!
//! A fixed-width sidebar beside the active view, a one-line status bar, and
//! a helper that places dialogs in the middle of the screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the sidebar column
const SIDEBAR_WIDTH: u16 = 30;

/// Height of the detail pane under the customer table
const DETAILS_HEIGHT: u16 = 12;

/// Top-level regions of the screen
pub struct AppLayout {
    /// Business name, view switcher and session summary
    pub sidebar: Rect,
    /// The form or the customer list
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [body, status_bar] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
                .areas(body);

        Self {
            sidebar,
            main,
            status_bar,
        }
    }
}

/// Sidebar sections, top to bottom
pub struct SidebarLayout {
    pub header: Rect,
    pub views: Rect,
    /// Record count and outstanding total
    pub summary: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect) -> Self {
        let [header, views, summary] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .areas(area);

        Self {
            header,
            views,
            summary,
        }
    }
}

/// Customer list: table on top, details of the selected record below
pub struct CustomerListLayout {
    pub table: Rect,
    pub details: Rect,
}

impl CustomerListLayout {
    pub fn new(area: Rect) -> Self {
        let [table, details] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(DETAILS_HEIGHT)])
                .areas(area);

        Self { table, details }
    }
}

/// A `width` x `height` box centred on `screen`, shrunk to fit if needed
pub fn dialog_area(width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}
