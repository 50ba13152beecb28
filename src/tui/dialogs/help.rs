//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::dialog_area;

/// Width of the help box
const HELP_WIDTH: u16 = 60;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let lines = help_lines(app.active_view);
    // Borders take one row above and below
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = dialog_area(HELP_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("Ctrl+c", "Quit from anywhere"),
        key_line("?", "Show/hide help"),
        key_line("1 / 2", "Add Customer / Customer List"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Move focus left/right"),
        Line::from(""),
    ];

    match view {
        ActiveView::AddCustomer => {
            lines.push(section("Add Customer"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/Down", "Next field"));
            lines.push(key_line("S-Tab/Up", "Previous field"));
            lines.push(key_line("Enter", "Submit the record"));
            lines.push(key_line("Esc", "Leave the form"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Date defaults to today; empty amounts are 0.00.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        ActiveView::CustomerList => {
            lines.push(section("Customer List"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g/G", "Go to top/bottom"));
            lines.push(key_line("e/Enter", "Edit balance amount"));
            lines.push(key_line("a", "Add a customer"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
