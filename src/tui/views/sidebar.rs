//! Sidebar view
//!
//! Business name, view switcher and a summary of the session.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::TOTAL_OUT_OF_RANGE;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, app, layout.header);
    render_view_switcher(frame, app, layout.views);
    render_summary(frame, app, layout.summary);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(truncate_string(
        &app.settings.business_name,
        area.width.saturating_sub(2) as usize,
    ))
    .block(block)
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(title, area);
}

fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Sidebar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(view.title(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Session ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let (total_text, total_color) = match app.total_outstanding() {
        Some(total) if total.is_zero() => (
            total.format_with_symbol(&app.settings.currency_symbol),
            Color::Green,
        ),
        Some(total) => (
            total.format_with_symbol(&app.settings.currency_symbol),
            Color::Yellow,
        ),
        None => (TOTAL_OUT_OF_RANGE.to_string(), Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Customers:   ", Style::default().fg(Color::White)),
            Span::styled(app.record_count().to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Outstanding: ", Style::default().fg(Color::White)),
            Span::styled(total_text, Style::default().fg(total_color)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Fiber", 10), "Fiber");
        assert_eq!(truncate_string("Kunal Fiber Tech", 6), "Kunal…");
        assert_eq!(truncate_string("₹₹₹₹", 3), "₹₹…");
    }
}
