//! Status bar view
//!
//! Shows the record count, change count, the last message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Records: ", Style::default().fg(Color::White)),
        Span::styled(app.record_count().to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled("Changes: ", Style::default().fg(Color::White)),
        Span::styled(
            app.storage.audit().len().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let hints = " q:Quit  ?:Help  Tab:Focus ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
