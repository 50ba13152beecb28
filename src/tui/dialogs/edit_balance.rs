//! Edit balance dialog
//!
//! Changes the outstanding balance of one record. Only the balance is
//! editable; every other field keeps its value.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{CustomerRecord, Money};
use crate::tui::app::App;
use crate::tui::layout::dialog_area;
use crate::tui::widgets::TextInput;

/// State for the edit balance dialog
#[derive(Debug, Clone, Default)]
pub struct EditBalanceState {
    pub customer_name: String,
    pub bill_amount: String,
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl EditBalanceState {
    /// Open for a record, pre-filled from the balance as displayed
    ///
    /// Text that does not read back as an amount starts the field at 0.00.
    pub fn for_record(record: &CustomerRecord, displayed_balance: &str, symbol: &str) -> Self {
        let current = Money::parse_or_zero(displayed_balance, symbol);
        let mut input = TextInput::new()
            .label("New Balance")
            .content(current.format_plain());
        input.focused = true;

        Self {
            customer_name: record.customer_name.clone(),
            bill_amount: record.bill_amount.format_with_symbol(symbol),
            input,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Render the edit balance dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = dialog_area(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let state = &app.balance_form;

    let block = Block::default()
        .title(" Edit Balance ")
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Customer
            Constraint::Length(1), // Bill
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let label = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("   Customer: ", label),
            Span::styled(state.customer_name.as_str(), Style::default().fg(Color::White)),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Bill Amount: ", label),
            Span::styled(state.bill_amount.as_str(), Style::default().fg(Color::White)),
        ])),
        chunks[1],
    );

    frame.render_widget(&state.input, chunks[3]);

    if let Some(error) = &state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
            Span::raw(" Cancel"),
        ])),
        chunks[6],
    );
}

/// Handle key input for the edit balance dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let input = &mut app.balance_form.input;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_balance_edit(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            app.balance_form.error_message = None;
            app.balance_form.input.insert(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordDraft;
    use chrono::NaiveDate;

    fn record() -> CustomerRecord {
        CustomerRecord::from_draft(RecordDraft {
            customer_name: "Ravi".into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            size: "M".into(),
            design: "Check".into(),
            colour: "Blue".into(),
            rate: Money::from_cents(10000),
            bill_amount: Money::from_cents(50000),
            balance_amount: Money::from_cents(20000),
        })
    }

    #[test]
    fn test_prefill_from_displayed_balance() {
        let state = EditBalanceState::for_record(&record(), "₹ 200.00", "₹");
        assert_eq!(state.input.value(), "200.00");
        assert_eq!(state.bill_amount, "₹ 500.00");
        assert!(state.input.focused);
    }

    #[test]
    fn test_prefill_falls_back_to_zero() {
        let state = EditBalanceState::for_record(&record(), "garbled", "₹");
        assert_eq!(state.input.value(), "0.00");
    }

    #[test]
    fn test_custom_symbol() {
        let state = EditBalanceState::for_record(&record(), "Rs. 12.50", "Rs.");
        assert_eq!(state.input.value(), "12.50");
        assert_eq!(state.bill_amount, "Rs. 500.00");
    }
}
