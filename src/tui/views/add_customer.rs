//! Add customer view
//!
//! The entry form: eight fields, Tab navigation and Enter to submit.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::forms::{RecordInput, INPUT_DATE_FORMAT};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::TextInput;

/// Width the field labels are right-aligned to
const LABEL_WIDTH: usize = 16;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerField {
    #[default]
    Name,
    Date,
    Size,
    Design,
    Colour,
    Rate,
    Bill,
    Balance,
}

impl CustomerField {
    const ORDER: [CustomerField; 8] = [
        Self::Name,
        Self::Date,
        Self::Size,
        Self::Design,
        Self::Colour,
        Self::Rate,
        Self::Bill,
        Self::Balance,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the "add customer" form
#[derive(Debug, Clone)]
pub struct CustomerFormState {
    pub focused_field: CustomerField,
    pub name_input: TextInput,
    pub date_input: TextInput,
    pub size_input: TextInput,
    pub design_input: TextInput,
    pub colour_input: TextInput,
    pub rate_input: TextInput,
    pub bill_input: TextInput,
    pub balance_input: TextInput,
    /// Why the last submit was refused
    pub error_message: Option<String>,
}

impl CustomerFormState {
    /// Empty form with the date defaulted to `today`
    pub fn new(today: NaiveDate) -> Self {
        let amount = |label: &str| TextInput::new().label(label).placeholder("0.00");
        let mut state = Self {
            focused_field: CustomerField::Name,
            name_input: TextInput::new().label("Customer Name"),
            date_input: TextInput::new()
                .label("Date of Purchase")
                .placeholder("YYYY-MM-DD")
                .content(today.format(INPUT_DATE_FORMAT).to_string()),
            size_input: TextInput::new().label("Size"),
            design_input: TextInput::new().label("Design"),
            colour_input: TextInput::new().label("Colour"),
            rate_input: amount("Rate"),
            bill_input: amount("Bill Amount"),
            balance_input: amount("Balance Amount"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Clear every field after a successful submit
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        let focused = self.focused_field;
        for field in CustomerField::ORDER {
            self.input_mut(field).focused = field == focused;
        }
    }

    fn input(&self, field: CustomerField) -> &TextInput {
        match field {
            CustomerField::Name => &self.name_input,
            CustomerField::Date => &self.date_input,
            CustomerField::Size => &self.size_input,
            CustomerField::Design => &self.design_input,
            CustomerField::Colour => &self.colour_input,
            CustomerField::Rate => &self.rate_input,
            CustomerField::Bill => &self.bill_input,
            CustomerField::Balance => &self.balance_input,
        }
    }

    fn input_mut(&mut self, field: CustomerField) -> &mut TextInput {
        match field {
            CustomerField::Name => &mut self.name_input,
            CustomerField::Date => &mut self.date_input,
            CustomerField::Size => &mut self.size_input,
            CustomerField::Design => &mut self.design_input,
            CustomerField::Colour => &mut self.colour_input,
            CustomerField::Rate => &mut self.rate_input,
            CustomerField::Bill => &mut self.bill_input,
            CustomerField::Balance => &mut self.balance_input,
        }
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        self.input_mut(self.focused_field)
    }

    /// The raw text of every field
    pub fn to_input(&self) -> RecordInput {
        RecordInput {
            customer_name: self.name_input.value().to_string(),
            purchase_date: self.date_input.value().to_string(),
            size: self.size_input.value().to_string(),
            design: self.design_input.value().to_string(),
            colour: self.colour_input.value().to_string(),
            rate: self.rate_input.value().to_string(),
            bill_amount: self.bill_input.value().to_string(),
            balance_amount: self.balance_input.value().to_string(),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Add Customer ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // Spacer
    constraints.extend([Constraint::Length(1); 8]);
    constraints.extend([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Error
        Constraint::Length(1), // Instructions
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &app.customer_form;
    for (i, field) in CustomerField::ORDER.into_iter().enumerate() {
        let mut input = form.input(field).clone();
        input.focused &= is_focused;
        frame.render_widget(Paragraph::new(input.to_line(LABEL_WIDTH)), chunks[i + 1]);
    }

    if let Some(error) = &form.error_message {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, chunks[10]);
    }

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Submit  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
        Span::raw(" Leave form"),
    ]));
    frame.render_widget(instructions, chunks[11]);
}

/// Handle a key while the form has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.customer_form;

    match key.code {
        KeyCode::Esc => {
            app.focused_panel = FocusedPanel::Sidebar;
        }
        KeyCode::Enter => {
            app.submit_customer_form();
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.clear_error();
            form.focused_input().insert(c);
        }
        _ => {}
    }
}
