//! Customer list view (main panel)
//!
//! All records in insertion order, with the selected record's details below.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::EMPTY_LIST_MESSAGE;
use crate::models::CustomerRecord;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::CustomerListLayout;

const COLUMNS: [&str; 8] = [
    "Customer Name",
    "Date",
    "Size",
    "Design",
    "Colour",
    "Rate",
    "Bill Amount",
    "Balance Amount",
];

/// Render the customer list in the main panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = CustomerListLayout::new(area);
    let records = app.records();

    render_table(frame, app, &records, layout.table);
    render_details(frame, app, records.get(app.selected_index), layout.details);
}

fn render_table(frame: &mut Frame, app: &App, records: &[CustomerRecord], area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Customer List ({}) ", records.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if records.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let date_format = &app.settings.date_format;

    let widths = [
        Constraint::Min(14),    // Name
        Constraint::Length(11), // Date
        Constraint::Length(6),  // Size
        Constraint::Min(8),     // Design
        Constraint::Min(8),     // Colour
        Constraint::Length(12), // Rate
        Constraint::Length(13), // Bill
        Constraint::Length(15), // Balance
    ];

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|c| Cell::from(*c).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            let balance_style = if record.balance_amount.is_zero() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            Row::new(vec![
                Cell::from(record.customer_name.clone()),
                Cell::from(record.purchase_date.format(date_format).to_string()),
                Cell::from(record.size.clone()),
                Cell::from(record.design.clone()),
                Cell::from(record.colour.clone()),
                Cell::from(record.rate.format_with_symbol(symbol)),
                Cell::from(record.bill_amount.format_with_symbol(symbol)),
                Cell::from(record.balance_amount.format_with_symbol(symbol)).style(balance_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, record: Option<&CustomerRecord>, area: Rect) {
    let block = Block::default()
        .title(" Customer Details ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(record) = record else {
        frame.render_widget(block, area);
        return;
    };

    let symbol = &app.settings.currency_symbol;
    let lines = vec![
        detail_line("Customer Name", record.customer_name.clone()),
        detail_line(
            "Date of Purchase",
            record.purchase_date.format(&app.settings.date_format).to_string(),
        ),
        detail_line("Size", record.size.clone()),
        detail_line("Design", record.design.clone()),
        detail_line("Colour", record.colour.clone()),
        detail_line("Rate", record.rate.format_with_symbol(symbol)),
        detail_line("Bill Amount", record.bill_amount.format_with_symbol(symbol)),
        detail_line("Balance Amount", record.balance_amount.format_with_symbol(symbol)),
        Line::from(Span::styled(
            format!("{:>16}  {}", "Record", record.id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("[e]", Style::default().fg(Color::Green)),
            Span::raw(" Edit balance  "),
            Span::styled("[a]", Style::default().fg(Color::Cyan)),
            Span::raw(" Add customer"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
