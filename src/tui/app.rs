//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::LedgerError;
use crate::models::{CustomerRecord, Money, RecordId};
use crate::services::CustomerService;
use crate::storage::Storage;

use super::dialogs::edit_balance::EditBalanceState;
use super::views::add_customer::CustomerFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    AddCustomer,
    CustomerList,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::AddCustomer, ActiveView::CustomerList];

    pub fn title(&self) -> &'static str {
        match self {
            Self::AddCustomer => "Add Customer",
            Self::CustomerList => "Customer List",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    EditBalance(RecordId),
}

/// Main application state
pub struct App<'a> {
    /// The session store
    pub storage: &'a mut Storage,

    pub settings: &'a Settings,

    /// Earliest purchase date the form accepts
    pub today: NaiveDate,

    pub should_quit: bool,

    pub active_view: ActiveView,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    /// Selected row in the customer list
    pub selected_index: usize,

    pub status_message: Option<String>,

    pub customer_form: CustomerFormState,

    pub balance_form: EditBalanceState,

    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        let today = Local::now().date_naive();
        Self {
            storage,
            settings,
            today,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            customer_form: CustomerFormState::new(today),
            balance_form: EditBalanceState::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Use a fixed date instead of the system clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self.customer_form = CustomerFormState::new(today);
        self
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// All records in insertion order
    pub fn records(&self) -> Vec<CustomerRecord> {
        self.storage.records.list().unwrap_or_default()
    }

    pub fn record_count(&self) -> usize {
        self.storage.records.count().unwrap_or(0)
    }

    /// Sum of all balances, `None` if it does not fit in a `Money`
    pub fn total_outstanding(&self) -> Option<Money> {
        Money::checked_sum(self.records().iter().map(|r| r.balance_amount))
    }

    /// The record under the list cursor
    pub fn selected_record(&self) -> Option<CustomerRecord> {
        self.records().into_iter().nth(self.selected_index)
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clear_status();
        if view == ActiveView::CustomerList {
            self.clamp_selection();
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.record_count() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.record_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.record_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.set_status(message.clone());
        self.notifications.push(Notification::success(message));
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.set_status(message.clone());
        self.notifications.push(Notification::warning(message));
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Validate and add the record in the "add customer" form
    ///
    /// On success the form is cleared; on failure it keeps its contents.
    pub fn submit_customer_form(&mut self) {
        let input = self.customer_form.to_input();
        let result = input
            .parse(self.today)
            .and_then(|draft| CustomerService::new(&mut *self.storage).add(draft));

        match result {
            Ok(record) => {
                self.customer_form.reset(self.today);
                self.notify_success(format!(
                    "Customer {} added successfully!",
                    record.customer_name
                ));
            }
            Err(e) => {
                let message = warning_text(&e);
                self.customer_form.set_error(message.clone());
                self.notify_warning(message);
            }
        }
    }

    /// Open the balance editor for the selected record
    ///
    /// The field is pre-filled by reading the displayed balance back.
    pub fn open_edit_balance(&mut self) {
        match self.selected_record() {
            Some(record) => {
                let symbol = &self.settings.currency_symbol;
                let displayed = record.balance_amount.format_with_symbol(symbol);
                self.balance_form = EditBalanceState::for_record(&record, &displayed, symbol);
                self.open_dialog(ActiveDialog::EditBalance(record.id));
            }
            None => self.notify_warning("No customer selected"),
        }
    }

    /// Apply the amount typed into the balance editor
    pub fn submit_balance_edit(&mut self) {
        let ActiveDialog::EditBalance(id) = self.active_dialog else {
            return;
        };

        let symbol = self.settings.currency_symbol.clone();
        let amount = match Money::parse_with_symbol(self.balance_form.input.value(), &symbol) {
            Ok(amount) => amount,
            Err(e) => {
                self.balance_form.set_error(e.to_string());
                return;
            }
        };

        match CustomerService::new(&mut *self.storage).update_balance(id, amount) {
            Ok(updated) => {
                self.close_dialog();
                self.notify_success(format!(
                    "Balance amount for {} updated to {}",
                    updated.customer_name,
                    updated.balance_amount.format_with_symbol(&symbol)
                ));
            }
            Err(e) => self.balance_form.set_error(warning_text(&e)),
        }
    }
}

/// Message shown to the user for a failed action
fn warning_text(err: &LedgerError) -> String {
    match err {
        LedgerError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn fill_form(app: &mut App, name: &str) {
        let form = &mut app.customer_form;
        form.name_input.set_value(name);
        form.size_input.set_value("M");
        form.design_input.set_value("Check");
        form.colour_input.set_value("Blue");
        form.rate_input.set_value("100");
        form.bill_input.set_value("500");
        form.balance_input.set_value("200");
    }

    #[test]
    fn test_submit_valid_form() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings).with_today(today());

        fill_form(&mut app, "Ravi");
        app.submit_customer_form();

        assert_eq!(app.record_count(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Customer Ravi added successfully!")
        );
        assert!(app.customer_form.name_input.value().is_empty());
        assert_eq!(app.customer_form.date_input.value(), "2024-01-10");
    }

    #[test]
    fn test_submit_incomplete_form_keeps_input() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings).with_today(today());

        fill_form(&mut app, "");
        app.submit_customer_form();

        assert_eq!(app.record_count(), 0);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Please fill all the details before submitting."));
        assert_eq!(app.customer_form.size_input.value(), "M");
        assert!(app.customer_form.error_message.is_some());
    }

    #[test]
    fn test_edit_balance_prefills_and_updates() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings).with_today(today());

        fill_form(&mut app, "Ravi");
        app.submit_customer_form();
        app.switch_view(ActiveView::CustomerList);
        app.open_edit_balance();

        assert!(matches!(app.active_dialog, ActiveDialog::EditBalance(_)));
        assert_eq!(app.balance_form.input.value(), "200.00");

        app.balance_form.input.set_value("₹ 50");
        app.submit_balance_edit();

        assert!(!app.has_dialog());
        assert_eq!(
            app.selected_record().unwrap().balance_amount,
            Money::from_cents(5000)
        );
        assert_eq!(
            app.status_message.as_deref(),
            Some("Balance amount for Ravi updated to ₹ 50.00")
        );
    }

    #[test]
    fn test_edit_balance_rejects_bad_amount() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings).with_today(today());

        fill_form(&mut app, "Ravi");
        app.submit_customer_form();
        app.open_edit_balance();

        app.balance_form.input.set_value("lots");
        app.submit_balance_edit();
        assert!(app.has_dialog());
        assert!(app.balance_form.error_message.is_some());

        app.balance_form.input.set_value("-1");
        app.submit_balance_edit();
        assert!(app.has_dialog());
        assert_eq!(
            app.selected_record().unwrap().balance_amount,
            Money::from_cents(20000)
        );
    }

    #[test]
    fn test_edit_balance_without_records() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.open_edit_balance();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("No customer selected"));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut storage = Storage::default();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings).with_today(today());

        app.move_down();
        assert_eq!(app.selected_index, 0);

        for name in ["A", "B", "C"] {
            fill_form(&mut app, name);
            app.submit_customer_form();
        }
        app.select_last();
        assert_eq!(app.selected_index, 2);
        app.move_down();
        assert_eq!(app.selected_index, 2);
        app.move_up();
        assert_eq!(app.selected_record().unwrap().customer_name, "B");
        app.select_first();
        app.move_up();
        assert_eq!(app.selected_index, 0);
    }
}
