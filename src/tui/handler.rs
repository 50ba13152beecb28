//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::event::Event;
use super::views;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    // The form takes every key while it has focus
    if app.active_view == ActiveView::AddCustomer && app.focused_panel == FocusedPanel::Main {
        views::add_customer::handle_key(app, key);
        return;
    }

    handle_normal_key(app, key);
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return;
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::AddCustomer);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::CustomerList);
            return;
        }
        KeyCode::Char('h') | KeyCode::Left if key.modifiers.is_empty() => {
            app.focused_panel = FocusedPanel::Sidebar;
            return;
        }
        KeyCode::Char('l') | KeyCode::Right if key.modifiers.is_empty() => {
            app.focused_panel = FocusedPanel::Main;
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_customer_list_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.switch_view(ActiveView::CustomerList),
        KeyCode::Char('k') | KeyCode::Up => app.switch_view(ActiveView::AddCustomer),
        KeyCode::Enter => app.focused_panel = FocusedPanel::Main,
        _ => {}
    }
}

/// Handle keys in the customer list
fn handle_customer_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_balance(),
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.switch_view(ActiveView::AddCustomer);
            app.focused_panel = FocusedPanel::Main;
        }
        KeyCode::Esc => app.focused_panel = FocusedPanel::Sidebar,
        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        // Close help on any key
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::EditBalance(_) => dialogs::edit_balance::handle_key(app, key),
        ActiveDialog::None => {}
    }
}
