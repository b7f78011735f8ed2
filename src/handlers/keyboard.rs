//! Keyboard Input Handler
//!
//! Dispatches every key event. Modal dialogs capture input first, then text
//! entry modes (search, column filter, date editor, login form), and only
//! then the normal table key map.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, ExportFormat};
use crate::model::types::{ColumnKind, DateBound};
use crate::model::{InputMode, LoginField, Screen};

const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Delete confirmation captures everything until answered
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.delete_confirmed(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete = None;
            }
            _ => {}
        }
        return;
    }

    // Detail popup: any dismiss key closes it
    if app.model.ui.detail_popup.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v')
        ) {
            app.model.ui.detail_popup = None;
        }
        return;
    }

    // Date-range editor
    if app.model.table.date_editor.is_some() {
        handle_date_editor_key(app, key);
        return;
    }

    // Text entry modes edit the table live
    match app.model.ui.input.clone() {
        InputMode::Search => {
            handle_search_key(app, key);
            return;
        }
        InputMode::ColumnFilter(column_key) => {
            handle_column_filter_key(app, key, &column_key);
            return;
        }
        InputMode::Normal => {}
    }

    if app.model.screen == Screen::Login {
        handle_login_key(app, key);
        return;
    }

    handle_table_key(app, key);
}

fn handle_date_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.table.close_date_filter(),
        KeyCode::Enter => {
            app.model.table.apply_date_editor();
            let shown = page_len(app);
            app.model.table.clamp_cursor(shown);
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(editor) = app.model.table.date_editor.as_mut() {
                editor.focus = match editor.focus {
                    DateBound::Start => DateBound::End,
                    DateBound::End => DateBound::Start,
                };
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(editor) = app.model.table.date_editor.as_mut() {
                editor.start_input.clear();
                editor.end_input.clear();
            }
        }
        KeyCode::Backspace => {
            if let Some(editor) = app.model.table.date_editor.as_mut() {
                match editor.focus {
                    DateBound::Start => editor.start_input.pop(),
                    DateBound::End => editor.end_input.pop(),
                };
            }
        }
        KeyCode::Char(c) => {
            if let Some(editor) = app.model.table.date_editor.as_mut() {
                match editor.focus {
                    DateBound::Start => editor.start_input.push(c),
                    DateBound::End => editor.end_input.push(c),
                }
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.model.ui.input = InputMode::Normal,
        KeyCode::Backspace => {
            let mut term = app.model.table.search_term.clone();
            term.pop();
            app.model.table.set_search_term(term);
            clamp_to_page(app);
        }
        KeyCode::Char(c) => {
            let mut term = app.model.table.search_term.clone();
            term.push(c);
            app.model.table.set_search_term(term);
            clamp_to_page(app);
        }
        _ => {}
    }
}

fn handle_column_filter_key(app: &mut App, key: KeyEvent, column_key: &str) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.model.ui.input = InputMode::Normal,
        KeyCode::Backspace => {
            let mut value = app
                .model
                .table
                .column_filters
                .get(column_key)
                .cloned()
                .unwrap_or_default();
            value.pop();
            app.model.table.set_column_filter(column_key, value);
            clamp_to_page(app);
        }
        KeyCode::Char(c) => {
            let mut value = app
                .model
                .table
                .column_filters
                .get(column_key)
                .cloned()
                .unwrap_or_default();
            value.push(c);
            app.model.table.set_column_filter(column_key, value);
            clamp_to_page(app);
        }
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if app.model.ui.login.submitting {
        return;
    }
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.model.ui.login.focus = match app.model.ui.login.focus {
                Some(LoginField::Email) => Some(LoginField::Password),
                _ => Some(LoginField::Email),
            };
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Esc => {
            app.model.ui.login.error = None;
        }
        KeyCode::Backspace => match app.model.ui.login.focus {
            Some(LoginField::Email) => {
                app.model.ui.login.email.pop();
            }
            Some(LoginField::Password) => {
                app.model.ui.login.password.pop();
            }
            None => {}
        },
        KeyCode::Char(c) => match app.model.ui.login.focus {
            Some(LoginField::Email) => app.model.ui.login.email.push(c),
            Some(LoginField::Password) => app.model.ui.login.password.push(c),
            None => {}
        },
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('L') => app.logout(),

        // Resource navigation runs through the access guard
        KeyCode::Tab => app.next_resource(),
        KeyCode::BackTab => app.prev_resource(),

        KeyCode::Down => cursor_down(app),
        KeyCode::Up => cursor_up(app),
        KeyCode::Char('j') if app.model.ui.vim_mode => cursor_down(app),
        KeyCode::Char('k') if app.model.ui.vim_mode => cursor_up(app),

        KeyCode::Right => app.model.table.focus_next_column(),
        KeyCode::Left => app.model.table.focus_prev_column(),
        KeyCode::Char('l') if app.model.ui.vim_mode => app.model.table.focus_next_column(),
        KeyCode::Char('h') if app.model.ui.vim_mode => app.model.table.focus_prev_column(),

        KeyCode::Char('s') => {
            if let Some(column_key) = app.model.table.focused_column().map(|c| c.key.to_string()) {
                app.model.table.request_sort(&column_key);
                clamp_to_page(app);
            }
        }

        KeyCode::Char('/') => app.model.ui.input = InputMode::Search,

        // Boolean columns cycle all/true/false; text columns open a filter box
        KeyCode::Char('f') => {
            let Some(column) = app.model.table.focused_column() else {
                return;
            };
            if !column.filterable {
                return;
            }
            let column_key = column.key.to_string();
            match column.kind {
                ColumnKind::Boolean => {
                    app.model.table.cycle_boolean_filter(&column_key);
                    clamp_to_page(app);
                }
                ColumnKind::Text => {
                    app.model.ui.input = InputMode::ColumnFilter(column_key);
                }
                ColumnKind::Date => app.model.table.open_date_filter(&column_key),
            }
        }
        KeyCode::Char('F') => {
            if let Some(column_key) = app.model.table.focused_column().map(|c| c.key.to_string()) {
                app.model.table.clear_column_filter(&column_key);
                app.model.table.clear_date_filter(&column_key);
                clamp_to_page(app);
            }
        }
        KeyCode::Char('D') => {
            if let Some(column_key) = app.model.table.focused_column().map(|c| c.key.to_string()) {
                app.model.table.open_date_filter(&column_key);
            }
        }

        KeyCode::Char(' ') => {
            let visible = app.model.visible_rows();
            let rows = app.model.table.page_rows(&visible);
            if let Some(row) = app.model.table.cursor_row(&rows) {
                app.model.table.toggle_row(&row);
            }
        }
        KeyCode::Char('a') => {
            let visible = app.model.visible_rows();
            app.model.table.toggle_all(&visible);
        }
        KeyCode::Char('x') => app.model.table.clear_selection(),

        KeyCode::Char('d') => app.confirm_delete_cursor_row(),
        KeyCode::Char('v') | KeyCode::Enter => app.view_cursor_row(),

        KeyCode::Char('e') => app.export_visible(ExportFormat::Csv),
        KeyCode::Char('E') => app.export_visible(ExportFormat::Xlsx),

        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('+') | KeyCode::Char('=') => step_page_size(app, 1),
        KeyCode::Char('-') => step_page_size(app, -1),

        _ => {}
    }
}

fn page_len(app: &App) -> usize {
    let visible = app.model.visible_rows();
    app.model.table.page_rows(&visible).len()
}

fn clamp_to_page(app: &mut App) {
    let len = page_len(app);
    app.model.table.clamp_cursor(len);
}

fn cursor_down(app: &mut App) {
    let len = page_len(app);
    app.model.table.cursor_down(len);
}

fn cursor_up(app: &mut App) {
    let len = page_len(app);
    app.model.table.cursor_up(len);
}

/// Step through the fixed page-size ladder; changing size resets to page 1
fn step_page_size(app: &mut App, direction: i32) {
    let current = app.model.data.window.limit;
    let idx = PAGE_SIZES.iter().position(|&s| s == current).unwrap_or(0);
    let next = if direction > 0 {
        PAGE_SIZES.get(idx + 1).copied()
    } else {
        idx.checked_sub(1).and_then(|i| PAGE_SIZES.get(i).copied())
    };
    if let Some(size) = next {
        app.set_page_size(size);
    }
}
