//! UI Model
//!
//! Screen selection, input capture modes, dialogs, and transient visual
//! state. No I/O lives here; handlers mutate this and the renderer reads it.

use std::time::Instant;

use crate::model::types::Record;
use crate::resources::Resource;

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Resource,
}

/// Which widget is capturing keystrokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Free-text search box is live-editing the table's search term
    Search,
    /// Text filter box for one column key
    ColumnFilter(String),
}

/// Login form field focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Login screen state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: Option<LoginField>,
    pub submitting: bool,
    /// Aggregate server-side validation banner (message plus joined details)
    pub error: Option<String>,
}

/// UI state: dialogs, popups, input capture, toasts
#[derive(Debug, Clone)]
pub struct UiModel {
    pub vim_mode: bool,
    pub input: InputMode,

    /// Delete confirmation dialog: (record id, human label)
    pub confirm_delete: Option<(String, String)>,

    /// Row detail popup
    pub detail_popup: Option<Record>,

    /// Toast message (text, shown-at)
    pub toast_message: Option<(String, Instant)>,

    /// Error view replacing the table after a failed list fetch
    pub load_error: Option<String>,

    /// Login form state
    pub login: LoginForm,

    /// Screen the user was headed to when the guard redirected to login
    pub pending_resource: Option<Resource>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            input: InputMode::Normal,
            confirm_delete: None,
            detail_popup: None,
            toast_message: None,
            load_error: None,
            login: LoginForm {
                focus: Some(LoginField::Email),
                ..LoginForm::default()
            },
            pending_resource: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some() || self.detail_popup.is_some()
    }

    pub fn close_all_modals(&mut self) {
        self.confirm_delete = None;
        self.detail_popup = None;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed (after 1.5 seconds)
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown)| shown.elapsed().as_millis() >= 1500)
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
