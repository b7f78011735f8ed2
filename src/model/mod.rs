//! Pure application model
//!
//! State only, no I/O:
//! - **DataModel**: records on screen and their paging window
//! - **UiModel**: screen, input capture, dialogs, toasts
//! - **types**: the column model and table value types
//!
//! Table interaction state (search, filters, sort, selection) lives in
//! [`crate::table::TableView`], which the model owns.

pub mod data;
pub mod types;
pub mod ui;

pub use data::DataModel;
pub use types::*;
pub use ui::{InputMode, LoginField, LoginForm, Screen, UiModel};

use crate::resources::Resource;
use crate::table::TableView;

/// Root application model
#[derive(Debug, Clone)]
pub struct Model {
    pub screen: Screen,
    pub data: DataModel,
    pub table: TableView,
    pub ui: UiModel,
}

impl Model {
    /// Initial model: login screen, default resource staged behind the guard
    pub fn new(resource: Resource, page_size: u32, vim_mode: bool) -> Self {
        Self {
            screen: Screen::Login,
            data: DataModel::new(resource, page_size),
            table: TableView::for_resource(resource),
            ui: UiModel::new(vim_mode),
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Rows the user currently sees: filter + sort over the fetched page
    pub fn visible_rows(&self) -> Vec<Record> {
        self.table.visible_rows(&self.data.records)
    }
}
