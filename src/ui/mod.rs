// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title bar, table area, input bar, status bar, legend)
// - render: Main orchestration function that coordinates all rendering
// - table: Renders the data table (headers with sort/focus markers, rows, selection)
// - login: Renders the centered login form
// - search: Renders the search / column-filter input bar
// - date_popover: Renders the date-range filter editor popup
// - status_bar: Renders pagination and selection info at the bottom
// - legend: Renders hotkey legend
// - dialogs: Renders confirmation dialogs and the record detail popup
// - toast: Renders toast notifications (brief pop-up messages)

pub mod date_popover;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod login;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
