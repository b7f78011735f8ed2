//! Search / Filter Input UI
//!
//! Renders the input bar used for free-text search and per-column text
//! filters while one of them is capturing keystrokes.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::InputMode;
use crate::table::TableView;

/// Render the active input bar. Caller only provides an area when an input
/// mode is active, so this always draws in "editing" style.
pub fn render_input_bar(f: &mut Frame, area: Rect, mode: &InputMode, view: &TableView) {
    let (title, value) = match mode {
        InputMode::Search => (
            " Search - Enter/Esc to close ".to_string(),
            view.search_term.clone(),
        ),
        InputMode::ColumnFilter(key) => {
            let label = view
                .columns
                .iter()
                .find(|col| &col.key == key)
                .map(|col| col.label.clone())
                .unwrap_or_else(|| key.clone());
            (
                format!(" Filter: {} - Enter/Esc to close ", label),
                view.column_filters.get(key).cloned().unwrap_or_default(),
            )
        }
        InputMode::Normal => return,
    };

    let cursor = Span::styled(
        "█",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK),
    );
    let line = Line::from(vec![Span::raw(value), cursor]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, area);
}
