use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::logic::filter::{BOOL_FILTER_FALSE, BOOL_FILTER_TRUE};
use crate::logic::format::display_value;
use crate::model::types::{Column, ColumnKind, Record};
use crate::table::TableView;
use crate::utils::truncate_cell;

const SELECT_MARK: &str = "●";

/// Render the data table for the current page.
///
/// Headers carry a sort indicator on the sorted column and a highlight on the
/// focused column; an active filter on a column shows in its header. Selected
/// rows get a marker in the leading gutter.
pub fn render_table(f: &mut Frame, area: Rect, view: &mut TableView, rows: &[Record], loading: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(table_title(view, loading));

    if rows.is_empty() {
        let message = if loading { "Loading..." } else { "No records" };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header_cells: Vec<Cell> = std::iter::once(Cell::from(" "))
        .chain(
            view.columns
                .iter()
                .enumerate()
                .map(|(idx, col)| header_cell(view, col, idx)),
        )
        .collect();
    let header = Row::new(header_cells)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .height(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let mark = if view.selected.iter().any(|sel| {
                crate::logic::select::key_equals(sel, row, &view.key_field)
            }) {
                Span::styled(SELECT_MARK, Style::default().fg(Color::Green))
            } else {
                Span::raw(" ")
            };
            let cells: Vec<Cell> = std::iter::once(Cell::from(mark))
                .chain(view.columns.iter().map(|col| {
                    let text = display_value(col, row);
                    let width = col.width.unwrap_or(24) as usize;
                    Cell::from(truncate_cell(&text, width))
                }))
                .collect();
            Row::new(cells).height(1)
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(1))
        .chain(view.columns.iter().map(|col| match col.width {
            Some(w) => Constraint::Length(w),
            None => Constraint::Min(10),
        }))
        .collect();

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .column_spacing(1);

    f.render_stateful_widget(table, area, &mut view.cursor);
}

fn table_title(view: &TableView, loading: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", view.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if loading {
        spans.push(Span::styled("(loading) ", Style::default().fg(Color::Yellow)));
    }
    if view.has_active_filters() {
        spans.push(Span::styled("[filtered] ", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// Header cell: label + sort indicator + active filter hint
fn header_cell(view: &TableView, col: &Column, idx: usize) -> Cell<'static> {
    let mut label = col.label.clone();

    if let Some(sort) = &view.sort {
        if sort.key == col.key {
            label.push(' ');
            label.push_str(sort.direction.indicator());
        }
    }

    if let Some(filter) = view.column_filters.get(&col.key) {
        let hint = match (col.kind, filter.as_str()) {
            (ColumnKind::Boolean, BOOL_FILTER_TRUE) => " [yes]".to_string(),
            (ColumnKind::Boolean, BOOL_FILTER_FALSE) => " [no]".to_string(),
            _ => format!(" [{}]", truncate_cell(filter, 8)),
        };
        label.push_str(&hint);
    }
    if view.date_filters.contains_key(&col.key) {
        label.push_str(" [date]");
    }

    let style = if idx == view.focused_column {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    Cell::from(Span::styled(label, style))
}
