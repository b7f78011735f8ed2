use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;
use crate::model::types::DateBound;
use crate::table::DateFilterEditor;

/// Render the date-range filter editor popup. Bounds are entered as
/// YYYY-MM-DD; a blank input leaves that bound open.
pub fn render_date_popover(f: &mut Frame, editor: &DateFilterEditor, column_label: &str) {
    let area = centered_rect(44, 9, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        bound_line("From", &editor.start_input, editor.focus == DateBound::Start),
        Line::from(""),
        bound_line("To", &editor.end_input, editor.focus == DateBound::End),
        Line::from(""),
        Line::from(Span::styled(
            "Tab: switch  Enter: apply  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Date Filter: {} ", column_label))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, area);
}

fn bound_line(label: &str, input: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!(" {:>5}: ", label), label_style),
        Span::raw(if input.is_empty() && !focused {
            "YYYY-MM-DD".to_string()
        } else {
            input.to_string()
        }),
    ];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}
