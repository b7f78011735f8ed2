use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use crate::logic::values::value_text;
use crate::model::types::Record;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, label: &str) {
    let prompt_text = format!(
        "Delete this record?\n\n{}\n\nThis action cannot be undone.\n\nContinue? (y/n)",
        label
    );

    let area = centered_rect(50, 9, f.area());
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Delete ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

/// Render the record detail popup: every field of the fetched record, one per
/// line, in key order as the backend returned them.
pub fn render_detail_popup(f: &mut Frame, record: &Record) {
    let mut lines: Vec<Line> = record
        .iter()
        .map(|(key, value)| {
            let shown = value_text(value).unwrap_or_default();
            Line::from(vec![
                Span::styled(format!("{:>16}: ", key), Style::default().fg(Color::Cyan)),
                Span::raw(shown),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16 + 2).min(f.area().height);
    let area = centered_rect(70, height, f.area());

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Record Detail ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
