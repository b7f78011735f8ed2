use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::paging::PageWindow;

/// Render the bottom status bar: pagination window, selection count, and the
/// last load error if one is showing.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    window: &PageWindow,
    selected_count: usize,
    load_error: Option<&str>,
) {
    if let Some(error) = load_error {
        let line = Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
            Span::styled("  (r to retry)", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let range = match window.display_range() {
        Some((first, last)) => format!("Showing {}-{} of {}", first, last, window.total),
        None => "No records".to_string(),
    };

    let mut spans = vec![
        Span::raw(range),
        Span::styled(
            format!("  │  Page {}/{}  │  {} per page", window.page, window.total_pages(), window.limit),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if selected_count > 0 {
        spans.push(Span::styled(
            format!("  │  {} selected", selected_count),
            Style::default().fg(Color::Green),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
