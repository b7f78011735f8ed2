use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool) -> Vec<Span<'static>> {
    let mut spans = vec![];

    if vim_mode {
        spans.extend(vec![
            Span::styled("hjkl", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
        ]);
    } else {
        spans.extend(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
        ]);
    }

    spans.extend(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Resource  "),
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(":Search  "),
        Span::styled("f/F", Style::default().fg(Color::Yellow)),
        Span::raw(":Filter/Clear  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(":Sort  "),
        Span::styled("Space/a", Style::default().fg(Color::Yellow)),
        Span::raw(":Select  "),
        Span::styled("v", Style::default().fg(Color::Yellow)),
        Span::raw(":View  "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(":Delete  "),
        Span::styled("e/E", Style::default().fg(Color::Yellow)),
        Span::raw(":Export  "),
        Span::styled("n/p", Style::default().fg(Color::Yellow)),
        Span::raw(":Page  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    spans
}

/// Render the hotkey legend at the bottom of the screen
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
