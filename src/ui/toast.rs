use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.len() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + 2,
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let toast = Paragraph::new(vec![toast_line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast, toast_area);
}
