use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;
use crate::model::{LoginField, LoginForm};

/// Render the centered login form
pub fn render_login(f: &mut Frame, area: Rect, form: &LoginForm) {
    let popup = centered_rect(50, 11, area);
    f.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(""),
        field_line("Email", &form.email, form.focus == Some(LoginField::Email), false),
        Line::from(""),
        field_line(
            "Password",
            &form.password,
            form.focus == Some(LoginField::Password),
            true,
        ),
        Line::from(""),
    ];

    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab: switch field  Enter: sign in",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sign In ")
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, popup);
}

fn field_line(label: &str, value: &str, focused: bool, mask: bool) -> Line<'static> {
    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!(" {:>9}: ", label), label_style),
        Span::raw(shown),
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
