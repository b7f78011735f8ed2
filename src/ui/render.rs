use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::model::{InputMode, Screen};
use crate::resources::Resource;

use super::{date_popover, dialogs, layout, legend, login, search, status_bar, table, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    match app.model.screen {
        Screen::Login => {
            login::render_login(f, size, &app.model.ui.login);
        }
        Screen::Resource => render_resource_screen(f, size, app),
    }

    // Dialogs and toasts draw over everything
    if let Some((_, label)) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, label);
    }
    if let Some(record) = &app.model.ui.detail_popup {
        dialogs::render_detail_popup(f, record);
    }
    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

fn render_resource_screen(f: &mut Frame, size: Rect, app: &mut App) {
    let input_active = app.model.ui.input != InputMode::Normal;
    let layout_info = layout::calculate_layout(size, input_active);

    render_tab_bar(f, layout_info.title_area, app);

    let visible = app.model.visible_rows();
    let rows = app.model.table.page_rows(&visible);
    table::render_table(
        f,
        layout_info.table_area,
        &mut app.model.table,
        &rows,
        app.model.data.loading,
    );

    if let Some(input_area) = layout_info.input_area {
        search::render_input_bar(f, input_area, &app.model.ui.input, &app.model.table);
    }

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model.data.window,
        app.model.table.selected.len(),
        app.model.ui.load_error.as_deref(),
    );

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode);

    if let Some(editor) = app.model.table.date_editor.clone() {
        let label = app
            .model
            .table
            .columns
            .iter()
            .find(|col| col.key == editor.key)
            .map(|col| col.label.clone())
            .unwrap_or_else(|| editor.key.clone());
        date_popover::render_date_popover(f, &editor, &label);
    }
}

/// Top strip: one tab per resource, active one highlighted, admin-only
/// resources dimmed for non-admin sessions.
fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.session.snapshot();
    let mut spans: Vec<Span> = Vec::new();

    for resource in Resource::ALL {
        let active = resource == app.model.data.resource;
        let reachable = crate::logic::session::check_access(resource.access(), &snapshot)
            == crate::logic::session::GuardDecision::Allow;

        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if reachable {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", resource.title()), style));
        spans.push(Span::raw(" "));
    }

    if let Some(user) = app.session.user() {
        spans.push(Span::styled(
            format!("  {} ", user.email),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(ratatui::widgets::Paragraph::new(Line::from(spans)), area);
}
