//! Applies worker responses to application state.
//!
//! Responses for a resource the user has since navigated away from are
//! dropped rather than applied, so a slow page fetch can never overwrite
//! the screen the user is actually looking at.

use crate::app::App;
use crate::log_debug;
use crate::model::Screen;
use crate::services::api::ApiResponse;

pub fn apply(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListResult {
            resource,
            page,
            result,
        } => {
            if app.model.screen != Screen::Resource || app.model.data.resource != resource {
                log_debug(&format!(
                    "dropping stale list response for {} page {}",
                    resource.path(),
                    page
                ));
                return;
            }
            match result {
                Ok(list) => {
                    app.model.data.replace_page(
                        list.data,
                        list.pagination.current_page,
                        list.pagination.limit,
                        list.pagination.total_items,
                    );
                    app.model.ui.load_error = None;
                    let visible = app.model.visible_rows();
                    let shown = app.model.table.page_rows(&visible);
                    app.model.table.clamp_cursor(shown.len());
                }
                Err(e) => {
                    app.model.data.loading = false;
                    app.model.ui.load_error = Some(format!("{}", e));
                }
            }
        }

        ApiResponse::DetailResult { resource, result, .. } => {
            if app.model.screen != Screen::Resource || app.model.data.resource != resource {
                return;
            }
            match result {
                Ok(record) => app.model.ui.detail_popup = Some(record),
                Err(e) => app.model.show_toast(format!("Error: {}", e)),
            }
        }

        ApiResponse::DeleteResult { resource, id, result } => match result {
            Ok(()) => {
                let key_field = app.model.table.key_field.clone();
                app.model.table.selected.retain(|row| {
                    row.get(&key_field)
                        .and_then(crate::logic::values::value_text)
                        .as_deref()
                        != Some(id.as_str())
                });
                app.model.show_toast("Record deleted".to_string());
                if app.model.data.resource == resource {
                    app.refresh();
                }
            }
            Err(e) => app.model.show_toast(format!("Error: {}", e)),
        },

        ApiResponse::LoginResult { result } => match result {
            Ok(login) => {
                app.client.set_token(Some(login.token.clone()));
                if let Err(e) = app.session.establish(login.token, login.user) {
                    log_debug(&format!("token persist failed: {:#}", e));
                }
                app.model.ui.login.password.clear();
                app.model.ui.login.submitting = false;
                app.model.ui.login.error = None;
                let target = app.post_login_resource();
                app.open_resource(target);
            }
            Err(e) => {
                app.model.ui.login.submitting = false;
                app.model.ui.login.error = Some(format!("{}", e));
            }
        },

        ApiResponse::CurrentUserResult { result } => match result {
            Ok(user) => {
                app.session.resolve(Some(user));
                let target = app.post_login_resource();
                app.open_resource(target);
            }
            Err(e) => {
                log_debug(&format!("persisted token rejected: {:#}", e));
                app.session.resolve(None);
                app.client.set_token(None);
                app.model.screen = Screen::Login;
            }
        },
    }
}
