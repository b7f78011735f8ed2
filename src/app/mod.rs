//! Application shell
//!
//! `App` wires the pure model to the session, the REST client, and the API
//! worker channels. Navigation between resource screens runs through the
//! session guard; everything else delegates to the table orchestrator.

mod actions;

pub use actions::ExportFormat;

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::api::CmsClient;
use crate::logic::session::{check_access, GuardDecision};
use crate::model::{Model, Screen};
use crate::resources::Resource;
use crate::services::api::{ApiRequest, ApiResponse, Priority};
use crate::session::Session;
use crate::table::TableView;

pub struct App {
    pub model: Model,
    pub session: Session,
    pub client: CmsClient,
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    /// Directory export files land in
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(
        model: Model,
        session: Session,
        client: CmsClient,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        api_rx: mpsc::UnboundedReceiver<ApiResponse>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            model,
            session,
            client,
            api_tx,
            api_rx,
            export_dir,
        }
    }

    /// Queue a fetch of the current resource page
    pub fn request_current_page(&mut self, priority: Priority) {
        self.model.data.loading = true;
        let _ = self.api_tx.send(ApiRequest::LoadList {
            resource: self.model.data.resource,
            page: self.model.data.window.page,
            limit: self.model.data.window.limit,
            search: None,
            priority,
        });
    }

    /// Navigate to a resource screen through the session guard.
    ///
    /// Denied access redirects to login and remembers the intended resource
    /// so a successful sign-in lands there.
    pub fn open_resource(&mut self, resource: Resource) {
        match check_access(resource.access(), &self.session.snapshot()) {
            GuardDecision::Loading => {
                self.model.show_toast("Session still loading...".to_string());
            }
            GuardDecision::Redirect => {
                self.model.ui.pending_resource = Some(resource);
                self.model.screen = Screen::Login;
                self.model
                    .show_toast(format!("Sign in required for {}", resource.title()));
            }
            GuardDecision::Allow => {
                let limit = self.model.data.window.limit;
                self.model.data = crate::model::DataModel::new(resource, limit);
                self.model.table = TableView::for_resource(resource);
                self.model.ui.load_error = None;
                self.model.screen = Screen::Resource;
                self.request_current_page(Priority::High);
            }
        }
    }

    /// Re-fetch the current page (interaction state is deliberately kept)
    pub fn refresh(&mut self) {
        self.request_current_page(Priority::Medium);
    }

    pub fn next_resource(&mut self) {
        self.open_resource(self.model.data.resource.next());
    }

    pub fn prev_resource(&mut self) {
        self.open_resource(self.model.data.resource.prev());
    }

    pub fn next_page(&mut self) {
        if self.model.data.window.set_page(self.model.data.window.page + 1) {
            self.request_current_page(Priority::High);
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.model.data.window.page;
        if page > 1 && self.model.data.window.set_page(page - 1) {
            self.request_current_page(Priority::High);
        }
    }

    /// Change rows-per-page; always lands back on page 1
    pub fn set_page_size(&mut self, limit: u32) {
        self.model.data.window.set_limit(limit);
        self.request_current_page(Priority::High);
    }

    /// Submit the login form; empty fields fail inline without a round-trip
    pub fn submit_login(&mut self) {
        let form = &mut self.model.ui.login;
        if form.email.trim().is_empty() || form.password.is_empty() {
            form.error = Some("Email and password are required".to_string());
            return;
        }
        form.error = None;
        form.submitting = true;
        let _ = self.api_tx.send(ApiRequest::Login {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        });
    }

    /// Tear down the session and return to the login screen
    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            self.model.show_toast(format!("Error: {}", e));
            return;
        }
        self.client.set_token(None);
        self.model.screen = Screen::Login;
        self.model.ui.login.password.clear();
        self.model.show_toast("Signed out".to_string());
    }

    /// Resource to land on after a successful sign-in
    pub fn post_login_resource(&mut self) -> Resource {
        self.model
            .ui
            .pending_resource
            .take()
            .unwrap_or(self.model.data.resource)
    }
}
