//! Session lifecycle
//!
//! An explicitly constructed session object passed down from `main`, with no
//! module-level singletons. Startup loads the persisted token and resolves
//! the current user once; logout tears both down. The guard decisions
//! themselves live in [`crate::logic::session`].

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::api::User;
use crate::logic::session::AuthSnapshot;

#[derive(Debug, Clone)]
pub struct Session {
    token_path: PathBuf,
    token: Option<String>,
    user: Option<User>,
    /// True until the startup user fetch resolves (either way)
    loading: bool,
}

impl Session {
    pub fn new(token_path: PathBuf) -> Self {
        Self {
            token_path,
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Read the persisted token, if any. Keeps `loading` set: the token
    /// alone proves nothing until the current-user fetch validates it.
    pub fn load_persisted_token(&mut self) -> Option<String> {
        let token = fs::read_to_string(&self.token_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.token = token.clone();
        token
    }

    /// Resolve the startup user fetch. `None` means the token was absent,
    /// expired, or rejected; the session settles signed-out.
    pub fn resolve(&mut self, user: Option<User>) {
        if user.is_none() {
            self.token = None;
        }
        self.user = user;
        self.loading = false;
    }

    /// Install a fresh login: persist the token and populate the user
    pub fn establish(&mut self, token: String, user: User) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.token_path, &token)
            .with_context(|| format!("Failed to persist token to {}", self.token_path.display()))?;

        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
        Ok(())
    }

    /// Clear the persisted token and all session state
    pub fn logout(&mut self) -> Result<()> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)
                .with_context(|| format!("Failed to remove {}", self.token_path.display()))?;
        }
        self.token = None;
        self.user = None;
        self.loading = false;
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Capability flags for guard checks
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            authenticated: self.user.is_some(),
            admin: self.user.as_ref().map(|u| u.is_admin).unwrap_or(false),
            staff: self.user.as_ref().map(|u| u.is_staff).unwrap_or(false),
            loading: self.loading,
        }
    }
}
