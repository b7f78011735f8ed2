use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::model::types::Record;
use crate::resources::Resource;

/// Current user as reported by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(default, rename = "isStaff")]
    pub is_staff: bool,
}

/// Paging envelope on list responses; `total_items` is authoritative for
/// page-count math when paging is server-driven
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationMeta {
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    pub limit: u32,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Error body the backend returns for failed requests, including server-side
/// validation: an aggregate message plus per-field detail lines
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> String {
        if self.details.is_empty() {
            self.message
        } else {
            format!("{}: {}", self.message, self.details.join("; "))
        }
    }
}

/// JSON REST client for the CMS backend.
///
/// The bearer token lives behind a shared lock so the UI thread and the API
/// worker observe login/logout immediately through their clones.
#[derive(Clone)]
pub struct CmsClient {
    base_url: String,
    client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl CmsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match self.bearer() {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Turn a non-success response into an error carrying the backend's
    /// message and validation details
    async fn fail(response: reqwest::Response, what: &str) -> anyhow::Error {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => anyhow::anyhow!("{} failed: {}", what, body.into_message()),
            Err(_) => anyhow::anyhow!("{} failed: {} - {}", what, status, text),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let payload = serde_json::json!({ "email": email, "password": password });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach login endpoint")?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "Login").await);
        }

        response.json().await.context("Failed to parse login response")
    }

    /// Fetch the user the persisted token belongs to (session startup)
    pub async fn current_user(&self) -> Result<User> {
        let url = format!("{}/auth/me", self.base_url);
        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .context("Failed to fetch current user")?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "Session check").await);
        }

        response.json().await.context("Failed to parse current user")
    }

    /// Paged list: `GET /{resource}?page=N&limit=M[&search=...]`
    pub async fn list(
        &self,
        resource: Resource,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<ListResponse> {
        let mut url = format!(
            "{}/{}?page={}&limit={}",
            self.base_url,
            resource.path(),
            page,
            limit
        );
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            url.push_str(&format!("&search={}", urlencoding::encode(search)));
        }

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .with_context(|| format!("Failed to list {}", resource.path()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, resource.title()).await);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} list", resource.path()))
    }

    pub async fn get(&self, resource: Resource, id: &str) -> Result<Record> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            resource.path(),
            urlencoding::encode(id)
        );
        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {} {}", resource.path(), id))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, resource.title()).await);
        }

        response.json().await.context("Failed to parse record")
    }

    pub async fn delete(&self, resource: Resource, id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            resource.path(),
            urlencoding::encode(id)
        );
        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .with_context(|| format!("Failed to delete {} {}", resource.path(), id))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "Delete").await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_aggregation() {
        let body = ApiErrorBody {
            message: "Validation failed".to_string(),
            details: vec!["name is required".to_string(), "price must be positive".to_string()],
        };
        assert_eq!(
            body.into_message(),
            "Validation failed: name is required; price must be positive"
        );

        let bare = ApiErrorBody {
            message: "Not found".to_string(),
            details: vec![],
        };
        assert_eq!(bare.into_message(), "Not found");
    }

    #[test]
    fn test_token_visible_across_clones() {
        let client = CmsClient::new("http://localhost:5000/api".to_string());
        let clone = client.clone();

        client.set_token(Some("abc".to_string()));
        assert_eq!(clone.bearer().as_deref(), Some("abc"));

        clone.set_token(None);
        assert!(client.bearer().is_none());
    }
}
