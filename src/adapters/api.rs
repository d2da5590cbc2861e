//! HTTP client for the storefront API.

use crate::error::{ApiError, ApiResult};
use crate::models::RawProfile;
use crate::traits::{NotificationService, ProfileService};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Response shape of `GET /notifications/count`.
#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u32,
}

/// Reusable client for the remote API, with optional Bearer auth.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the API, without trailing slash.
    pub base_url: String,
    client: Client,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            auth_token: None,
        }
    }

    /// Set the authentication token for Bearer auth.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Replace the authentication token on an existing client.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// The current authentication token, if set.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn add_auth_header(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref token) = self.auth_token {
            builder.header("Authorization", format!("Bearer {}", token))
        } else {
            builder
        }
    }

    /// GET `path` and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.add_auth_header(self.client.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Best-effort remote session invalidation (`POST /auth/logout`).
    pub async fn invalidate_session(&self) -> ApiResult<()> {
        if self.auth_token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        let url = format!("{}/auth/logout", self.base_url);
        let response = self.add_auth_header(self.client.post(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileService for ApiClient {
    async fn fetch_profile(&self) -> ApiResult<RawProfile> {
        self.get_json("/profile").await
    }
}

#[async_trait]
impl NotificationService for ApiClient {
    async fn fetch_notification_count(&self) -> ApiResult<u32> {
        let response: CountResponse = self.get_json("/notifications/count").await?;
        Ok(response.count)
    }
}
