//! HTTP adapter for the three backend endpoints.
//!
//! Each method issues exactly one request — no retries, no timeouts beyond
//! the client defaults. Non-success statuses classify through
//! [`ApiError::from_status`]; `/register` is stricter and accepts only 201.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::ApiError;

/// Username/password pair exactly as submitted; no client-side validation.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Profile returned by `/me`. Only the username is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: BackendConfig,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// `POST /register` — create an account. Succeeds only on HTTP 201.
    ///
    /// # Errors
    ///
    /// Any non-201 status classifies via [`ApiError::from_status`]; transport
    /// failures surface as [`ApiError::Network`].
    pub async fn register(&self, creds: &Credentials) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/register"))
            .json(creds)
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "register response");
        if status == StatusCode::CREATED {
            Ok(())
        } else {
            Err(ApiError::from_status(status))
        }
    }

    /// `POST /login` — exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Non-2xx statuses classify via [`ApiError::from_status`]; a success
    /// body without a usable `token` field is [`ApiError::Decode`].
    pub async fn login(&self, creds: &Credentials) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/login"))
            .json(creds)
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "login response");
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }
        let body: TokenResponse = response.json().await.map_err(ApiError::Decode)?;
        Ok(body.token)
    }

    /// `GET /me` — fetch the profile for the given bearer value.
    ///
    /// The caller supplies the value verbatim; a session without a token
    /// sends the literal `Bearer null`.
    ///
    /// # Errors
    ///
    /// Non-2xx statuses classify via [`ApiError::from_status`]; an
    /// undecodable body is [`ApiError::Decode`].
    pub async fn current_user(&self, bearer_value: &str) -> Result<CurrentUser, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint("/me"))
            .header(AUTHORIZATION, format!("Bearer {bearer_value}"))
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "current-user response");
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }
        response.json().await.map_err(ApiError::Decode)
    }
}
