//! Client for the external authentication service.
//!
//! The panel does not implement any auth protocol itself: credentials, OTP
//! delivery and password resets are all handled by the auth service, and the
//! JWT it issues is verified with the shared secret on each request.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("auth service rejected the request: {0}")]
    Rejected(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Outcome envelope returned by the OTP and password endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginResponse>;
    async fn send_otp(&self, email: &str) -> AuthResult<AuthStatus>;
    async fn verify_email(&self, email: &str, otp: &str) -> AuthResult<AuthStatus>;
    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> AuthResult<AuthStatus>;
}

/// Reqwest-backed implementation talking to the auth service REST API.
#[derive(Clone)]
pub struct HttpAuthApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> AuthResult<T> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(format!(
                "{path} returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> AuthResult<LoginResponse> {
        self.post_json(
            "/auth/login/",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn send_otp(&self, email: &str) -> AuthResult<AuthStatus> {
        self.post_json("/auth/send_otp/", &json!({ "email": email }))
            .await
    }

    async fn verify_email(&self, email: &str, otp: &str) -> AuthResult<AuthStatus> {
        self.post_json("/auth/verify_email/", &json!({ "email": email, "otp": otp }))
            .await
    }

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> AuthResult<AuthStatus> {
        self.post_json(
            "/auth/reset-password",
            &json!({ "email": email, "otp": otp, "new_password": new_password }),
        )
        .await
    }
}
