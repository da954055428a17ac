//! Shared HTTP client for the Live Radio backend service.
//!
//! Thin wrapper around `reqwest::Client` that centralizes the user agent,
//! timeouts, the service base URL and bearer authentication.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config,
    error::{Result, StorageError},
    management::SessionManager,
    types::{ApiMessage, SessionInfo, SignInRequest, SignInResponse},
};

#[derive(Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    sessions: SessionManager,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, sessions: SessionManager) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(config::USER_AGENT)
            .connect_timeout(Duration::from_secs(config::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// GET `path` with the current session and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.authorized(self.inner.get(self.url(path))).await?;
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST `body` as JSON to `path` with the current session.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self
            .authorized(self.inner.post(self.url(path)).json(body))
            .await?;
        Self::check(request.send().await?).await?;
        Ok(())
    }

    /// DELETE `path` with `query` and the current session.
    pub async fn delete<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<()> {
        let request = self
            .authorized(self.inner.delete(self.url(path)).query(query))
            .await?;
        Self::check(request.send().await?).await?;
        Ok(())
    }

    /// Exchanges a user name and the service access key for a session token.
    pub async fn sign_in(&self, user: &str, key: &str) -> Result<SignInResponse> {
        let body = SignInRequest {
            user: user.to_string(),
            key: key.to_string(),
        };
        let response = self
            .inner
            .post(self.url("/api/auth/sign-in"))
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<SignInResponse>().await?)
    }

    /// Asks the service whether the stored session is still known to it.
    pub async fn session_info(&self) -> Result<SessionInfo> {
        self.get_json("/api/auth/session").await
    }

    pub async fn sign_out(&self) -> Result<()> {
        let request = self
            .authorized(self.inner.delete(self.url("/api/auth/session")))
            .await?;
        Self::check(request.send().await?).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match self.sessions.load_valid().await? {
            Some(session) => Ok(request.bearer_auth(session.token)),
            None => Err(StorageError::Unauthenticated),
        }
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&text)
            .map(|m| m.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        Err(StorageError::Rejected { status, message })
    }
}
