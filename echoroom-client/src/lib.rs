//! Thin typed client for the EchoRoom REST API.
//!
//! One async method per endpoint. Success bodies arrive as a `{ "data": … }`
//! envelope; failures carry a human-readable `{ "message": … }` which is
//! preserved on [`ApiError::Server`] so views can show it verbatim.

use echoroom_common::{FriendRequest, OnboardingProfile, SignupRequest, User, UserId};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// What a view should display: the backend's `message` verbatim for
    /// server failures, the error display otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject non-success responses, pulling the server's `message` out of
    /// the error body when it has the expected shape.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let resp = Self::check(resp).await?;
        let envelope: Envelope<T> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {e}")))?;
        Ok(envelope.data)
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<User, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/signup"))
            .json(req)
            .send()
            .await?;
        Self::parse(resp).await
    }

    pub async fn complete_onboarding(&self, profile: &OnboardingProfile) -> Result<User, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/onboarding"))
            .json(profile)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// The current session's user. A 401 means "no session" and maps to
    /// `Ok(None)` rather than an error.
    pub async fn auth_user(&self) -> Result<Option<User>, ApiError> {
        let resp = self.http.get(self.url("/auth/me")).send().await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        Self::parse(resp).await.map(Some)
    }

    pub async fn friends(&self) -> Result<Vec<User>, ApiError> {
        let resp = self.http.get(self.url("/users/friends")).send().await?;
        Self::parse(resp).await
    }

    pub async fn recommended_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self.http.get(self.url("/users")).send().await?;
        Self::parse(resp).await
    }

    pub async fn outgoing_friend_requests(&self) -> Result<Vec<FriendRequest>, ApiError> {
        let resp = self
            .http
            .get(self.url("/users/outgoing-friend-requests"))
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Ask the backend to record a friend request to `recipient`. The
    /// response payload is ignored; callers refetch the outgoing list.
    pub async fn send_friend_request(&self, recipient: &UserId) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/users/friend-request/{recipient}")))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
