/// API client — the single point of entry for all backend calls.
///
/// Every request is a JSON `POST {base_url}{path}`. There is no retry, no
/// backoff, no caching and no auth header: one request per user action.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";
pub const GENERATE_RESUME_PATH: &str = "/resumes/generate";

const FALLBACK_API_MESSAGE: &str = "Failed to fetch data from server.";
const FALLBACK_NETWORK_MESSAGE: &str = "Network request failed.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// The text shown to the user: the server's `message` when there is one,
    /// otherwise the transport's own description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Http(e) => {
                let text = e.to_string();
                if text.is_empty() {
                    FALLBACK_NETWORK_MESSAGE.to_string()
                } else {
                    text
                }
            }
            ApiError::Parse(e) => e.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the `message` field from an error body, falling back to a
/// generic message when the body is not JSON or carries no message.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Transport seam
// ────────────────────────────────────────────────────────────────────────────

/// Moves one JSON body to the backend and returns the JSON reply.
///
/// `ApiClient` holds an `Arc<dyn ApiTransport>` so flows can be exercised
/// without a network.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            debug!("POST {url} failed with {status}: {message}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = response.json().await?;
        debug!("POST {url} succeeded with {status}");
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typed client
// ────────────────────────────────────────────────────────────────────────────

/// The backend client shared by every flow.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    /// Client that talks HTTP to `base_url` (e.g. `http://host:8088/api/v1`).
    pub fn http(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(base_url)?)))
    }

    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Serializes `body`, posts it to `path` and deserializes the reply.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let reply = self.transport.post_json(path, body).await?;
        serde_json::from_value(reply).map_err(ApiError::Parse)
    }
}
