//! HTTP client for the platform REST API.
//!
//! All endpoints answer with the same `{success, message, data}` envelope;
//! `ApiClient` sends requests, unwraps the envelope and maps every failure
//! onto [`ApiError`]. It performs exactly one attempt per call: no retry,
//! no timeout, no circuit breaking.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::response::Envelope;
use crate::api::{ApiError, ApiResult};
use crate::auth::Session;

/// Base URL of a locally running platform backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// API client for the platform.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL. A call suspends until
    /// the server answers or the connection drops.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an unauthenticated request for a public endpoint.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Build a request carrying the session's `Authorization` header.
    /// Auth headers are applied first, so headers set afterwards by the
    /// caller take precedence.
    pub fn authed(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        self.request(method, path).headers(session.auth_headers())
    }

    /// Send a request and unwrap the envelope's `data` payload.
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let envelope = self.send(request).await?;
        envelope.data.ok_or_else(|| {
            ApiError::InvalidResponse("successful response carried no data".to_string())
        })
    }

    /// Send a request whose successful response carries no data payload.
    pub async fn execute_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        self.send::<serde_json::Value>(request).await.map(|_| ())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, "response received");

        if !status.is_success() {
            // Surface the server's own message when the body carries one.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error: {}", status.as_u16()));
            return Err(ApiError::Rejected {
                status: Some(status.as_u16()),
                message,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::Rejected {
                status: Some(status.as_u16()),
                message: envelope
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            });
        }

        Ok(envelope)
    }
}
