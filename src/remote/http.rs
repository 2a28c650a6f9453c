//! JSON-over-HTTP remote call with a fixed timeout. Non-2xx responses map to
//! [`RemoteError::Http`] with a trimmed, truncated body so messages are safe
//! to surface in a notification.

use super::{RemoteCall, RemoteError, RemoteRequest};
use crate::APP_USER_AGENT;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Default request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters kept in an error.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct HttpRemoteCall {
    client: Client,
    base_url: Url,
}

impl HttpRemoteCall {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: Url) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| RemoteError::Network(format!("failed to build client: {err}")))?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        build_url_with_base(self.base_url.as_str(), path)
    }
}

#[async_trait]
impl RemoteCall for HttpRemoteCall {
    #[instrument(skip_all, fields(endpoint = %request.endpoint))]
    async fn invoke(&self, request: RemoteRequest) -> Result<Value, RemoteError> {
        let url = self.url_for(request.endpoint.path());
        let response = self
            .client
            .post(&url)
            .json(&request.body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("remote call failed with status {status}");
            return Err(RemoteError::Http {
                status: status.as_u16(),
                message: sanitize_body(&body),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body = response
            .text()
            .await
            .map_err(|err| RemoteError::Parse(format!("failed to read response: {err}")))?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        debug!("remote call succeeded with status {status}");
        serde_json::from_str(&body)
            .map_err(|err| RemoteError::Parse(format!("failed to decode response: {err}")))
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Network("request timed out".to_string())
    } else {
        RemoteError::Network(err.to_string())
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
