//! Remote call abstraction. Controllers issue every backend request through
//! [`RemoteCall`], so production code can plug in a real HTTP client while
//! tests plug in a deterministic fake. Request bodies may carry user input;
//! implementations must never log them.

pub mod http;
pub mod simulated;

pub use self::http::HttpRemoteCall;
pub use self::simulated::SimulatedBackend;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Login,
    Register,
    DashboardData,
    ApplyFilter,
    CreatePromoCode,
    CreateCampaign,
}

impl Endpoint {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/v1/auth/login",
            Self::Register => "/v1/auth/register",
            Self::DashboardData => "/v1/dashboard/metrics",
            Self::ApplyFilter => "/v1/dashboard/filter",
            Self::CreatePromoCode => "/v1/marketing/promo-codes",
            Self::CreateCampaign => "/v1/marketing/campaigns",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoteRequest {
    pub endpoint: Endpoint,
    pub body: Value,
}

impl RemoteRequest {
    #[must_use]
    pub const fn new(endpoint: Endpoint, body: Value) -> Self {
        Self { endpoint, body }
    }

    #[must_use]
    pub const fn empty(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            body: Value::Null,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The backend answered and refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("response error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Issues one request and waits for it to settle.
    ///
    /// # Errors
    /// Returns [`RemoteError`] when the call is rejected or cannot complete.
    async fn invoke(&self, request: RemoteRequest) -> Result<Value, RemoteError>;
}
