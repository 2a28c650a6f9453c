//! Stand-in backend used when no API URL is configured. Auth calls wait and
//! then succeed at a configured rate; dashboard calls always resolve with a
//! fixed payload.

use super::{Endpoint, RemoteCall, RemoteError, RemoteRequest};
use crate::{config::SimulationConfig, dashboard::metrics::DashboardMetrics};
use async_trait::async_trait;
use rand::Rng;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    config: SimulationConfig,
}

impl SimulatedBackend {
    #[must_use]
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn latency(&self, endpoint: Endpoint) -> Duration {
        match endpoint {
            Endpoint::Login | Endpoint::Register => self.config.auth_latency,
            Endpoint::DashboardData => self.config.data_latency,
            Endpoint::ApplyFilter => self.config.filter_latency,
            Endpoint::CreatePromoCode | Endpoint::CreateCampaign => Duration::ZERO,
        }
    }

    fn auth_outcome(&self) -> Result<Value, RemoteError> {
        let rate = self.config.auth_success_rate;
        let rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
        if rand::thread_rng().gen_bool(rate) {
            Ok(json!({ "ok": true }))
        } else {
            Err(RemoteError::Rejected("API Error".to_string()))
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[async_trait]
impl RemoteCall for SimulatedBackend {
    #[instrument(skip_all, fields(endpoint = %request.endpoint))]
    async fn invoke(&self, request: RemoteRequest) -> Result<Value, RemoteError> {
        let latency = self.latency(request.endpoint);
        debug!("simulating {latency:?} of latency");
        tokio::time::sleep(latency).await;

        match request.endpoint {
            Endpoint::Login | Endpoint::Register => self.auth_outcome(),
            Endpoint::DashboardData => serde_json::to_value(DashboardMetrics::sample())
                .map_err(|err| RemoteError::Parse(err.to_string())),
            Endpoint::ApplyFilter => Ok(json!({ "applied": true, "range": request.body })),
            Endpoint::CreatePromoCode | Endpoint::CreateCampaign => {
                Ok(json!({ "created": true }))
            }
        }
    }
}
