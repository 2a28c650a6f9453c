//! Runtime configuration shared by both controllers. Values come from the CLI
//! (with `PAINEL_*` environment fallbacks) and default to the timings the
//! pages have always used.

use std::{path::PathBuf, time::Duration};
use url::Url;

/// Delay between a successful submission and the navigation it triggers.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Default base URL pages are resolved against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: Url,
    /// Where the client-local key-value store lives; `None` keeps it in memory.
    pub storage_path: Option<PathBuf>,
    /// Real backend; when unset the simulated backend answers every call.
    pub api_url: Option<Url>,
    pub simulation: SimulationConfig,
    pub notifications: NotificationTimings,
    pub redirect_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            storage_path: None,
            api_url: None,
            simulation: SimulationConfig::default(),
            notifications: NotificationTimings::default(),
            redirect_delay: REDIRECT_DELAY,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_storage_path(mut self, path: Option<PathBuf>) -> Self {
        self.storage_path = path;
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: Option<Url>) -> Self {
        self.api_url = api_url;
        self
    }

    #[must_use]
    pub const fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    #[must_use]
    pub const fn with_notifications(mut self, timings: NotificationTimings) -> Self {
        self.notifications = timings;
        self
    }

    #[must_use]
    pub const fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}

fn default_base_url() -> Url {
    // Constant input, parsing cannot fail.
    Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("invalid default base url"))
}

/// Latency and outcome knobs for the simulated backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub auth_latency: Duration,
    /// Probability in `0.0..=1.0` that an auth call resolves.
    pub auth_success_rate: f64,
    pub data_latency: Duration,
    pub filter_latency: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(2000),
            auth_success_rate: 0.9,
            data_latency: Duration::from_millis(800),
            filter_latency: Duration::from_millis(1500),
        }
    }
}

/// Toast lifecycle timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Delay before the enter transition starts.
    pub enter: Duration,
    /// Time from insertion until the exit transition starts.
    pub display: Duration,
    /// Exit transition length; the toast is removed once it ends.
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(100),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(300),
        }
    }
}
