use crate::config::{DEFAULT_BASE_URL, SimulationConfig};
use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;
use url::Url;

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_API_URL: &str = "api-url";
pub const ARG_AUTH_LATENCY_MS: &str = "auth-latency-ms";
pub const ARG_AUTH_SUCCESS_RATE: &str = "auth-success-rate";
pub const ARG_DATA_LATENCY_MS: &str = "data-latency-ms";
pub const ARG_FILTER_LATENCY_MS: &str = "filter-latency-ms";
pub const ARG_REDIRECT_DELAY_MS: &str = "redirect-delay-ms";

#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: Url,
    pub api_url: Option<Url>,
    pub simulation: SimulationConfig,
    pub redirect_delay: Duration,
}

impl Options {
    /// Parse page and backend arguments from matches.
    ///
    /// # Errors
    /// Returns an error if a URL does not parse or a value is out of range.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let base_url = matches
            .get_one::<String>(ARG_BASE_URL)
            .map_or(DEFAULT_BASE_URL, String::as_str);
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid --{ARG_BASE_URL}: {base_url}"))?;

        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .filter(|v| !v.trim().is_empty())
            .map(|v| Url::parse(v).with_context(|| format!("invalid --{ARG_API_URL}: {v}")))
            .transpose()?;

        let millis = |id: &str, fallback: Duration| {
            matches
                .get_one::<u64>(id)
                .copied()
                .map_or(fallback, Duration::from_millis)
        };

        let defaults = SimulationConfig::default();
        let auth_success_rate = matches
            .get_one::<f64>(ARG_AUTH_SUCCESS_RATE)
            .copied()
            .unwrap_or(defaults.auth_success_rate);
        if !(0.0..=1.0).contains(&auth_success_rate) {
            anyhow::bail!("--{ARG_AUTH_SUCCESS_RATE} must be between 0 and 1");
        }

        Ok(Self {
            base_url,
            api_url,
            simulation: SimulationConfig {
                auth_latency: millis(ARG_AUTH_LATENCY_MS, defaults.auth_latency),
                auth_success_rate,
                data_latency: millis(ARG_DATA_LATENCY_MS, defaults.data_latency),
                filter_latency: millis(ARG_FILTER_LATENCY_MS, defaults.filter_latency),
            },
            redirect_delay: millis(ARG_REDIRECT_DELAY_MS, crate::config::REDIRECT_DELAY),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .long(ARG_BASE_URL)
                .help("Base URL the pages are served from")
                .env("PAINEL_BASE_URL")
                .global(true)
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Backend API URL; the simulated backend is used when unset")
                .env("PAINEL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_AUTH_LATENCY_MS)
                .long(ARG_AUTH_LATENCY_MS)
                .help("Simulated latency of login and registration calls")
                .env("PAINEL_AUTH_LATENCY_MS")
                .global(true)
                .default_value("2000")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_AUTH_SUCCESS_RATE)
                .long(ARG_AUTH_SUCCESS_RATE)
                .help("Probability that a simulated auth call succeeds")
                .env("PAINEL_AUTH_SUCCESS_RATE")
                .global(true)
                .default_value("0.9")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new(ARG_DATA_LATENCY_MS)
                .long(ARG_DATA_LATENCY_MS)
                .help("Simulated latency of dashboard data calls")
                .env("PAINEL_DATA_LATENCY_MS")
                .global(true)
                .default_value("800")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_FILTER_LATENCY_MS)
                .long(ARG_FILTER_LATENCY_MS)
                .help("Simulated latency of date filter calls")
                .env("PAINEL_FILTER_LATENCY_MS")
                .global(true)
                .default_value("1500")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_REDIRECT_DELAY_MS)
                .long(ARG_REDIRECT_DELAY_MS)
                .help("Delay before navigating after a successful submission")
                .env("PAINEL_REDIRECT_DELAY_MS")
                .global(true)
                .default_value("1500")
                .value_parser(clap::value_parser!(u64)),
        )
}
