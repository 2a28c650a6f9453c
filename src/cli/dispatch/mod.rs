//! Maps parsed arguments to an [`Action`], assembling the [`AppConfig`] from
//! the global option groups.

use crate::{
    auth::SocialProvider,
    cli::{
        actions::{Action, dashboard, login, register, social, strength},
        commands::{auth as auth_args, dashboard as dashboard_args, remote, storage},
    },
    config::AppConfig,
};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Builds the application config from the global options.
///
/// # Errors
/// Returns an error if a URL or a numeric option is invalid.
pub fn config(matches: &clap::ArgMatches) -> Result<AppConfig> {
    let remote = remote::Options::parse(matches)?;
    let storage = storage::Options::parse(matches);

    Ok(AppConfig::default()
        .with_base_url(remote.base_url)
        .with_api_url(remote.api_url)
        .with_simulation(remote.simulation)
        .with_redirect_delay(remote.redirect_delay)
        .with_storage_path(storage.path))
}

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = config(matches)?;

    match matches.subcommand() {
        Some((auth_args::CMD_LOGIN, sub)) => {
            let options = auth_args::LoginOptions::parse(sub);
            Ok(Action::Login(login::Args {
                config,
                email: options.email,
                password: options.password,
                remember: options.remember,
            }))
        }
        Some((auth_args::CMD_REGISTER, sub)) => {
            let options = auth_args::RegisterOptions::parse(sub);
            Ok(Action::Register(register::Args {
                config,
                name: options.name,
                email: options.email,
                password: options.password,
                confirm_password: options.confirm_password,
                accept_terms: options.accept_terms,
            }))
        }
        Some((auth_args::CMD_STRENGTH, sub)) => {
            let password = sub
                .get_one::<String>(auth_args::ARG_PASSWORD)
                .cloned()
                .context("missing required argument: <password>")?;
            Ok(Action::Strength(strength::Args {
                password: SecretString::from(password),
            }))
        }
        Some((auth_args::CMD_SOCIAL, sub)) => {
            let provider = sub
                .get_one::<SocialProvider>(auth_args::ARG_PROVIDER)
                .copied()
                .context("missing required argument: <provider>")?;
            Ok(Action::Social(social::Args { config, provider }))
        }
        Some((dashboard_args::CMD_DASHBOARD, sub)) => {
            let options = dashboard_args::Options::parse(sub)?;
            Ok(Action::Dashboard(dashboard::Args { config, options }))
        }
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("missing command"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;
    use std::time::Duration;

    fn clean_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(
            [
                ("PAINEL_LOG_LEVEL", None::<&str>),
                ("PAINEL_API_URL", None),
                ("PAINEL_STORAGE_PATH", None),
                ("PAINEL_EMAIL", None),
                ("PAINEL_PASSWORD", None),
                ("PAINEL_REDIRECT_DELAY_MS", None),
            ],
            f,
        )
    }

    #[test]
    fn login_action() -> Result<()> {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec![
                "painel",
                "--redirect-delay-ms",
                "10",
                "login",
                "--email",
                "user@example.com",
                "--password",
                "Passw0rd",
            ]);
            match handler(&matches)? {
                Action::Login(args) => {
                    assert_eq!(args.email, "user@example.com");
                    assert_eq!(args.password.expose_secret(), "Passw0rd");
                    assert_eq!(args.config.redirect_delay, Duration::from_millis(10));
                    assert_eq!(args.config.storage_path, None);
                }
                other => anyhow::bail!("unexpected action: {other:?}"),
            }
            Ok(())
        })
    }

    #[test]
    fn strength_action_keeps_password_secret() -> Result<()> {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec!["painel", "strength", "Passw0rd"]);
            let action = handler(&matches)?;
            assert!(!format!("{action:?}").contains("Passw0rd"));
            Ok(())
        })
    }

    #[test]
    fn dashboard_action() -> Result<()> {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec![
                "painel",
                "dashboard",
                "--section",
                "marketing",
                "--api-url",
                "http://127.0.0.1:9/",
            ]);
            match handler(&matches)? {
                Action::Dashboard(args) => {
                    assert_eq!(args.options.section.as_deref(), Some("marketing"));
                    assert!(args.config.api_url.is_some());
                }
                other => anyhow::bail!("unexpected action: {other:?}"),
            }
            Ok(())
        })
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        clean_env(|| {
            let matches = commands::new().get_matches_from(vec![
                "painel",
                "--api-url",
                "::nope::",
                "social",
                "google",
            ]);
            assert!(handler(&matches).is_err());
        });
    }
}
