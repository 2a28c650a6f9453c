use crate::auth::SocialProvider;
use clap::{Arg, ArgAction, ArgMatches, Command, builder::ValueParser};
use secrecy::SecretString;

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_STRENGTH: &str = "strength";
pub const CMD_SOCIAL: &str = "social";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_REMEMBER: &str = "remember";
pub const ARG_ACCEPT_TERMS: &str = "accept-terms";
pub const ARG_PROVIDER: &str = "provider";

/// Raw form input; validation happens in the workflow, not here.
#[derive(Debug, Clone)]
pub struct LoginOptions {
    pub email: String,
    pub password: SecretString,
    pub remember: bool,
}

impl LoginOptions {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            email: string(matches, ARG_EMAIL),
            password: secret(matches, ARG_PASSWORD),
            remember: matches.get_flag(ARG_REMEMBER),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterOptions {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accept_terms: bool,
}

impl RegisterOptions {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            name: string(matches, ARG_NAME),
            email: string(matches, ARG_EMAIL),
            password: secret(matches, ARG_PASSWORD),
            confirm_password: secret(matches, ARG_CONFIRM_PASSWORD),
            accept_terms: matches.get_flag(ARG_ACCEPT_TERMS),
        }
    }
}

fn string(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(string(matches, id))
}

fn validator_provider() -> ValueParser {
    ValueParser::from(|provider: &str| provider.parse::<SocialProvider>())
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .long(ARG_EMAIL)
        .help("Email address")
        .env("PAINEL_EMAIL")
        .default_value("")
        .hide_default_value(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Password")
        .env("PAINEL_PASSWORD")
        .hide_env_values(true)
        .default_value("")
        .hide_default_value(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Submit the sign-in form")
        .arg(email_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_REMEMBER)
                .long(ARG_REMEMBER)
                .help("Remember this login")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Submit the registration form")
        .arg(
            Arg::new(ARG_NAME)
                .long(ARG_NAME)
                .help("Full name")
                .default_value("")
                .hide_default_value(true),
        )
        .arg(email_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password confirmation")
                .env("PAINEL_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .default_value("")
                .hide_default_value(true),
        )
        .arg(
            Arg::new(ARG_ACCEPT_TERMS)
                .long(ARG_ACCEPT_TERMS)
                .help("Accept the terms and conditions")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn strength() -> Command {
    Command::new(CMD_STRENGTH)
        .about("Show live password feedback")
        .arg(
            Arg::new(ARG_PASSWORD)
                .help("Password to score")
                .env("PAINEL_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[must_use]
pub fn social() -> Command {
    Command::new(CMD_SOCIAL)
        .about("Press a social login button")
        .arg(
            Arg::new(ARG_PROVIDER)
                .help("google or github")
                .required(true)
                .value_parser(validator_provider()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [("PAINEL_EMAIL", None::<&str>), ("PAINEL_PASSWORD", None)],
            || {
                let matches = login().get_matches_from(vec![
                    "login",
                    "--email",
                    "user@example.com",
                    "--password",
                    "Passw0rd",
                ]);
                let options = LoginOptions::parse(&matches);
                assert_eq!(options.email, "user@example.com");
                assert_eq!(options.password.expose_secret(), "Passw0rd");
                assert!(!options.remember);
            },
        );
    }

    #[test]
    fn test_password_from_env() {
        temp_env::with_vars([("PAINEL_PASSWORD", Some("S3cretPass"))], || {
            let matches = login().get_matches_from(vec!["login", "--remember"]);
            let options = LoginOptions::parse(&matches);
            assert_eq!(options.password.expose_secret(), "S3cretPass");
            assert!(options.remember);
        });
    }

    #[test]
    fn test_register_defaults_to_empty_fields() {
        temp_env::with_vars(
            [
                ("PAINEL_EMAIL", None::<&str>),
                ("PAINEL_PASSWORD", None),
                ("PAINEL_CONFIRM_PASSWORD", None),
            ],
            || {
                let matches = register().get_matches_from(vec!["register"]);
                let options = RegisterOptions::parse(&matches);
                assert!(options.name.is_empty());
                assert!(options.confirm_password.expose_secret().is_empty());
                assert!(!options.accept_terms);
            },
        );
    }

    #[test]
    fn test_social_provider() {
        let matches = social().get_matches_from(vec!["social", "GitHub"]);
        assert_eq!(
            matches.get_one::<SocialProvider>(ARG_PROVIDER).copied(),
            Some(SocialProvider::Github)
        );
        assert!(social().try_get_matches_from(vec!["social", "orkut"]).is_err());
    }
}
