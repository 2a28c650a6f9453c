use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_STORAGE_PATH: &str = "storage-path";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// In-memory storage when unset.
    pub path: Option<PathBuf>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<String>(ARG_STORAGE_PATH)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_STORAGE_PATH)
            .long(ARG_STORAGE_PATH)
            .help("JSON file holding the local session keys (rememberLogin, userEmail)")
            .env("PAINEL_STORAGE_PATH")
            .global(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_path() {
        temp_env::with_vars([("PAINEL_STORAGE_PATH", Some("/tmp/painel.json"))], || {
            let matches = with_args(Command::new("painel")).get_matches_from(vec!["painel"]);
            assert_eq!(
                Options::parse(&matches).path,
                Some(PathBuf::from("/tmp/painel.json"))
            );
        });
    }

    #[test]
    fn test_empty_storage_path_is_memory() {
        temp_env::with_vars([("PAINEL_STORAGE_PATH", Some(" "))], || {
            let matches = with_args(Command::new("painel")).get_matches_from(vec!["painel"]);
            assert_eq!(Options::parse(&matches).path, None);
        });
    }
}
