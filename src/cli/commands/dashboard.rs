use crate::dashboard::{marketing::Modal, tabs::Tab};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, builder::ValueParser};
use std::collections::BTreeMap;

pub const CMD_DASHBOARD: &str = "dashboard";

pub const ARG_SECTION: &str = "section";
pub const ARG_TAB: &str = "tab";
pub const ARG_START_DATE: &str = "start-date";
pub const ARG_END_DATE: &str = "end-date";
pub const ARG_PROMO_CODE: &str = "promo-code";
pub const ARG_CAMPAIGN: &str = "campaign";
pub const ARG_FIELD: &str = "field";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub section: Option<String>,
    pub tabs: Vec<Tab>,
    /// Raw inputs of the filter bar; `None` skips the filter.
    pub filter: Option<(String, String)>,
    pub modal: Option<Modal>,
    pub fields: BTreeMap<String, String>,
}

impl Options {
    /// Parse dashboard arguments from matches.
    ///
    /// # Errors
    /// Returns an error if a `--field` value is not `key=value`.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let start = matches.get_one::<String>(ARG_START_DATE).cloned();
        let end = matches.get_one::<String>(ARG_END_DATE).cloned();
        let filter = match (start, end) {
            (None, None) => None,
            (start, end) => Some((start.unwrap_or_default(), end.unwrap_or_default())),
        };

        let modal = if matches.get_flag(ARG_PROMO_CODE) {
            Some(Modal::PromoCode)
        } else if matches.get_flag(ARG_CAMPAIGN) {
            Some(Modal::Campaign)
        } else {
            None
        };

        let fields = matches
            .get_many::<String>(ARG_FIELD)
            .into_iter()
            .flatten()
            .map(|pair| {
                pair.split_once('=')
                    .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                    .with_context(|| format!("invalid --{ARG_FIELD} {pair}, expected key=value"))
            })
            .collect::<anyhow::Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            section: matches.get_one::<String>(ARG_SECTION).cloned(),
            tabs: matches
                .get_many::<Tab>(ARG_TAB)
                .into_iter()
                .flatten()
                .copied()
                .collect(),
            filter,
            modal,
            fields,
        })
    }
}

fn validator_tab() -> ValueParser {
    ValueParser::from(|tab: &str| tab.parse::<Tab>())
}

#[must_use]
pub fn dashboard() -> Command {
    Command::new(CMD_DASHBOARD)
        .about("Load the dashboard and drive its controls")
        .arg(
            Arg::new(ARG_SECTION)
                .long(ARG_SECTION)
                .help("Sidebar section to open, e.g. marketing"),
        )
        .arg(
            Arg::new(ARG_TAB)
                .long(ARG_TAB)
                .help("Tab to activate: gerais, detalhes, codigos, campanhas")
                .action(ArgAction::Append)
                .value_parser(validator_tab()),
        )
        .arg(
            Arg::new(ARG_START_DATE)
                .long(ARG_START_DATE)
                .help("Filter start date (yyyy-mm-dd)"),
        )
        .arg(
            Arg::new(ARG_END_DATE)
                .long(ARG_END_DATE)
                .help("Filter end date (yyyy-mm-dd)"),
        )
        .arg(
            Arg::new(ARG_PROMO_CODE)
                .long(ARG_PROMO_CODE)
                .help("Open and submit the promo code modal")
                .action(ArgAction::SetTrue)
                .conflicts_with(ARG_CAMPAIGN),
        )
        .arg(
            Arg::new(ARG_CAMPAIGN)
                .long(ARG_CAMPAIGN)
                .help("Open and submit the campaign modal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_FIELD)
                .long(ARG_FIELD)
                .help("Modal input as key=value")
                .action(ArgAction::Append),
        )
}
