//! Tab groups. Each group has exactly one active tab.

use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabGroup {
    Dashboard,
    Marketing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Gerais,
    Detalhes,
    Codigos,
    Campanhas,
}

impl Tab {
    #[must_use]
    pub const fn group(self) -> TabGroup {
        match self {
            Self::Gerais | Self::Detalhes => TabGroup::Dashboard,
            Self::Codigos | Self::Campanhas => TabGroup::Marketing,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gerais => "gerais",
            Self::Detalhes => "detalhes",
            Self::Codigos => "codigos",
            Self::Campanhas => "campanhas",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gerais" => Ok(Self::Gerais),
            "detalhes" => Ok(Self::Detalhes),
            "codigos" => Ok(Self::Codigos),
            "campanhas" => Ok(Self::Campanhas),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TabState {
    pub dashboard: Tab,
    pub marketing: Tab,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            dashboard: Tab::Gerais,
            marketing: Tab::Codigos,
        }
    }
}

impl TabState {
    /// Activates `tab` within its own group; the other group is untouched.
    pub fn select(&mut self, tab: Tab) {
        match tab.group() {
            TabGroup::Dashboard => self.dashboard = tab,
            TabGroup::Marketing => self.marketing = tab,
        }
    }

    #[must_use]
    pub const fn active(&self, group: TabGroup) -> Tab {
        match group {
            TabGroup::Dashboard => self.dashboard,
            TabGroup::Marketing => self.marketing,
        }
    }
}
