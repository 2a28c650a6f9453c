//! Sidebar sections.

use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Usuarios,
    Financeiro,
    Boosters,
    Marketing,
    Configuracoes,
    Suporte,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::Usuarios,
        Self::Financeiro,
        Self::Boosters,
        Self::Marketing,
        Self::Configuracoes,
        Self::Suporte,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Usuarios => "usuarios",
            Self::Financeiro => "financeiro",
            Self::Boosters => "boosters",
            Self::Marketing => "marketing",
            Self::Configuracoes => "configuracoes",
            Self::Suporte => "suporte",
        }
    }

    /// Identifier of the content container for this section.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{}-section", self.name())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

/// Which sidebar item is highlighted and which section is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionState {
    pub active_item: String,
    /// `None` when the active item names no known section.
    pub visible: Option<Section>,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            active_item: Section::Dashboard.name().to_string(),
            visible: Some(Section::Dashboard),
        }
    }
}

impl SectionState {
    /// Highlights `item` and shows its section, hiding every other one.
    pub fn navigate(&mut self, item: &str) {
        self.active_item = item.to_string();
        self.visible = item.parse().ok();
    }
}
