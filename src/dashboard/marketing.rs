//! Marketing modals: promo codes and campaigns.

use super::tabs::{Tab, TabGroup, TabState};
use crate::remote::{Endpoint, RemoteRequest};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    PromoCode,
    Campaign,
}

impl Modal {
    /// Marketing tab that must be active for the add button to open this modal.
    #[must_use]
    pub const fn required_tab(self) -> Tab {
        match self {
            Self::PromoCode => Tab::Codigos,
            Self::Campaign => Tab::Campanhas,
        }
    }

    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::PromoCode => Endpoint::CreatePromoCode,
            Self::Campaign => Endpoint::CreateCampaign,
        }
    }

    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::PromoCode => "Código promocional criado com sucesso!",
            Self::Campaign => "Campanha criada com sucesso!",
        }
    }

    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::PromoCode => "Não foi possível criar o código promocional",
            Self::Campaign => "Não foi possível criar a campanha",
        }
    }

    #[must_use]
    pub fn can_open(self, tabs: &TabState) -> bool {
        tabs.active(TabGroup::Marketing) == self.required_tab()
    }
}

/// Free-form modal inputs, submitted as a flat JSON object.
#[must_use]
pub fn request(modal: Modal, fields: &BTreeMap<String, String>) -> RemoteRequest {
    let body: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.trim().to_string())))
        .collect();
    RemoteRequest::new(modal.endpoint(), Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_buttons_follow_active_tab() {
        let mut tabs = TabState::default();
        assert!(Modal::PromoCode.can_open(&tabs));
        assert!(!Modal::Campaign.can_open(&tabs));

        tabs.select(Tab::Campanhas);
        assert!(!Modal::PromoCode.can_open(&tabs));
        assert!(Modal::Campaign.can_open(&tabs));
    }

    #[test]
    fn request_trims_values() {
        let fields = BTreeMap::from([
            ("code".to_string(), " BEMVINDO10 ".to_string()),
            ("discount".to_string(), "10".to_string()),
        ]);
        let request = request(Modal::PromoCode, &fields);
        assert_eq!(request.endpoint, Endpoint::CreatePromoCode);
        assert_eq!(request.body["code"], "BEMVINDO10");
    }
}
