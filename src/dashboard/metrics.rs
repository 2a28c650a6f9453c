//! Dashboard metrics payload. Values arrive preformatted for display.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub financial_metrics: FinancialMetrics,
    pub user_metrics: UserMetrics,
    pub performance_metrics: PerformanceMetrics,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub lucro_liquido: String,
    pub depositos_totais: String,
    pub total_perdas: String,
    pub saques_pendentes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub total_usuarios: String,
    pub usuarios_ativos: String,
    pub usuarios_vip: String,
    pub usuarios_depositaram: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub taxa_conversao: String,
    pub taxa_retencao: String,
    pub taxa_acerto: String,
}

impl DashboardMetrics {
    /// Fixed payload served by the simulated backend.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            financial_metrics: FinancialMetrics {
                lucro_liquido: "R$ -487,59".to_string(),
                depositos_totais: "R$ 2.299,59".to_string(),
                total_perdas: "R$ 509,58".to_string(),
                saques_pendentes: "R$ 0,00".to_string(),
            },
            user_metrics: UserMetrics {
                total_usuarios: "50".to_string(),
                usuarios_ativos: "50".to_string(),
                usuarios_vip: "0".to_string(),
                usuarios_depositaram: "13".to_string(),
            },
            performance_metrics: PerformanceMetrics {
                taxa_conversao: "22%".to_string(),
                taxa_retencao: "64.71%".to_string(),
                taxa_acerto: "52.27%".to_string(),
            },
        }
    }
}
