use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a snapshot came from. Demo data is flagged so the UI can say so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Api,
    Mock,
}

/// Flat company record as returned by the company registry.
/// Keys follow the registry's PascalCase naming so stored JSON stays compatible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanySnapshot {
    pub tax_code: String,
    pub name: String,
    /// "Active" / "Inactive"
    pub status: String,
    /// VAT registration status, "Active" / "Inactive"
    pub fiscal_activity: String,
    pub legal_form: String,
    #[serde(rename = "Date")]
    pub registration_date: String,
    pub county: String,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "NACE")]
    pub nace: String,
    /// lei
    pub turnover: i64,
    /// lei
    pub profit: i64,
    pub employees: u32,
    #[serde(rename = "_source", default)]
    pub source: DataSource,
}

impl CompanySnapshot {
    pub fn company_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown Company"
        } else {
            &self.name
        }
    }

    pub fn using_mock_data(&self) -> bool {
        self.source == DataSource::Mock
    }

    pub fn data_source_info(&self) -> &'static str {
        if self.using_mock_data() {
            "⚠️ Demo Data - API service unavailable"
        } else {
            "✅ Live API Data"
        }
    }
}

/// A stored company: the latest registry snapshot for one CUI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub cui: String,
    pub snapshot: CompanySnapshot,
    pub updated_at: DateTime<Utc>,
}
