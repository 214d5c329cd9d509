//! Company registry seam.
//!
//! Services depend on `CompanyRegistry`; the live registry client sits outside
//! this crate. `MockRegistry` generates demo snapshots, `StaticRegistry` serves
//! fixtures loaded from JSON.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::company::{CompanySnapshot, DataSource};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Company {0} not found in registry")]
    NotFound(String),

    #[error("Registry unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can look a company up by CUI. Carried as `Arc<dyn CompanyRegistry>`.
#[async_trait]
pub trait CompanyRegistry: Send + Sync {
    async fn fetch_company(&self, cui: &str) -> Result<CompanySnapshot, RegistryError>;
}

/// Trims whitespace and drops a leading `RO` VAT prefix.
pub fn clean_cui(cui: &str) -> &str {
    let cui = cui.trim();
    cui.strip_prefix("RO").unwrap_or(cui).trim_start()
}

// ────────────────────────────────────────────────────────────────────────────
// MockRegistry
// ────────────────────────────────────────────────────────────────────────────

const DEMO_NAMES: [&str; 5] = [
    "TECH SOLUTIONS SRL",
    "DIGITAL INNOVATIONS SRL",
    "GREEN ENERGY SRL",
    "MODERN SYSTEMS SRL",
    "ADVANCED CONSULTING SRL",
];
const DEMO_COUNTIES: [&str; 5] = ["Bucharest", "Cluj", "Timis", "Iasi", "Constanta"];
const DEMO_CITIES: [&str; 5] = ["Sector 1", "Cluj-Napoca", "Timisoara", "Iasi", "Constanta"];
const DEMO_STREETS: [&str; 4] = ["Victoriei", "Unirii", "Libertății", "Independenței"];
const DEMO_NACE: [&str; 5] = ["6201", "6202", "7022", "4651", "6311"];
const DEMO_EMPLOYEES: [u32; 7] = [5, 12, 25, 45, 78, 120, 200];

/// Deterministic demo data: the same CUI always yields the same company.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRegistry;

impl MockRegistry {
    pub fn snapshot(cui: &str) -> CompanySnapshot {
        let cui = clean_cui(cui);
        let seed = demo_seed(cui);
        let at = |len: usize| (seed % len as u64) as usize;
        let turnover = (500_000 + seed as i64 * 1000) % 5_000_000;

        CompanySnapshot {
            tax_code: cui.to_string(),
            name: DEMO_NAMES[at(DEMO_NAMES.len())].to_string(),
            status: "Active".to_string(),
            fiscal_activity: "Active".to_string(),
            legal_form: "SRL".to_string(),
            registration_date: format!(
                "{}-{:02}-{:02}",
                2015 + seed % 8,
                seed % 12 + 1,
                seed % 28 + 1
            ),
            county: DEMO_COUNTIES[at(DEMO_COUNTIES.len())].to_string(),
            city: DEMO_CITIES[at(DEMO_CITIES.len())].to_string(),
            address: format!(
                "Str. {} Nr. {}",
                DEMO_STREETS[at(DEMO_STREETS.len())],
                seed % 300 + 1
            ),
            nace: DEMO_NACE[at(DEMO_NACE.len())].to_string(),
            turnover,
            profit: turnover / 10,
            employees: DEMO_EMPLOYEES[at(DEMO_EMPLOYEES.len())],
            source: DataSource::Mock,
        }
    }
}

/// Leading digits of the CUI modulo 1000; zero when there are none.
fn demo_seed(cui: &str) -> u64 {
    cui.chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, |acc, d| (acc * 10 + u64::from(d)) % 1000)
}

#[async_trait]
impl CompanyRegistry for MockRegistry {
    async fn fetch_company(&self, cui: &str) -> Result<CompanySnapshot, RegistryError> {
        let snapshot = Self::snapshot(cui);
        info!(
            "Serving demo registry data for CUI {}: {}",
            snapshot.tax_code, snapshot.name
        );
        Ok(snapshot)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticRegistry
// ────────────────────────────────────────────────────────────────────────────

/// Pre-loaded snapshots keyed by cleaned CUI.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    companies: HashMap<String, CompanySnapshot>,
}

impl StaticRegistry {
    pub fn new(snapshots: impl IntoIterator<Item = CompanySnapshot>) -> Self {
        let companies = snapshots
            .into_iter()
            .map(|s| (clean_cui(&s.tax_code).to_string(), s))
            .collect();
        Self { companies }
    }
}

#[async_trait]
impl CompanyRegistry for StaticRegistry {
    async fn fetch_company(&self, cui: &str) -> Result<CompanySnapshot, RegistryError> {
        let cui = clean_cui(cui);
        self.companies
            .get(cui)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(cui.to_string()))
    }
}
