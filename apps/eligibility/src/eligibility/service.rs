//! Company lookup → per-program eligibility checks → report.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::eligibility::analysis::EligibilityAnalysis;
use crate::eligibility::checker::EligibilityChecker;
use crate::errors::AppError;
use crate::models::check::{CompanyProgramCheck, NewCheck};
use crate::models::company::Company;
use crate::models::program::FundingProgram;
use crate::registry::{clean_cui, CompanyRegistry};
use crate::store::{CheckRepository, CompanyRepository, ProgramRepository, Repository};

/// One program with its stored check.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramCheck {
    pub program: FundingProgram,
    pub check: CompanyProgramCheck,
}

impl ProgramCheck {
    pub fn analysis(&self) -> EligibilityAnalysis {
        self.check.analysis()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyReport {
    pub company: Company,
    pub eligible: Vec<ProgramCheck>,
    pub ineligible: Vec<ProgramCheck>,
}

impl CompanyReport {
    fn new(company: Company, entries: Vec<ProgramCheck>) -> Self {
        let (eligible, ineligible) = entries.into_iter().partition(|e| e.check.eligible);
        Self {
            company,
            eligible,
            ineligible,
        }
    }
}

#[derive(Clone)]
pub struct EligibilityService {
    store: Arc<dyn Repository>,
    registry: Arc<dyn CompanyRegistry>,
    checker: EligibilityChecker,
}

impl EligibilityService {
    pub fn new(
        store: Arc<dyn Repository>,
        registry: Arc<dyn CompanyRegistry>,
        checker: EligibilityChecker,
    ) -> Self {
        Self {
            store,
            registry,
            checker,
        }
    }

    /// Refreshes the company from the registry and checks it against every
    /// active program. Existing checks are reused, never re-run.
    pub async fn check_company(&self, cui: &str) -> Result<CompanyReport, AppError> {
        let cui = clean_cui(cui);
        if cui.is_empty() {
            return Err(AppError::Validation("Please enter a valid CUI".to_string()));
        }

        info!("Fetching fresh registry data for CUI {cui}");
        let snapshot = self
            .registry
            .fetch_company(cui)
            .await
            .map_err(|e| AppError::Registry(format!("Could not fetch company data: {e}")))?;
        let company = self.store.upsert_company(cui, snapshot).await?;

        let programs = self.store.list_active_programs().await?;
        info!(
            "Checking company {} against {} active programs",
            company.id,
            programs.len()
        );

        let mut entries = Vec::with_capacity(programs.len());
        for program in programs {
            let check = match self.store.find_check(company.id, program.id).await? {
                Some(existing) => existing,
                None => {
                    let outcome = self.checker.check(&company.snapshot, &program).await;
                    // A concurrent lookup may have stored this pair while the
                    // checker was running; its record wins.
                    self.store
                        .find_or_insert_check(NewCheck {
                            company_id: company.id,
                            program_id: program.id,
                            eligible: outcome.eligible,
                            ai_response: outcome.reason,
                        })
                        .await?
                }
            };
            entries.push(ProgramCheck { program, check });
        }

        Ok(CompanyReport::new(company, entries))
    }

    /// Stored checks for a company, without contacting the registry or the LLM.
    pub async fn company_report(&self, company_id: i64) -> Result<CompanyReport, AppError> {
        let company = self
            .store
            .find_company(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        let mut entries = Vec::new();
        for check in self.store.checks_for_company(company_id).await? {
            match self.store.find_program(check.program_id).await? {
                Some(program) => entries.push(ProgramCheck { program, check }),
                None => warn!("Check {} references missing program {}", check.id, check.program_id),
            }
        }

        Ok(CompanyReport::new(company, entries))
    }
}
