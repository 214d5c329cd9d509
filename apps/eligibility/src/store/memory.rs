use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::check::{CompanyProgramCheck, NewCheck};
use crate::models::company::{Company, CompanySnapshot};
use crate::models::program::{FundingProgram, ProgramDraft};
use crate::store::{CheckRepository, CompanyRepository, ProgramRepository};

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<i64, Company>,
    programs: BTreeMap<i64, FundingProgram>,
    checks: BTreeMap<i64, CompanyProgramCheck>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn find_check(&self, company_id: i64, program_id: i64) -> Option<&CompanyProgramCheck> {
        self.checks
            .values()
            .find(|c| c.company_id == company_id && c.program_id == program_id)
    }

    /// Caller holds the write lock and has ruled out a duplicate pair.
    fn insert_check(&mut self, check: NewCheck) -> Result<CompanyProgramCheck, AppError> {
        if !self.companies.contains_key(&check.company_id) {
            return Err(AppError::NotFound(format!("Company {}", check.company_id)));
        }
        if !self.programs.contains_key(&check.program_id) {
            return Err(AppError::NotFound(format!("Funding program {}", check.program_id)));
        }

        let record = CompanyProgramCheck {
            id: self.next_id(),
            company_id: check.company_id,
            program_id: check.program_id,
            eligible: check.eligible,
            ai_response: check.ai_response,
            created_at: Utc::now(),
        };
        self.checks.insert(record.id, record.clone());
        Ok(record)
    }
}

/// Process-local store. Ids are unique across all tables and never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `drafts`, e.g. `seeds::default_programs()`.
    pub async fn with_programs(drafts: Vec<ProgramDraft>) -> Result<Self, AppError> {
        let store = Self::new();
        for draft in drafts {
            store.create_program(draft).await?;
        }
        Ok(store)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_company(&self, id: i64) -> Result<Option<Company>, AppError> {
        Ok(self.tables.read().await.companies.get(&id).cloned())
    }

    async fn find_company_by_cui(&self, cui: &str) -> Result<Option<Company>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.companies.values().find(|c| c.cui == cui).cloned())
    }

    async fn upsert_company(&self, cui: &str, snapshot: CompanySnapshot) -> Result<Company, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(company) = tables.companies.values_mut().find(|c| c.cui == cui) {
            info!("Updating company {} with fresh registry data", company.id);
            company.snapshot = snapshot;
            company.updated_at = Utc::now();
            return Ok(company.clone());
        }

        let id = tables.next_id();
        info!("Creating company {id} for CUI {cui}");
        let company = Company {
            id,
            cui: cui.to_string(),
            snapshot,
            updated_at: Utc::now(),
        };
        tables.companies.insert(id, company.clone());
        Ok(company)
    }
}

#[async_trait]
impl ProgramRepository for InMemoryStore {
    async fn list_programs(&self) -> Result<Vec<FundingProgram>, AppError> {
        let mut programs: Vec<_> = self.tables.read().await.programs.values().cloned().collect();
        programs.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(programs)
    }

    async fn list_active_programs(&self) -> Result<Vec<FundingProgram>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.programs.values().filter(|p| p.active).cloned().collect())
    }

    async fn find_program(&self, id: i64) -> Result<Option<FundingProgram>, AppError> {
        Ok(self.tables.read().await.programs.get(&id).cloned())
    }

    async fn create_program(&self, draft: ProgramDraft) -> Result<FundingProgram, AppError> {
        draft.validate()?;
        let mut tables = self.tables.write().await;
        let program = draft.into_program(tables.next_id());
        tables.programs.insert(program.id, program.clone());
        Ok(program)
    }

    async fn update_program(&self, id: i64, draft: ProgramDraft) -> Result<FundingProgram, AppError> {
        draft.validate()?;
        let mut tables = self.tables.write().await;
        let slot = tables
            .programs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Funding program {id}")))?;
        *slot = draft.into_program(id);
        Ok(slot.clone())
    }

    async fn delete_program(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables
            .programs
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Funding program {id}")))?;
        tables.checks.retain(|_, check| check.program_id != id);
        Ok(())
    }
}

#[async_trait]
impl CheckRepository for InMemoryStore {
    async fn find_check(
        &self,
        company_id: i64,
        program_id: i64,
    ) -> Result<Option<CompanyProgramCheck>, AppError> {
        Ok(self.tables.read().await.find_check(company_id, program_id).cloned())
    }

    async fn insert_check(&self, check: NewCheck) -> Result<CompanyProgramCheck, AppError> {
        let mut tables = self.tables.write().await;

        if tables.find_check(check.company_id, check.program_id).is_some() {
            return Err(AppError::Validation(format!(
                "company {} already has a check for program {}",
                check.company_id, check.program_id
            )));
        }
        tables.insert_check(check)
    }

    async fn find_or_insert_check(&self, check: NewCheck) -> Result<CompanyProgramCheck, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables.find_check(check.company_id, check.program_id) {
            info!(
                "Check for company {} / program {} already stored, keeping {}",
                check.company_id, check.program_id, existing.id
            );
            return Ok(existing.clone());
        }
        tables.insert_check(check)
    }

    async fn checks_for_company(&self, company_id: i64) -> Result<Vec<CompanyProgramCheck>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .checks
            .values()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect())
    }
}
