//! Persistence seams for companies, funding programs and check records.
//!
//! Services take an `Arc<dyn Repository>`; `InMemoryStore` is the bundled
//! implementation.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::check::{CompanyProgramCheck, NewCheck};
use crate::models::company::{Company, CompanySnapshot};
use crate::models::program::{FundingProgram, ProgramDraft};

pub mod memory;
pub mod seeds;

pub use memory::InMemoryStore;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_company(&self, id: i64) -> Result<Option<Company>, AppError>;

    async fn find_company_by_cui(&self, cui: &str) -> Result<Option<Company>, AppError>;

    /// Creates the company or replaces its snapshot with `snapshot`.
    async fn upsert_company(&self, cui: &str, snapshot: CompanySnapshot) -> Result<Company, AppError>;
}

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Every program, ordered by title.
    async fn list_programs(&self) -> Result<Vec<FundingProgram>, AppError>;

    /// Active programs in creation order.
    async fn list_active_programs(&self) -> Result<Vec<FundingProgram>, AppError>;

    async fn find_program(&self, id: i64) -> Result<Option<FundingProgram>, AppError>;

    async fn create_program(&self, draft: ProgramDraft) -> Result<FundingProgram, AppError>;

    async fn update_program(&self, id: i64, draft: ProgramDraft) -> Result<FundingProgram, AppError>;

    /// Deletes the program together with its check records.
    async fn delete_program(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait CheckRepository: Send + Sync {
    async fn find_check(
        &self,
        company_id: i64,
        program_id: i64,
    ) -> Result<Option<CompanyProgramCheck>, AppError>;

    /// Fails with `Validation` if the (company, program) pair already has a check.
    async fn insert_check(&self, check: NewCheck) -> Result<CompanyProgramCheck, AppError>;

    /// Inserts `check` unless the pair already has one, in which case the
    /// stored record is returned and `check` is discarded. Lookup and insert
    /// happen atomically.
    async fn find_or_insert_check(&self, check: NewCheck) -> Result<CompanyProgramCheck, AppError>;

    async fn checks_for_company(&self, company_id: i64) -> Result<Vec<CompanyProgramCheck>, AppError>;
}

/// Everything the services need from storage.
pub trait Repository: CompanyRepository + ProgramRepository + CheckRepository {}

impl<T> Repository for T where T: CompanyRepository + ProgramRepository + CheckRepository {}
