pub mod analysis;
pub mod checker;
pub mod filters;
pub mod prompts;
pub mod service;
pub mod status;
pub mod verdict;

pub use analysis::{parse_analysis, CriterionCategory, CriterionFinding, EligibilityAnalysis, Verdict};
pub use checker::{CheckerConfig, EligibilityChecker, EligibilityOutcome};
pub use service::{CompanyReport, EligibilityService, ProgramCheck};
