//! Eligibility checker: one company against one program.
//!
//! Flow: build prompt → TextGenerator → derive verdict. The raw response is
//! returned as `reason`; structured findings are parsed from it on demand.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::eligibility::analysis::Verdict;
use crate::eligibility::prompts::{build_eligibility_prompt, ELIGIBILITY_SYSTEM};
use crate::eligibility::verdict::{derive_verdict, VerdictBasis};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::company::CompanySnapshot;
use crate::models::program::FundingProgram;

/// SME employee band used by the offline mock assessment.
const SME_EMPLOYEES: std::ops::RangeInclusive<u32> = 10..=250;

/// Options for every LLM-backed service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub use_mock_responses: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub verdict: Verdict,
    pub basis: VerdictBasis,
    /// True only for an explicit or inferred Eligible verdict.
    pub eligible: bool,
    /// Raw assessment text, or the error description when the call failed.
    pub reason: String,
}

impl EligibilityOutcome {
    fn from_response(reason: String) -> Self {
        let decision = derive_verdict(&reason);
        if decision.basis == VerdictBasis::KeywordFallback {
            warn!("No verdict marker in response; eligibility inferred from keywords");
        }
        debug!("Verdict {:?} via {:?}", decision.verdict, decision.basis);

        Self {
            verdict: decision.verdict,
            basis: decision.basis,
            eligible: decision.is_eligible(),
            reason,
        }
    }
}

#[derive(Clone)]
pub struct EligibilityChecker {
    generator: Arc<dyn TextGenerator>,
    config: CheckerConfig,
}

impl EligibilityChecker {
    pub fn new(generator: Arc<dyn TextGenerator>, config: CheckerConfig) -> Self {
        Self { generator, config }
    }

    /// Runs the check, propagating generator failures.
    pub async fn try_check(
        &self,
        company: &CompanySnapshot,
        program: &FundingProgram,
    ) -> Result<EligibilityOutcome, AppError> {
        if self.config.use_mock_responses {
            info!(
                "Mock eligibility check for {} / {}",
                company.tax_code, program.title
            );
            return Ok(EligibilityOutcome::from_response(mock_assessment(company)));
        }

        info!(
            "Checking eligibility of {} for program '{}'",
            company.tax_code, program.title
        );
        let prompt = build_eligibility_prompt(company, program);
        let response = self
            .generator
            .generate(&prompt, ELIGIBILITY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Eligibility check failed: {e}")))?;

        Ok(EligibilityOutcome::from_response(response))
    }

    /// Never fails: a generator error becomes a not-eligible outcome whose
    /// reason describes the failure.
    pub async fn check(&self, company: &CompanySnapshot, program: &FundingProgram) -> EligibilityOutcome {
        match self.try_check(company, program).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    "Eligibility check for {} / '{}' degraded: {e}",
                    company.tax_code, program.title
                );
                EligibilityOutcome {
                    verdict: Verdict::Unknown,
                    basis: VerdictBasis::NoMarker,
                    eligible: false,
                    reason: format!("Error checking eligibility: {e}"),
                }
            }
        }
    }
}

/// Offline assessment keyed on the SME employee band only.
fn mock_assessment(company: &CompanySnapshot) -> String {
    let employees = company.employees;

    if SME_EMPLOYEES.contains(&employees) {
        format!(
            "ACCEPTATE:\n\
             - Criteriul IMM (Întreprindere Mică și Mijlocie): Compania are {employees} angajați, ceea ce se încadrează în limitele pentru IMM (10-250 angajați)\n\
             - Statut activ: Compania are statutul \"{status}\" care permite participarea la programe de finanțare\n\
             \n\
             NEVALIDATE:\n\
             - Cifra de afaceri eligibilă: Nu se poate determina dacă cifra de afaceri respectă limitele programului din datele disponibile\n\
             - Domeniul de activitate: Necesită verificare suplimentară pentru compatibilitatea cu obiectivele programului\n\
             \n\
             REZULTAT: ELIGIBILĂ",
            status = company.status
        )
    } else {
        format!(
            "REFUZATE:\n\
             - Criteriul IMM (Întreprindere Mică și Mijlocie): Compania are {employees} angajați, ceea ce nu se încadrează în limitele pentru IMM (10-250 angajați)\n\
             \n\
             REZULTAT: NU_ESTE_ELIGIBILĂ"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::eligibility::analysis::parse_analysis;
    use crate::llm_client::LlmError;
    use crate::models::program::ProgramDraft;

    /// Returns a fixed response (or a fixed error) and records prompts.
    struct ScriptedGenerator {
        response: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                response: Err(status),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "invalid x-api-key".to_string(),
                }),
            }
        }
    }

    fn company(employees: u32) -> CompanySnapshot {
        CompanySnapshot {
            tax_code: "37024165".to_string(),
            name: "TECH SOLUTIONS SRL".to_string(),
            status: "Active".to_string(),
            employees,
            ..Default::default()
        }
    }

    fn program() -> FundingProgram {
        ProgramDraft {
            title: "SME Innovation Support".to_string(),
            eligibility_rules: Some("- Company must have between 10-250 employees".to_string()),
            active: true,
            ..Default::default()
        }
        .into_program(1)
    }

    const LIVE: CheckerConfig = CheckerConfig {
        use_mock_responses: false,
    };
    const MOCK: CheckerConfig = CheckerConfig {
        use_mock_responses: true,
    };

    #[tokio::test]
    async fn test_live_check_uses_generator_and_parses_verdict() {
        let generator = ScriptedGenerator::replying("ACCEPTATE:\n- IMM: 47 angajați\nREZULTAT: ELIGIBILĂ");
        let checker = EligibilityChecker::new(generator.clone(), LIVE);

        let outcome = checker.try_check(&company(47), &program()).await.unwrap();

        assert!(outcome.eligible);
        assert_eq!(outcome.verdict, Verdict::Eligible);
        assert_eq!(outcome.basis, VerdictBasis::RomanianMarker);
        assert_eq!(generator.calls(), 1);
        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("- Company must have between 10-250 employees"));
        assert!(prompt.contains("TECH SOLUTIONS SRL"));
    }

    #[tokio::test]
    async fn test_live_check_not_eligible() {
        let generator = ScriptedGenerator::replying("REFUZATE:\n- IMM: prea mare\nREZULTAT: NU_ESTE_ELIGIBILĂ");
        let checker = EligibilityChecker::new(generator, LIVE);

        let outcome = checker.check(&company(900), &program()).await;
        assert!(!outcome.eligible);
        assert_eq!(outcome.verdict, Verdict::NotEligible);
    }

    #[tokio::test]
    async fn test_unknown_verdict_is_not_eligible() {
        let generator = ScriptedGenerator::replying("Nu pot evalua această companie.");
        let checker = EligibilityChecker::new(generator, LIVE);

        let outcome = checker.check(&company(47), &program()).await;
        assert_eq!(outcome.verdict, Verdict::Unknown);
        assert!(!outcome.eligible);
    }

    #[tokio::test]
    async fn test_try_check_propagates_generator_error() {
        let checker = EligibilityChecker::new(ScriptedGenerator::failing(401), LIVE);
        let err = checker.try_check(&company(47), &program()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[tokio::test]
    async fn test_check_substitutes_error_reason() {
        let checker = EligibilityChecker::new(ScriptedGenerator::failing(500), LIVE);
        let outcome = checker.check(&company(47), &program()).await;

        assert!(!outcome.eligible);
        assert_eq!(outcome.verdict, Verdict::Unknown);
        assert!(outcome.reason.starts_with("Error checking eligibility:"));
        // The fallback text parses to an empty analysis rather than failing.
        let analysis = parse_analysis(&outcome.reason);
        assert!(analysis.accepted.is_empty());
        assert_eq!(analysis.verdict, Verdict::Unknown);
    }

    #[tokio::test]
    async fn test_mock_mode_never_calls_generator() {
        let generator = ScriptedGenerator::failing(401);
        let checker = EligibilityChecker::new(generator.clone(), MOCK);

        let outcome = checker.check(&company(47), &program()).await;

        assert_eq!(generator.calls(), 0);
        assert!(outcome.eligible);
        let analysis = parse_analysis(&outcome.reason);
        assert_eq!(analysis.accepted.len(), 2);
        assert_eq!(analysis.unvalidated.len(), 2);
        assert!(analysis.rejected.is_empty());
        assert!(analysis.accepted[0].explanation.contains("47 angajați"));
        assert!(analysis.accepted[1].explanation.contains("\"Active\""));
    }

    #[tokio::test]
    async fn test_mock_mode_rejects_outside_sme_band() {
        let checker = EligibilityChecker::new(ScriptedGenerator::failing(401), MOCK);

        for employees in [5, 251] {
            let outcome = checker.check(&company(employees), &program()).await;
            assert!(!outcome.eligible, "{employees} employees must not be eligible");
            assert_eq!(outcome.verdict, Verdict::NotEligible);
            let analysis = parse_analysis(&outcome.reason);
            assert_eq!(analysis.rejected.len(), 1);
            assert_eq!(analysis.rejected[0].criterion_text, "Criteriul IMM (Întreprindere Mică și Mijlocie)");
        }
    }

    #[tokio::test]
    async fn test_mock_mode_band_edges_are_inclusive() {
        let checker = EligibilityChecker::new(ScriptedGenerator::failing(401), MOCK);
        assert!(checker.check(&company(10), &program()).await.eligible);
        assert!(checker.check(&company(250), &program()).await.eligible);
    }
}
