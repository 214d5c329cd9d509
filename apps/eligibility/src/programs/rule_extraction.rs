//! Rule extraction: splits a program guide into company-level rules (checkable
//! against registry data) and project-level rules (manual review).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::programs::prompts::{
    NO_REQUIREMENTS_BULLET, RULE_EXTRACTION_PROMPT_TEMPLATE, RULE_EXTRACTION_SYSTEM,
};

static COMPANY_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)COMPANY_RULES:").expect("static regex must compile"));

static PROJECT_SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PROJECT_RULES:").expect("static regex must compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Company,
    Project,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRules {
    /// Newline-joined `-` bullets.
    pub company_rules: String,
    pub project_rules: String,
}

impl ExtractedRules {
    /// Both categories, separated by a blank line. Empty parts are skipped.
    pub fn combined(&self) -> String {
        [self.company_rules.as_str(), self.project_rules.as_str()]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Keeps only bullets inside a COMPANY_RULES / PROJECT_RULES section.
/// Explanatory prose and bullets before the first section are dropped.
pub fn parse_rule_sections(text: &str) -> ExtractedRules {
    let mut company = Vec::new();
    let mut project = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines().map(str::trim) {
        if COMPANY_SECTION_RE.is_match(line) {
            current = Some(Section::Company);
        } else if PROJECT_SECTION_RE.is_match(line) {
            current = Some(Section::Project);
        } else if line.starts_with('-') {
            match current {
                Some(Section::Company) => company.push(line),
                Some(Section::Project) => project.push(line),
                None => {}
            }
        }
    }

    ExtractedRules {
        company_rules: company.join("\n"),
        project_rules: project.join("\n"),
    }
}

pub fn build_extraction_prompt(content: &str) -> String {
    RULE_EXTRACTION_PROMPT_TEMPLATE
        .replace("{no_requirements}", NO_REQUIREMENTS_BULLET)
        .replace("{content}", content.trim())
}

/// Asks the model to categorize the rules found in `content`.
pub async fn extract_rules(
    generator: &dyn TextGenerator,
    content: &str,
) -> Result<ExtractedRules, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("No content provided".to_string()));
    }

    info!("Extracting eligibility rules from {} chars of content", content.len());
    let response = generator
        .generate(&build_extraction_prompt(content), RULE_EXTRACTION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to extract rules: {e}")))?;
    debug!("Rule extraction response: {response}");

    Ok(parse_rule_sections(&response))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    const RESPONSE: &str = "\
Here are the rules I found in the guide.

COMPANY_RULES:
- Must qualify as SME (10-250 employees)
- Minimum 2 years in business
Note: turnover limits were not stated.
- Active registration with authorities

**PROJECT_RULES:**
- Projects must demonstrate innovation potential
- Project duration: 12-36 months

Let me know if you need anything else.";

    struct FixedGenerator(Result<&'static str, ()>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            assert!(prompt.contains("FUNDING PROGRAM CONTENT:"));
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    #[test]
    fn test_parse_rule_sections_keeps_only_bullets() {
        let rules = parse_rule_sections(RESPONSE);
        assert_eq!(
            rules.company_rules,
            "- Must qualify as SME (10-250 employees)\n\
             - Minimum 2 years in business\n\
             - Active registration with authorities"
        );
        assert_eq!(
            rules.project_rules,
            "- Projects must demonstrate innovation potential\n- Project duration: 12-36 months"
        );
    }

    #[test]
    fn test_section_labels_are_case_insensitive() {
        let rules = parse_rule_sections("company_rules:\n- A\nProject_Rules:\n- B");
        assert_eq!(rules.company_rules, "- A");
        assert_eq!(rules.project_rules, "- B");
    }

    #[test]
    fn test_bullets_before_any_section_are_dropped() {
        let rules = parse_rule_sections("- stray\nCOMPANY_RULES:\n- kept");
        assert_eq!(rules.company_rules, "- kept");
        assert!(rules.project_rules.is_empty());
    }

    #[test]
    fn test_combined_skips_empty_parts() {
        let rules = ExtractedRules {
            company_rules: "- A".to_string(),
            project_rules: "- B".to_string(),
        };
        assert_eq!(rules.combined(), "- A\n\n- B");

        let company_only = ExtractedRules {
            company_rules: "- A".to_string(),
            project_rules: String::new(),
        };
        assert_eq!(company_only.combined(), "- A");
        assert_eq!(ExtractedRules::default().combined(), "");
    }

    #[test]
    fn test_extraction_prompt_embeds_content() {
        let prompt = build_extraction_prompt("  OBJECTIVE: innovation  ");
        assert!(prompt.contains("FUNDING PROGRAM CONTENT:\nOBJECTIVE: innovation\n"));
        assert!(prompt.contains(NO_REQUIREMENTS_BULLET));
        assert!(!prompt.contains("{content}"));
    }

    #[tokio::test]
    async fn test_extract_rules() {
        let rules = extract_rules(&FixedGenerator(Ok(RESPONSE)), "SME guide").await.unwrap();
        assert_eq!(rules.company_rules.lines().count(), 3);
        assert_eq!(rules.project_rules.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_extract_rules_rejects_blank_content() {
        let err = extract_rules(&FixedGenerator(Ok(RESPONSE)), " \n").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_rules_maps_generator_error() {
        let err = extract_rules(&FixedGenerator(Err(())), "guide").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("Failed to extract rules"));
    }
}
