use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingProgram {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Full program guide text, pasted from the official PDF.
    pub pdf_content: Option<String>,
    /// Combined rules, kept for programs created before the company/project split.
    pub eligibility_rules: Option<String>,
    pub company_eligibility_rules: Option<String>,
    pub project_eligibility_rules: Option<String>,
    pub active: bool,
}

impl FundingProgram {
    /// Rules checked against company data: the dedicated company rules when
    /// present, otherwise the combined rules.
    pub fn company_rules(&self) -> &str {
        non_blank(self.company_eligibility_rules.as_deref())
            .or_else(|| non_blank(self.eligibility_rules.as_deref()))
            .unwrap_or("")
    }

    pub fn guide(&self) -> Option<&str> {
        non_blank(self.pdf_content.as_deref())
    }
}

/// Input for creating or updating a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub pdf_content: Option<String>,
    pub eligibility_rules: Option<String>,
    pub company_eligibility_rules: Option<String>,
    pub project_eligibility_rules: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl ProgramDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title can't be blank".to_string()));
        }
        Ok(())
    }

    pub fn into_program(self, id: i64) -> FundingProgram {
        FundingProgram {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            pdf_content: self.pdf_content,
            eligibility_rules: self.eligibility_rules,
            company_eligibility_rules: self.company_eligibility_rules,
            project_eligibility_rules: self.project_eligibility_rules,
            active: self.active,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(combined: Option<&str>, company: Option<&str>) -> FundingProgram {
        ProgramDraft {
            title: "SME Innovation Support".to_string(),
            eligibility_rules: combined.map(str::to_string),
            company_eligibility_rules: company.map(str::to_string),
            active: true,
            ..Default::default()
        }
        .into_program(1)
    }

    #[test]
    fn test_company_rules_prefers_dedicated_rules() {
        let p = program(Some("- combined"), Some("- 10-250 angajați"));
        assert_eq!(p.company_rules(), "- 10-250 angajați");
    }

    #[test]
    fn test_company_rules_falls_back_to_combined() {
        assert_eq!(program(Some("- combined"), Some("  ")).company_rules(), "- combined");
        assert_eq!(program(Some("- combined"), None).company_rules(), "- combined");
        assert_eq!(program(None, None).company_rules(), "");
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = ProgramDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_guide_ignores_blank_content() {
        let mut p = program(None, None);
        assert!(p.guide().is_none());
        p.pdf_content = Some("\n".to_string());
        assert!(p.guide().is_none());
        p.pdf_content = Some("OBJECTIVE: ...".to_string());
        assert_eq!(p.guide(), Some("OBJECTIVE: ..."));
    }
}
