//! Eligibility response parser. Turns the free-text assessment produced by the
//! eligibility prompt into accepted / rejected / unvalidated findings plus the
//! final verdict.
//!
//! Wire format (keywords case-insensitive, one per line):
//!
//! ```text
//! ACCEPTATE:
//! - <criterion>: <explanation>
//! REFUZATE:
//! - <criterion>: <explanation>
//! NEVALIDATE:
//! - <criterion>: <explanation>
//! REZULTAT: ELIGIBILĂ | NU_ESTE_ELIGIBILĂ
//! ```
//!
//! Prose before, between and after the blocks is ignored. Parsing is total:
//! malformed input degrades to empty sections and an `Unknown` verdict.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::eligibility::filters::is_meta_statement;

pub const ACCEPTED_HEADER: &str = "ACCEPTATE:";
pub const REJECTED_HEADER: &str = "REFUZATE:";
pub const UNVALIDATED_HEADER: &str = "NEVALIDATE:";
pub const VERDICT_LABEL: &str = "REZULTAT:";
pub const ELIGIBLE_MARKER: &str = "ELIGIBILĂ";
pub const NOT_ELIGIBLE_MARKER: &str = "NU_ESTE_ELIGIBILĂ";

const BULLET_MARKER: char = '-';

/// Anchored at line start; the marker tokens keep their diacritics.
static VERDICT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^REZULTAT:\s*(NU_ESTE_ELIGIBILĂ|ELIGIBILĂ)").expect("static regex must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionCategory {
    Accepted,
    Rejected,
    Unvalidated,
}

impl CriterionCategory {
    pub fn header(self) -> &'static str {
        match self {
            CriterionCategory::Accepted => ACCEPTED_HEADER,
            CriterionCategory::Rejected => REJECTED_HEADER,
            CriterionCategory::Unvalidated => UNVALIDATED_HEADER,
        }
    }

    /// Case-insensitive header match against an already trimmed line.
    fn from_header_line(line: &str) -> Option<Self> {
        [
            CriterionCategory::Accepted,
            CriterionCategory::Rejected,
            CriterionCategory::Unvalidated,
        ]
        .into_iter()
        .find(|category| starts_with_ignore_case(line, category.header()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Eligible,
    NotEligible,
    #[default]
    Unknown,
}

impl Verdict {
    /// Maps a stored marker string back to a verdict. Anything unrecognized is `Unknown`.
    pub fn from_marker(marker: &str) -> Self {
        let marker = marker.trim().to_uppercase();
        if marker == ELIGIBLE_MARKER {
            Verdict::Eligible
        } else if marker == NOT_ELIGIBLE_MARKER {
            Verdict::NotEligible
        } else {
            Verdict::Unknown
        }
    }

    pub fn marker(self) -> Option<&'static str> {
        match self {
            Verdict::Eligible => Some(ELIGIBLE_MARKER),
            Verdict::NotEligible => Some(NOT_ELIGIBLE_MARKER),
            Verdict::Unknown => None,
        }
    }
}

/// One bullet of the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionFinding {
    pub category: CriterionCategory,
    pub criterion_text: String,
    pub explanation: String,
    /// Bullet text without the leading marker; used for meta-statement filtering.
    pub raw_line: String,
}

impl CriterionFinding {
    fn from_bullet(category: CriterionCategory, bullet: &str) -> Self {
        let (criterion_text, explanation) = match bullet.split_once(':') {
            Some((criterion, explanation)) => (criterion.trim(), explanation.trim()),
            None => (bullet, ""),
        };

        Self {
            category,
            criterion_text: criterion_text.to_string(),
            explanation: explanation.to_string(),
            raw_line: bullet.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityAnalysis {
    pub accepted: Vec<CriterionFinding>,
    pub rejected: Vec<CriterionFinding>,
    pub unvalidated: Vec<CriterionFinding>,
    pub verdict: Verdict,
    pub raw_text: String,
}

impl EligibilityAnalysis {
    pub fn findings(&self, category: CriterionCategory) -> &[CriterionFinding] {
        match category {
            CriterionCategory::Accepted => &self.accepted,
            CriterionCategory::Rejected => &self.rejected,
            CriterionCategory::Unvalidated => &self.unvalidated,
        }
    }

    fn findings_mut(&mut self, category: CriterionCategory) -> &mut Vec<CriterionFinding> {
        match category {
            CriterionCategory::Accepted => &mut self.accepted,
            CriterionCategory::Rejected => &mut self.rejected,
            CriterionCategory::Unvalidated => &mut self.unvalidated,
        }
    }

    /// e.g. "5 acceptate, 0 refuzate, 3 nevalidate (ELIGIBILĂ)"
    pub fn summary(&self) -> String {
        format!(
            "{} acceptate, {} refuzate, {} nevalidate ({})",
            self.accepted.len(),
            self.rejected.len(),
            self.unvalidated.len(),
            self.verdict.marker().unwrap_or("NECUNOSCUT")
        )
    }
}

/// Parses a raw assessment into an `EligibilityAnalysis`. Never fails.
pub fn parse_analysis(raw_text: &str) -> EligibilityAnalysis {
    let mut analysis = EligibilityAnalysis {
        raw_text: raw_text.to_string(),
        ..Default::default()
    };
    let mut current: Option<CriterionCategory> = None;

    for line in raw_text.lines().map(str::trim) {
        if let Some(category) = CriterionCategory::from_header_line(line) {
            current = Some(category);
            continue;
        }

        if let Some(verdict) = verdict_from_line(line) {
            analysis.verdict = verdict;
            continue;
        }

        let (Some(category), Some(bullet)) = (current, strip_bullet(line)) else {
            continue;
        };

        analysis
            .findings_mut(category)
            .push(CriterionFinding::from_bullet(category, bullet));
    }

    for category in [CriterionCategory::Rejected, CriterionCategory::Unvalidated] {
        analysis
            .findings_mut(category)
            .retain(|finding| !is_meta_statement(category, &finding.raw_line));
    }

    analysis
}

fn verdict_from_line(line: &str) -> Option<Verdict> {
    VERDICT_LINE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|token| Verdict::from_marker(token.as_str()))
}

/// `- text` → `text`. Empty bullets carry nothing to classify and are skipped.
fn strip_bullet(line: &str) -> Option<&str> {
    let bullet = line.strip_prefix(BULLET_MARKER)?.trim();
    (!bullet.is_empty()).then_some(bullet)
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
