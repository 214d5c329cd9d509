//! Verdict derivation for the checker's stored eligible/ineligible flag.
//!
//! Unlike `parse_analysis`, which only trusts a `REZULTAT:` line, this policy
//! also accepts the legacy English marker and, as a last resort, a keyword
//! scan of the whole text. The keyword fallback can disagree with the parsed
//! findings (e.g. every criterion unvalidated but the word "eligible" appears
//! in prose); `VerdictBasis::KeywordFallback` makes those cases visible.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::eligibility::analysis::{Verdict, ELIGIBLE_MARKER, NOT_ELIGIBLE_MARKER};

const LEGACY_ELIGIBLE_MARKER: &str = "ELIGIBLE";
const LEGACY_NOT_ELIGIBLE_MARKER: &str = "NOT_ELIGIBLE";

static ROMANIAN_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)REZULTAT:\s*(NU_ESTE_ELIGIBILĂ|ELIGIBILĂ)").expect("static regex must compile")
});

static ENGLISH_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)RESULT:\s*(NOT_ELIGIBLE|ELIGIBLE)").expect("static regex must compile")
});

/// Which rule produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictBasis {
    RomanianMarker,
    EnglishMarker,
    KeywordFallback,
    NoMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictDecision {
    pub verdict: Verdict,
    pub basis: VerdictBasis,
}

impl VerdictDecision {
    pub fn is_eligible(&self) -> bool {
        self.verdict == Verdict::Eligible
    }
}

pub fn derive_verdict(text: &str) -> VerdictDecision {
    if let Some(token) = first_capture(&ROMANIAN_MARKER_RE, text) {
        return VerdictDecision {
            verdict: Verdict::from_marker(token),
            basis: VerdictBasis::RomanianMarker,
        };
    }

    if let Some(token) = first_capture(&ENGLISH_MARKER_RE, text) {
        let verdict = if token.eq_ignore_ascii_case(LEGACY_ELIGIBLE_MARKER) {
            Verdict::Eligible
        } else {
            Verdict::NotEligible
        };
        return VerdictDecision {
            verdict,
            basis: VerdictBasis::EnglishMarker,
        };
    }

    keyword_fallback(text)
}

fn keyword_fallback(text: &str) -> VerdictDecision {
    let upper = text.to_uppercase();
    let has_positive =
        upper.contains(ELIGIBLE_MARKER) || upper.contains(LEGACY_ELIGIBLE_MARKER);
    let has_negative =
        upper.contains(NOT_ELIGIBLE_MARKER) || upper.contains(LEGACY_NOT_ELIGIBLE_MARKER);

    if has_positive && !has_negative {
        VerdictDecision {
            verdict: Verdict::Eligible,
            basis: VerdictBasis::KeywordFallback,
        }
    } else {
        VerdictDecision {
            verdict: Verdict::Unknown,
            basis: VerdictBasis::NoMarker,
        }
    }
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
