use serde::Serialize;

use crate::eligibility::analysis::Verdict;

/// Display attributes for a verdict badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub status: &'static str,
    pub text: &'static str,
    pub css_class: &'static str,
    pub icon: &'static str,
}

pub fn status_info(verdict: Verdict) -> StatusInfo {
    match verdict {
        Verdict::Eligible => StatusInfo {
            status: "eligible",
            text: "✅ ELIGIBILĂ",
            css_class: "alert-success",
            icon: "✅",
        },
        Verdict::NotEligible => StatusInfo {
            status: "ineligible",
            text: "❌ NU ESTE ELIGIBILĂ",
            css_class: "alert-error",
            icon: "❌",
        },
        Verdict::Unknown => StatusInfo {
            status: "unknown",
            text: "⚠️ STATUS NECUNOSCUT",
            css_class: "alert-warning",
            icon: "⚠️",
        },
    }
}
