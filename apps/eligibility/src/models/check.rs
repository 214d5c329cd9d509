use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::analysis::{parse_analysis, EligibilityAnalysis};

/// Stored outcome of one company/program eligibility check.
/// Only the raw response and the verdict are persisted; findings are
/// recomputed from `ai_response` on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProgramCheck {
    pub id: i64,
    pub company_id: i64,
    pub program_id: i64,
    pub eligible: bool,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
}

impl CompanyProgramCheck {
    pub fn analysis(&self) -> EligibilityAnalysis {
        parse_analysis(&self.ai_response)
    }
}

/// Fields needed to record a new check; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewCheck {
    pub company_id: i64,
    pub program_id: i64,
    pub eligible: bool,
    pub ai_response: String,
}
