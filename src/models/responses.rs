use serde::{Deserialize, Serialize};

use crate::core::evaluator::CriteriaCheck;
use crate::models::domain::{CollegeCriteria, StudentProfile, Verdict};

/// Outcome of evaluating a profile against one college
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub college: String,
    pub verdict: Verdict,
    pub checks: CriteriaCheck,
    pub criteria: CollegeCriteria,
    /// Reason the fallback criteria were used, if they were
    #[serde(rename = "fallbackReason", default)]
    pub fallback_reason: Option<String>,
}

impl Assessment {
    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Machine-readable report printed with `--json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "evaluatedAt")]
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
    pub profile: StudentProfile,
    #[serde(rename = "extracurricularScore", default)]
    pub extracurricular_score: Option<u32>,
    pub assessments: Vec<Assessment>,
}
