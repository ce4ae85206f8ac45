use serde::{Deserialize, Serialize};

use crate::models::{CollegeCriteria, Extracurriculars, StudentProfile, Verdict};

/// Per-criterion breakdown of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaCheck {
    pub gpa: bool,
    pub sat: bool,
    pub act: bool,
    pub extracurriculars: bool,
}

impl CriteriaCheck {
    /// Only one of SAT or ACT has to clear its range
    #[inline]
    pub fn test_scores(&self) -> bool {
        self.sat || self.act
    }

    #[inline]
    pub fn verdict(&self) -> Verdict {
        if self.gpa && self.test_scores() && self.extracurriculars {
            Verdict::Favorable
        } else {
            Verdict::Reach
        }
    }

    /// Names of the criteria that were not met, for reporting
    pub fn shortfalls(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.gpa {
            missing.push("GPA");
        }
        if !self.test_scores() {
            missing.push("SAT/ACT");
        }
        if !self.extracurriculars {
            missing.push("extracurriculars");
        }
        missing
    }
}

/// Check every criterion of `criteria` against `profile`
#[inline]
pub fn explain(profile: &StudentProfile, criteria: &CollegeCriteria) -> CriteriaCheck {
    CriteriaCheck {
        gpa: criteria.gpa.contains(profile.gpa),
        sat: criteria.sat.contains(profile.sat),
        act: criteria.act.contains(profile.act),
        extracurriculars: meets_extracurriculars(profile.extracurriculars, criteria),
    }
}

/// Favorable iff GPA is in range, SAT or ACT is in range, and the
/// extracurricular requirement (if any) is met.
#[inline]
pub fn evaluate(profile: &StudentProfile, criteria: &CollegeCriteria) -> Verdict {
    explain(profile, criteria).verdict()
}

#[inline]
fn meets_extracurriculars(extracurriculars: Extracurriculars, criteria: &CollegeCriteria) -> bool {
    if !criteria.requires_extracurriculars {
        return true;
    }

    match extracurriculars {
        Extracurriculars::Strong(strong) => strong,
        Extracurriculars::Scored(score) => score >= criteria.min_extracurricular_score,
    }
}
