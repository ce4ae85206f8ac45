//! College Chancer - admission chance estimates from criteria ranges
//!
//! A student profile (GPA, SAT, ACT, extracurriculars) is checked against
//! per-college admission ranges, either from a fixed table or from a college
//! stats page fetched on demand.

pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{evaluate, extracurricular_score, Chancer, CriteriaCheck};
pub use models::{CollegeCriteria, Extracurriculars, ScoreRange, StudentProfile, Verdict};
pub use services::{CollegeStatsClient, CriteriaSource, SourceError, StaticCriteria};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let profile = StudentProfile {
            gpa: 3.2,
            sat: 1100,
            act: 24,
            extracurriculars: Extracurriculars::Scored(0),
        };
        assert_eq!(evaluate(&profile, &CollegeCriteria::fallback()), Verdict::Favorable);
    }
}
