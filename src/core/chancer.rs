use crate::core::evaluator::explain;
use crate::models::{Assessment, CollegeCriteria, StudentProfile};
use crate::services::{CriteriaSource, SourceError, StaticCriteria};

/// Evaluation orchestrator
///
/// Resolves criteria for a college, substitutes the fallback record when a
/// fetch fails in a recoverable way, and evaluates the profile.
#[derive(Debug, Clone)]
pub struct Chancer {
    fallback: CollegeCriteria,
}

impl Chancer {
    pub fn fallback(&self) -> &CollegeCriteria {
        &self.fallback
    }

    /// Assess one college through any criteria source
    ///
    /// # Errors
    /// Only non-recoverable source errors (an unknown college in a static
    /// table) are returned. Fetch and parse failures yield the fallback
    /// criteria, with the failure recorded on the assessment.
    pub async fn assess<S: CriteriaSource>(
        &self,
        source: &S,
        profile: &StudentProfile,
        college: &str,
    ) -> Result<Assessment, SourceError> {
        let (criteria, fallback_reason) = match source.resolve(college).await {
            Ok(criteria) => (criteria, None),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Using fallback criteria for {} ({}): {}", college, e.kind(), e);
                (self.fallback, Some(format!("{}: {}", e.kind(), e)))
            }
            Err(e) => return Err(e),
        };

        Ok(self.assess_criteria(profile, college, criteria, fallback_reason))
    }

    /// Assess every college of a static table, in table order
    pub fn assess_all(&self, table: &StaticCriteria, profile: &StudentProfile) -> Vec<Assessment> {
        table
            .lookup_all()
            .iter()
            .map(|(college, criteria)| self.assess_criteria(profile, college, *criteria, None))
            .collect()
    }

    fn assess_criteria(
        &self,
        profile: &StudentProfile,
        college: &str,
        criteria: CollegeCriteria,
        fallback_reason: Option<String>,
    ) -> Assessment {
        let checks = explain(profile, &criteria);
        let verdict = checks.verdict();

        tracing::debug!("{}: {} ({:?})", college, verdict, checks);

        Assessment {
            college: college.to_string(),
            verdict,
            checks,
            criteria,
            fallback_reason,
        }
    }
}

impl Default for Chancer {
    fn default() -> Self {
        Self {
            fallback: CollegeCriteria::fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Extracurriculars, Verdict};

    struct FailingSource;

    impl CriteriaSource for FailingSource {
        async fn resolve(&self, _college: &str) -> Result<CollegeCriteria, SourceError> {
            Err(SourceError::MissingField("gpaMin"))
        }
    }

    fn create_profile(gpa: f64, sat: u32, act: u32) -> StudentProfile {
        StudentProfile {
            gpa,
            sat,
            act,
            extracurriculars: Extracurriculars::Strong(true),
        }
    }

    #[test]
    fn test_fallback_is_fixed_record() {
        let chancer = Chancer::default();
        assert_eq!(*chancer.fallback(), CollegeCriteria::fallback());
        assert_eq!(chancer.fallback().sat, crate::models::ScoreRange::new(1000, 1600));
    }

    #[test]
    fn test_assess_all_covers_table() {
        let chancer = Chancer::default();
        let table = StaticCriteria::builtin();

        let results = chancer.assess_all(&table, &create_profile(3.95, 1450, 33));

        assert_eq!(results.len(), 3);
        let verdicts: Vec<_> = results.iter().map(|a| (a.college.as_str(), a.verdict)).collect();
        assert_eq!(
            verdicts,
            vec![
                ("Harvard University", Verdict::Favorable),
                ("MIT", Verdict::Reach),
                ("Stanford University", Verdict::Favorable),
            ]
        );
    }

    #[tokio::test]
    async fn test_fallback_on_recoverable_error() {
        let chancer = Chancer::default();

        let assessment = chancer
            .assess(&FailingSource, &create_profile(3.5, 1200, 25), "Some College")
            .await
            .unwrap();

        assert!(assessment.used_fallback());
        assert_eq!(assessment.criteria, CollegeCriteria::fallback());
        assert_eq!(assessment.verdict, Verdict::Favorable);
    }

    #[tokio::test]
    async fn test_unknown_college_propagates() {
        let chancer = Chancer::default();
        let table = StaticCriteria::builtin();

        let result = chancer
            .assess(&table, &create_profile(3.95, 1500, 34), "Nowhere College")
            .await;

        assert!(matches!(result, Err(SourceError::UnknownCollege(_))));
    }
}
