use std::collections::BTreeMap;

use crate::models::{CollegeCriteria, CriteriaError, ScoreRange};
use crate::services::source::{CriteriaSource, SourceError};

/// Fixed in-memory criteria table keyed by college name
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCriteria {
    colleges: BTreeMap<String, CollegeCriteria>,
}

impl StaticCriteria {
    /// Build a table, validating every record and rejecting duplicate names
    pub fn from_entries<I>(entries: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = (String, CollegeCriteria)>,
    {
        let mut colleges = BTreeMap::new();

        for (name, criteria) in entries {
            criteria.checked().map_err(|e| match e {
                CriteriaError::Invalid(source) => CriteriaError::InvalidCollege {
                    college: name.clone(),
                    source,
                },
                other => other,
            })?;

            if colleges.insert(name.clone(), criteria).is_some() {
                return Err(CriteriaError::DuplicateCollege(name));
            }
        }

        Ok(Self { colleges })
    }

    /// Harvard, Stanford and MIT
    pub fn builtin() -> Self {
        let colleges = builtin_entries().into_iter().collect();
        Self { colleges }
    }

    pub fn lookup_all(&self) -> &BTreeMap<String, CollegeCriteria> {
        &self.colleges
    }

    pub fn get(&self, college: &str) -> Option<&CollegeCriteria> {
        self.colleges.get(college)
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}

impl Default for StaticCriteria {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CriteriaSource for StaticCriteria {
    async fn resolve(&self, college: &str) -> Result<CollegeCriteria, SourceError> {
        self.get(college)
            .copied()
            .ok_or_else(|| SourceError::UnknownCollege(college.to_string()))
    }
}

fn builtin_entries() -> Vec<(String, CollegeCriteria)> {
    let selective = |sat: (u32, u32), act: (u32, u32)| CollegeCriteria {
        gpa: ScoreRange::new(3.9, 4.0),
        sat: ScoreRange::new(sat.0, sat.1),
        act: ScoreRange::new(act.0, act.1),
        requires_extracurriculars: true,
        min_extracurricular_score: 0,
    };

    vec![
        ("Harvard University".to_string(), selective((1460, 1570), (33, 36))),
        ("Stanford University".to_string(), selective((1440, 1560), (32, 35))),
        ("MIT".to_string(), selective((1500, 1580), (34, 36))),
    ]
}
