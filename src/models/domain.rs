use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Errors raised when a criteria record or table is malformed
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("invalid criteria: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("invalid criteria for {college}: {source}")]
    InvalidCollege {
        college: String,
        source: ValidationErrors,
    },

    #[error("duplicate college in criteria table: {0}")]
    DuplicateCollege(String),
}

/// Closed interval `[min, max]`, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ScoreRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// False when `min > max` or when the bounds are not comparable (NaN)
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Admission criteria for a single college
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct CollegeCriteria {
    pub gpa: ScoreRange<f64>,
    pub sat: ScoreRange<u32>,
    pub act: ScoreRange<u32>,
    #[serde(default)]
    pub requires_extracurriculars: bool,
    /// Only consulted when `requires_extracurriculars` is set
    #[serde(default)]
    pub min_extracurricular_score: u32,
}

impl CollegeCriteria {
    /// Criteria substituted whenever fetched stats are unavailable
    pub const fn fallback() -> Self {
        Self {
            gpa: ScoreRange::new(3.0, 4.0),
            sat: ScoreRange::new(1000, 1600),
            act: ScoreRange::new(20, 36),
            requires_extracurriculars: false,
            min_extracurricular_score: 0,
        }
    }

    /// Validate the range invariants, consuming and returning the record
    pub fn checked(self) -> Result<Self, CriteriaError> {
        self.validate()?;
        Ok(self)
    }
}

fn validate_bounds(criteria: &CollegeCriteria) -> Result<(), ValidationError> {
    let mut problems = Vec::new();

    if !criteria.gpa.is_ordered() {
        problems.push(format!("gpa range {}..{}", criteria.gpa.min, criteria.gpa.max));
    }
    if !criteria.sat.is_ordered() {
        problems.push(format!("sat range {}..{}", criteria.sat.min, criteria.sat.max));
    }
    if !criteria.act.is_ordered() {
        problems.push(format!("act range {}..{}", criteria.act.min, criteria.act.max));
    }

    if problems.is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new("range_bounds");
    error.message = Some(Cow::Owned(format!(
        "min must not exceed max: {}",
        problems.join(", ")
    )));
    Err(error)
}

/// How a student's extracurricular involvement is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Extracurriculars {
    /// Self-reported "strong extracurriculars" answer
    Strong(bool),
    /// Computed score, see [`ExtracurricularRecord::score`]
    Scored(u32),
}

/// Raw extracurricular counts collected from the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtracurricularRecord {
    pub activities: u32,
    pub leadership_positions: u32,
    pub awards: u32,
}

impl ExtracurricularRecord {
    pub fn score(&self) -> u32 {
        crate::core::scoring::extracurricular_score(
            self.activities,
            self.leadership_positions,
            self.awards,
        )
    }
}

/// Student academic profile, built once per run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gpa: f64,
    pub sat: u32,
    pub act: u32,
    pub extracurriculars: Extracurriculars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Favorable,
    Reach,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Favorable => write!(f, "favorable"),
            Verdict::Reach => write!(f, "reach"),
        }
    }
}
