use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::domain::{ExtracurricularRecord, Extracurriculars, StudentProfile};

/// Extracurricular answer as collected from the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtracurricularInput {
    /// "Do you have strong extracurriculars?" answer
    Flag(bool),
    /// Activity, leadership and award counts
    Record(ExtracurricularRecord),
}

impl ExtracurricularInput {
    pub fn resolve(&self) -> Extracurriculars {
        match self {
            ExtracurricularInput::Flag(strong) => Extracurriculars::Strong(*strong),
            ExtracurricularInput::Record(record) => Extracurriculars::Scored(record.score()),
        }
    }
}

/// Profile values gathered from flags and prompts, before validation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_gpa_finite"))]
pub struct ProfileRequest {
    #[validate(range(min = 0.0))]
    pub gpa: f64,
    pub sat: u32,
    pub act: u32,
    pub extracurriculars: ExtracurricularInput,
}

fn validate_gpa_finite(request: &ProfileRequest) -> Result<(), ValidationError> {
    if request.gpa.is_finite() {
        return Ok(());
    }
    let mut error = ValidationError::new("gpa_not_finite");
    error.message = Some(Cow::Borrowed("GPA must be a finite number"));
    Err(error)
}

impl ProfileRequest {
    /// Validate and convert into an immutable [`StudentProfile`]
    pub fn into_profile(self) -> Result<StudentProfile, ValidationErrors> {
        self.validate()?;

        Ok(StudentProfile {
            gpa: self.gpa,
            sat: self.sat,
            act: self.act,
            extracurriculars: self.extracurriculars.resolve(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gpa: f64) -> ProfileRequest {
        ProfileRequest {
            gpa,
            sat: 1500,
            act: 34,
            extracurriculars: ExtracurricularInput::Flag(true),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let profile = request(3.95).into_profile().unwrap();
        assert_eq!(profile.gpa, 3.95);
        assert_eq!(profile.extracurriculars, Extracurriculars::Strong(true));
    }

    #[test]
    fn test_negative_gpa_rejected() {
        assert!(request(-0.5).into_profile().is_err());
    }

    #[test]
    fn test_non_finite_gpa_rejected() {
        assert!(request(f64::INFINITY).into_profile().is_err());
        assert!(request(f64::NAN).into_profile().is_err());
    }

    #[test]
    fn test_record_resolves_to_score() {
        let mut req = request(3.5);
        req.extracurriculars = ExtracurricularInput::Record(ExtracurricularRecord {
            activities: 3,
            leadership_positions: 2,
            awards: 1,
        });

        let profile = req.into_profile().unwrap();
        assert_eq!(profile.extracurriculars, Extracurriculars::Scored(10));
    }
}
