// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CollegeCriteria, CriteriaError, ExtracurricularRecord, Extracurriculars, ScoreRange,
    StudentProfile, Verdict,
};
pub use requests::{ExtracurricularInput, ProfileRequest};
pub use responses::{Assessment, Report};
