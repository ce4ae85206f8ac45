// Core algorithm exports
pub mod chancer;
pub mod evaluator;
pub mod scoring;

pub use chancer::Chancer;
pub use evaluator::{evaluate, explain, CriteriaCheck};
pub use scoring::extracurricular_score;
