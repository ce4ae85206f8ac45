use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{CollegeCriteria, CriteriaError, ScoreRange};
use crate::services::StaticCriteria;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Replaces the built-in college table when non-empty
    #[serde(default)]
    pub colleges: Vec<CollegeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unset means the HTTP client's own default
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String { "https://example.com/college-stats".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

/// One row of the configured college table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeEntry {
    pub name: String,
    pub gpa: ScoreRange<f64>,
    pub sat: ScoreRange<u32>,
    pub act: ScoreRange<u32>,
    #[serde(default)]
    pub requires_extracurriculars: bool,
    #[serde(default)]
    pub min_extracurricular_score: u32,
}

impl CollegeEntry {
    pub fn new(name: impl Into<String>, criteria: &CollegeCriteria) -> Self {
        Self {
            name: name.into(),
            gpa: criteria.gpa,
            sat: criteria.sat,
            act: criteria.act,
            requires_extracurriculars: criteria.requires_extracurriculars,
            min_extracurricular_score: criteria.min_extracurricular_score,
        }
    }

    pub fn criteria(&self) -> CollegeCriteria {
        CollegeCriteria {
            gpa: self.gpa,
            sat: self.sat,
            act: self.act,
            requires_extracurriculars: self.requires_extracurriculars,
            min_extracurricular_score: self.min_extracurricular_score,
        }
    }
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. `path` if given, otherwise config/local.toml
    /// 4. Environment variables (prefixed with CHANCER__)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false));

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("config/local").required(false)),
        };

        builder
            // e.g., CHANCER__FETCH__BASE_URL -> fetch.base_url
            .add_source(
                Environment::with_prefix("CHANCER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a single file, without environment overrides
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Reject a configured college table that would fail in table mode
    fn validated(self) -> Result<Self, ConfigError> {
        self.static_table()
            .map_err(|e| ConfigError::Message(format!("invalid college table: {}", e)))?;
        Ok(self)
    }

    /// The criteria table to evaluate against in table mode
    pub fn static_table(&self) -> Result<StaticCriteria, CriteriaError> {
        if self.colleges.is_empty() {
            return Ok(StaticCriteria::builtin());
        }

        StaticCriteria::from_entries(
            self.colleges
                .iter()
                .map(|entry| (entry.name.clone(), entry.criteria())),
        )
    }
}
