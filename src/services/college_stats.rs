use reqwest::Client;
use scraper::{Html, Selector};
use std::str::FromStr;
use std::time::Duration;

use crate::config::FetchSettings;
use crate::models::{CollegeCriteria, ScoreRange};
use crate::services::source::{CriteriaSource, SourceError};

/// Element ids expected on a college stats page
pub mod fields {
    pub const GPA_MIN: &str = "gpaMin";
    pub const GPA_MAX: &str = "gpaMax";
    pub const SAT_MIN: &str = "satMin";
    pub const SAT_MAX: &str = "satMax";
    pub const ACT_MIN: &str = "actMin";
    pub const ACT_MAX: &str = "actMax";
    pub const REQUIRES_EXTRACURRICULARS: &str = "requiresExtracurriculars";
    pub const MIN_EXTRA_SCORE: &str = "minExtraScore";
}

/// Client for the college stats web page
///
/// Each call performs a single GET with no retry and no caching. Failures
/// are returned to the caller, which decides whether to fall back.
pub struct CollegeStatsClient {
    base_url: String,
    client: Client,
}

impl CollegeStatsClient {
    /// Create a client with the transport's default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_options(base_url.into(), None, None)
    }

    pub fn from_settings(settings: &FetchSettings) -> Result<Self, SourceError> {
        Self::with_options(
            settings.base_url.clone(),
            settings.timeout_secs,
            settings.user_agent.as_deref(),
        )
    }

    fn with_options(
        base_url: String,
        timeout_secs: Option<u64>,
        user_agent: Option<&str>,
    ) -> Result<Self, SourceError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stats page URL for a college, with the name URL-encoded
    pub fn request_url(&self, college: &str) -> String {
        format!(
            "{}?college={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(college)
        )
    }

    /// Fetch and parse the stats page for `college`
    pub async fn fetch(&self, college: &str) -> Result<CollegeCriteria, SourceError> {
        let url = self.request_url(college);
        tracing::debug!("Requesting {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Stats page for {} returned {}", college, status);
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        let criteria = parse_stats_page(&body)?;

        tracing::debug!("Parsed criteria for {}: {:?}", college, criteria);

        Ok(criteria)
    }
}

impl CriteriaSource for CollegeStatsClient {
    async fn resolve(&self, college: &str) -> Result<CollegeCriteria, SourceError> {
        self.fetch(college).await
    }
}

/// Parse a stats page into a validated criteria record
///
/// The minimum extracurricular score is only read when the requirement
/// indicator says `yes`; otherwise it is 0.
pub fn parse_stats_page(html: &str) -> Result<CollegeCriteria, SourceError> {
    let document = Html::parse_document(html);

    let gpa = ScoreRange::new(
        number_field::<f64>(&document, fields::GPA_MIN)?,
        number_field::<f64>(&document, fields::GPA_MAX)?,
    );
    let sat = ScoreRange::new(
        number_field::<u32>(&document, fields::SAT_MIN)?,
        number_field::<u32>(&document, fields::SAT_MAX)?,
    );
    let act = ScoreRange::new(
        number_field::<u32>(&document, fields::ACT_MIN)?,
        number_field::<u32>(&document, fields::ACT_MAX)?,
    );

    let requires_extracurriculars =
        text_field(&document, fields::REQUIRES_EXTRACURRICULARS)?.eq_ignore_ascii_case("yes");

    let min_extracurricular_score = if requires_extracurriculars {
        number_field::<u32>(&document, fields::MIN_EXTRA_SCORE)?
    } else {
        0
    };

    let criteria = CollegeCriteria {
        gpa,
        sat,
        act,
        requires_extracurriculars,
        min_extracurricular_score,
    };

    Ok(criteria.checked()?)
}

fn text_field(document: &Html, id: &'static str) -> Result<String, SourceError> {
    let selector = Selector::parse(&format!("#{}", id))
        .map_err(|_| SourceError::MissingField(id))?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .ok_or(SourceError::MissingField(id))
}

fn number_field<T: FromStr>(document: &Html, id: &'static str) -> Result<T, SourceError> {
    let text = text_field(document, id)?;
    text.parse::<T>().map_err(|_| SourceError::InvalidNumber {
        field: id,
        value: text,
    })
}
