use clap::Args;
use std::io::{BufRead, Write};

use super::input::{InputError, Prompter};
use super::{write_report, AppError, ScoreArgs};
use crate::config::FetchSettings;
use crate::core::Chancer;
use crate::models::{Assessment, ExtracurricularInput, ExtracurricularRecord, ProfileRequest, Verdict};
use crate::services::CollegeStatsClient;

#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    #[command(flatten)]
    pub scores: ScoreArgs,

    /// Number of extracurricular activities
    #[arg(long)]
    pub activities: Option<u32>,

    /// Number of leadership positions held
    #[arg(long)]
    pub leadership: Option<u32>,

    /// Number of awards or honors received
    #[arg(long)]
    pub awards: Option<u32>,

    /// College to look up
    #[arg(long)]
    pub college: Option<String>,

    /// Override the stats page base URL
    #[arg(long, env = "CHANCER_BASE_URL")]
    pub base_url: Option<String>,
}

impl LookupArgs {
    fn has_all_counts(&self) -> bool {
        self.activities.is_some() && self.leadership.is_some() && self.awards.is_some()
    }
}

/// Fetch one college's criteria and evaluate the profile against it
///
/// With `json` set, prompts go to stderr so `output` carries only the report.
pub async fn run<R: BufRead, W: Write>(
    args: &LookupArgs,
    fetch: &FetchSettings,
    chancer: &Chancer,
    json: bool,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let (request, score, college) = {
        let mut stderr = std::io::stderr();
        let prompts: &mut dyn Write = if json { &mut stderr } else { &mut *output };
        let mut prompter = Prompter::new(input, prompts);
        let (gpa, sat, act) = args.scores.collect(&mut prompter)?;

        if !args.has_all_counts() {
            prompter.say("\nEnter details for your extracurricular activities:")?;
        }
        let record = ExtracurricularRecord {
            activities: prompter.number_or_ask(
                args.activities,
                "Number of extracurricular activities you are involved in: ",
                "activity count",
            )?,
            leadership_positions: prompter.number_or_ask(
                args.leadership,
                "Number of leadership positions held: ",
                "leadership position count",
            )?,
            awards: prompter.number_or_ask(
                args.awards,
                "Number of awards or honors received: ",
                "award count",
            )?,
        };
        let score = record.score();
        if !json {
            prompter.say(&format!("Your computed extracurricular score is: {}", score))?;
        }

        let college = match &args.college {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            Some(_) => return Err(InputError::Empty("college name").into()),
            None => prompter.ask_text(
                "\nEnter the college name you are interested in: ",
                "college name",
            )?,
        };

        let request = ProfileRequest {
            gpa,
            sat,
            act,
            extracurriculars: ExtracurricularInput::Record(record),
        };
        (request, score, college)
    };
    let profile = request.into_profile().map_err(InputError::from)?;

    let client = CollegeStatsClient::from_settings(fetch)?;
    if !json {
        writeln!(output, "\nSearching online for stats for {}...", college)?;
        writeln!(output, "Connecting to {}", client.request_url(&college))?;
    }

    let assessment = chancer.assess(&client, &profile, &college).await?;

    if json {
        return write_report(output, profile, Some(score), vec![assessment]);
    }

    if let Some(reason) = &assessment.fallback_reason {
        writeln!(
            output,
            "Failed to fetch or parse online data for {} ({}). Using fallback default values.",
            college, reason
        )?;
    }
    writeln!(output, "{}", verdict_line(&assessment))?;

    Ok(())
}

pub fn verdict_line(assessment: &Assessment) -> String {
    match assessment.verdict {
        Verdict::Favorable => format!(
            "Based on the current stats, you have a good chance at {}!",
            assessment.college
        ),
        Verdict::Reach => format!(
            "Based on the current stats, {} might be a reach for you.",
            assessment.college
        ),
    }
}
