use clap::Args;
use std::io::{BufRead, Write};

use super::input::{is_yes, InputError, Prompter};
use super::{write_report, AppError, ScoreArgs};
use crate::core::Chancer;
use crate::models::{Assessment, ExtracurricularInput, ProfileRequest, Verdict};
use crate::services::StaticCriteria;

#[derive(Args, Debug, Clone, Default)]
pub struct ChancesArgs {
    #[command(flatten)]
    pub scores: ScoreArgs,

    /// Strong extracurriculars (only "yes" counts)
    #[arg(long, value_name = "yes|no")]
    pub extracurriculars: Option<String>,
}

/// Evaluate the profile against every college in `table`
///
/// With `json` set, prompts go to stderr so `output` carries only the report.
pub fn run<R: BufRead, W: Write>(
    args: &ChancesArgs,
    table: &StaticCriteria,
    chancer: &Chancer,
    json: bool,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let request = {
        let mut stderr = std::io::stderr();
        let prompts: &mut dyn Write = if json { &mut stderr } else { &mut *output };
        let mut prompter = Prompter::new(input, prompts);
        let (gpa, sat, act) = args.scores.collect(&mut prompter)?;
        let strong = match &args.extracurriculars {
            Some(answer) => is_yes(answer),
            None => prompter.ask_yes_no(
                "Do you have strong extracurriculars? (yes/no): ",
                "extracurriculars",
            )?,
        };

        ProfileRequest {
            gpa,
            sat,
            act,
            extracurriculars: ExtracurricularInput::Flag(strong),
        }
    };
    let profile = request.into_profile().map_err(InputError::from)?;

    let assessments = chancer.assess_all(table, &profile);

    if json {
        return write_report(output, profile, None, assessments);
    }

    writeln!(output, "\nYour Chances for Top Colleges:")?;
    for assessment in &assessments {
        writeln!(output, "{}", verdict_line(assessment))?;
    }

    Ok(())
}

pub fn verdict_line(assessment: &Assessment) -> String {
    match assessment.verdict {
        Verdict::Favorable => format!("You have a good chance at {}", assessment.college),
        Verdict::Reach => format!("{} may be a reach for you.", assessment.college),
    }
}
