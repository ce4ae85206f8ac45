// Command exports
pub mod chances;
pub mod input;
pub mod lookup;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{CollegeEntry, Settings};
use crate::core::Chancer;
use crate::models::{Assessment, CriteriaError, Report, StudentProfile};
use crate::services::SourceError;
use input::{InputError, Prompter};

/// Errors surfaced at the command-line boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render college table: {0}")]
    Toml(#[from] toml::ser::Error),
}

#[derive(Parser, Debug)]
#[command(name = "college-chancer")]
#[command(about = "Estimate admission chances against college criteria", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to config/local.toml)
    #[arg(long, global = true, env = "CHANCER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of verdict lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate against every college in the criteria table
    Chances(chances::ChancesArgs),
    /// Fetch one college's stats online and evaluate against them
    Lookup(lookup::LookupArgs),
    /// Print the active college table as TOML
    Colleges,
}

/// Academic scores shared by every evaluation command
#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Grade point average
    #[arg(long)]
    pub gpa: Option<f64>,

    /// SAT score
    #[arg(long)]
    pub sat: Option<u32>,

    /// ACT score
    #[arg(long)]
    pub act: Option<u32>,
}

impl ScoreArgs {
    /// Take scores from flags, prompting for any that are missing
    pub fn collect<R: BufRead + ?Sized, W: Write + ?Sized>(
        &self,
        prompter: &mut Prompter<'_, R, W>,
    ) -> Result<(f64, u32, u32), InputError> {
        let gpa = prompter.number_or_ask(self.gpa, "Enter your GPA: ", "GPA")?;
        let sat = prompter.number_or_ask(self.sat, "Enter your SAT score: ", "SAT score")?;
        let act = prompter.number_or_ask(self.act, "Enter your ACT score: ", "ACT score")?;
        Ok((gpa, sat, act))
    }
}

/// Dispatch a parsed command line
pub async fn run<R: BufRead, W: Write>(
    cli: Cli,
    mut settings: Settings,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let chancer = Chancer::default();

    match cli.command {
        Commands::Chances(args) => {
            let table = settings.static_table()?;
            tracing::info!("Evaluating against {} colleges", table.len());
            chances::run(&args, &table, &chancer, cli.json, input, output)
        }
        Commands::Lookup(args) => {
            if let Some(base_url) = &args.base_url {
                settings.fetch.base_url = base_url.clone();
            }
            lookup::run(&args, &settings.fetch, &chancer, cli.json, input, output).await
        }
        Commands::Colleges => write_college_table(&settings, output),
    }
}

#[derive(Serialize)]
struct CollegeTable {
    colleges: Vec<CollegeEntry>,
}

fn write_college_table<W: Write>(settings: &Settings, output: &mut W) -> Result<(), AppError> {
    let table = settings.static_table()?;
    let colleges = table
        .lookup_all()
        .iter()
        .map(|(name, criteria)| CollegeEntry::new(name.as_str(), criteria))
        .collect();

    let rendered = toml::to_string_pretty(&CollegeTable { colleges })?;
    write!(output, "{}", rendered)?;
    Ok(())
}

fn write_report<W: Write>(
    output: &mut W,
    profile: StudentProfile,
    extracurricular_score: Option<u32>,
    assessments: Vec<Assessment>,
) -> Result<(), AppError> {
    let report = Report {
        evaluated_at: chrono::Utc::now(),
        profile,
        extracurricular_score,
        assessments,
    };

    writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
