use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use job_insights::insights;
use job_insights::{load_file, load_with_format, FieldValue, JobDataset, SourceFormat};

/// Descriptive queries over a job listings file
#[derive(Parser, Debug)]
#[command(name = "job-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Job listings file (.csv, .json, .parquet)
    path: PathBuf,

    /// Read the file as this format instead of guessing from its extension
    #[arg(long, value_enum)]
    format: Option<SourceFormat>,

    /// Print 0 / 100000000 instead of null when no salary qualifies
    #[arg(long)]
    legacy_sentinels: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distinct job types
    JobTypes,
    /// Distinct non-empty industries
    Industries,
    /// Ids of jobs with the given job type
    ByJobType { job_type: String },
    /// Ids of jobs in the given industry
    ByIndustry { industry: String },
    /// Highest max_salary
    MaxSalary,
    /// Lowest min_salary
    MinSalary,
    /// Jobs whose salary range contains the given salary
    SalaryRange {
        #[arg(allow_negative_numbers = true)]
        salary: i64,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let dataset = match cli.format {
        Some(format) => load_with_format(&cli.path, format)?,
        None => load_file(&cli.path)?,
    };
    answer(&cli.command, &dataset, cli.legacy_sentinels)
}

fn answer(command: &Command, dataset: &JobDataset, legacy_sentinels: bool) -> Result<()> {
    let rows = &dataset.rows;
    match command {
        Command::JobTypes => print_json(&insights::unique_job_types(rows)),
        Command::Industries => print_json(&insights::unique_industries(rows)),
        Command::ByJobType { job_type } => {
            print_json(&insights::filter_by_job_type(rows, job_type))
        }
        Command::ByIndustry { industry } => {
            print_json(&insights::filter_by_industry(rows, industry))
        }
        Command::MaxSalary => {
            let top = insights::highest_max_salary(rows);
            if top.is_none() {
                log::warn!("No row has a numeric max_salary");
            }
            if legacy_sentinels {
                print_json(&insights::max_salary(rows))
            } else {
                print_json(&top)
            }
        }
        Command::MinSalary => {
            let low = insights::lowest_min_salary(rows);
            if low.is_none() {
                log::warn!("No row has a numeric min_salary");
            }
            if legacy_sentinels {
                print_json(&insights::min_salary(rows))
            } else {
                print_json(&low)
            }
        }
        Command::SalaryRange { salary } => {
            let salary = FieldValue::Integer(*salary);
            let matches = insights::filter_rows_by_salary_range(rows, &salary);
            log::info!("{} of {} jobs match salary {salary}", matches.len(), rows.len());
            print_json(&matches)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing result")?;
    println!("{text}");
    Ok(())
}
