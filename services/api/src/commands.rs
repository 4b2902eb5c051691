use clap::Args;
use credit_path::config::AppConfig;
use credit_path::error::AppError;
use credit_path::risk::{ApplicantProfile, RiskEngine};
use credit_path::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Display name for the applicant
    #[arg(long, default_value = "Unknown")]
    pub(crate) name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: i64,
    #[arg(long)]
    pub(crate) income: f64,
    #[arg(long)]
    pub(crate) loan_amount: f64,
    #[arg(long)]
    pub(crate) credit_score: f64,
    /// Debt-to-income ratio in percentage points
    #[arg(long)]
    pub(crate) debt_to_income_ratio: f64,
    #[arg(long)]
    pub(crate) existing_loans: i64,
    /// Pin the scoring jitter to zero for reproducible output
    #[arg(long)]
    pub(crate) no_jitter: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Delimited file whose first line is a header
    pub(crate) path: PathBuf,
}

/// Logs go to stderr so stdout carries only the JSON result.
fn prepare_engine(no_jitter: bool) -> Result<RiskEngine, AppError> {
    let mut config = AppConfig::load()?;
    if no_jitter {
        config.scoring.jitter = false;
    }
    telemetry::init(&config.telemetry)?;
    Ok(RiskEngine::from_config(&config.scoring))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = prepare_engine(args.no_jitter)?;

    let profile = ApplicantProfile {
        name: args.name,
        age: args.age,
        income: args.income,
        loan_amount: args.loan_amount,
        credit_score: args.credit_score,
        debt_to_income_ratio: args.debt_to_income_ratio,
        existing_loans: args.existing_loans,
    };

    let verdict = engine.score(&profile);
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = prepare_engine(false)?;

    let bytes = std::fs::read(&args.path)?;
    let text = String::from_utf8_lossy(&bytes);
    let result = engine.score_batch(&text);

    if result.is_ok() {
        eprintln!(
            "Scored {} row(s) from {}; batch percentages are simulated and indicative only",
            result.count(),
            args.path.display()
        );
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
