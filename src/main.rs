use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fairlend::config::AppConfig;
use fairlend::error::AppError;
use fairlend::telemetry;
use fairlend::workflows::lending::{
    default_subjects, extractor, mitigation_report, render_bias_report, validate_profile,
    BiasProbe, EvaluationConfig, EvaluationEngine, EvaluationOutcome, FinancialProfile,
    LoanApplication, ProbeArtifact,
};
use tracing::{info, warn};

use fairlend::workflows::lending::extractor::defaults;

#[derive(Parser, Debug)]
#[command(
    name = "fairlend",
    about = "Evaluate loan applications and probe the decision engine for bias",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application and print the decision trail
    Evaluate(EvaluateArgs),
    /// Run the differential bias probe and write its artifacts
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Free-text application description; fields are extracted best-effort
    #[arg(long)]
    prompt: Option<String>,

    #[command(flatten)]
    financials: FinancialArgs,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    #[command(flatten)]
    financials: FinancialArgs,

    /// Override the configured path for the JSON results artifact
    #[arg(long)]
    results_out: Option<PathBuf>,

    /// Override the configured path for the mitigation report
    #[arg(long)]
    mitigation_out: Option<PathBuf>,
}

/// Financial fields shared by both subcommands; defaults mirror the
/// extractor's fallback values.
#[derive(Args, Debug)]
struct FinancialArgs {
    #[arg(long, default_value_t = defaults::CREDIT_SCORE)]
    credit_score: u16,
    #[arg(long, default_value_t = defaults::ANNUAL_INCOME)]
    annual_income: f64,
    #[arg(long, default_value_t = defaults::LOAN_AMOUNT)]
    loan_amount: f64,
    #[arg(long, default_value_t = defaults::DTI_RATIO)]
    dti_ratio: f64,
    /// Employment length in years (probe prompts cannot carry an override)
    #[arg(long, default_value_t = defaults::EMPLOYMENT_YEARS)]
    employment_years: f64,
    /// Delinquencies in the last 24 months (probe prompts cannot carry an override)
    #[arg(long, default_value_t = defaults::DELINQUENCIES)]
    delinquencies: u8,
    /// Credit history in years (probe prompts cannot carry an override)
    #[arg(long, default_value_t = defaults::CREDIT_HISTORY_YEARS)]
    credit_history_years: f64,
}

impl FinancialArgs {
    fn profile(&self) -> FinancialProfile {
        FinancialProfile {
            credit_score: self.credit_score,
            annual_income: self.annual_income,
            loan_amount: self.loan_amount,
            debt_to_income_ratio: self.dti_ratio,
            employment_length_years: self.employment_years,
            delinquencies_24m: self.delinquencies,
            credit_history_years: self.credit_history_years,
        }
    }
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Probe(args) => run_probe(args, &config),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let application = match args.prompt {
        Some(prompt) => extractor::extract(&prompt),
        None => LoanApplication::from_financials(args.financials.profile()),
    };

    let engine = EvaluationEngine::new(EvaluationConfig::default());
    let outcome = engine.evaluate(&application)?;

    render_evaluation(&application, &outcome);
    Ok(())
}

fn run_probe(args: ProbeArgs, config: &AppConfig) -> Result<(), AppError> {
    let base = args.financials.profile();
    validate_profile(&base)?;

    let unextractable = extractor::unextractable_overrides(&base);
    if !unextractable.is_empty() {
        warn!(
            fields = ?unextractable,
            "overrides for these fields are not recovered from synthesized prompts; \
             subjects are evaluated with the extraction defaults instead"
        );
    }

    let subjects = default_subjects();
    info!(subjects = subjects.len(), "running bias probe");

    let probe = BiasProbe::new(EvaluationEngine::new(EvaluationConfig::default()));
    let analysis = probe.run(&base, &subjects);

    let mitigation = mitigation_report(analysis.bias_detected, &analysis.bias_details);

    println!("{}", render_bias_report(&analysis));
    println!();
    println!("{mitigation}");

    let results_path = args
        .results_out
        .unwrap_or_else(|| config.artifacts.results_path.clone());
    let mitigation_path = args
        .mitigation_out
        .unwrap_or_else(|| config.artifacts.mitigation_path.clone());

    let artifact = ProbeArtifact::new(analysis);
    fs::write(&results_path, artifact.to_json()?)?;
    fs::write(&mitigation_path, mitigation)?;

    info!(results = %results_path.display(), mitigation = %mitigation_path.display(), "probe artifacts written");
    Ok(())
}

fn render_evaluation(application: &LoanApplication, outcome: &EvaluationOutcome) {
    if let Some(name) = &application.applicant.applicant_name {
        println!("Applicant: {name}");
    }
    println!("Decision: {}", outcome.decision.label());
    println!("Rationale: {}", outcome.rationale);
    println!("Risk Score: {:.2}/100", outcome.breakdown.risk_score);

    println!("\nChecks");
    for (name, passed) in outcome.breakdown.checks() {
        let status = if passed { "pass" } else { "fail" };
        println!("- {name}: {status}");
    }
}
