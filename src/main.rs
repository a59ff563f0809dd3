mod cli;
mod config;
mod engine;
mod error;
mod report;
mod types;

use crate::error::PlannerError;
use crate::types::report::PlanReport;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const OVER_BUDGET: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: cli::Cli) -> Result<i32, PlannerError> {
    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            if !cmd.path.exists() {
                return Err(PlannerError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(&cmd.path)?;
            let mut input = loaded.map(|cfg| cfg.snapshot()).unwrap_or_default();
            cmd.apply_overrides(&mut input);
            input.validate()?;

            let output = engine::evaluate(&input);
            let plan_report = PlanReport::new(input, output);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&plan_report, output_format)?;
            println!("{rendered}");

            if plan_report.over_budget {
                tracing::warn!(
                    total_cost = plan_report.output.total_cost,
                    budget = plan_report.input.budget,
                    "estimated cost exceeds monthly budget"
                );
                Ok(exit_code::OVER_BUDGET)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Init(cmd) => {
            if cmd.dry_run {
                print!("{}", types::config::DEFAULT_PLAN_TEMPLATE);
                return Ok(exit_code::SUCCESS);
            }
            let path = config::write_default_plan(&cmd.path, !cmd.no_overwrite)?;
            if !cli.quiet {
                println!("wrote {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Fees => {
            println!("green fees (per round):");
            for (course, membership, fees) in engine::cost::fee_schedule() {
                println!(
                    "- {:?} / {:?}: 9 holes ${:.2}, 18 holes ${:.2}",
                    course, membership, fees.nine, fees.eighteen
                );
            }
            println!("membership (monthly):");
            for membership in [
                types::snapshot::Membership::Member,
                types::snapshot::Membership::Prepaid,
            ] {
                println!(
                    "- {:?}: ${:.2}",
                    membership,
                    engine::cost::membership_fee(membership)
                );
            }
            println!("practice:");
            println!(
                "- TinCup: ${:.2} per session",
                engine::cost::TINCUP_SESSION_FEE
            );
            println!(
                "- Bgc: ${:.2} per session or ${:.2} unlimited",
                engine::cost::BGC_SESSION_FEE,
                engine::cost::BGC_UNLIMITED_FEE
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                PlannerError::InvalidInput(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
