//! tabsplit CLI
//!
//! Splits a bill evenly and works out tips from the command line.
//!
//! ```sh
//! tabsplit split 100 5
//! tabsplit tip-per-person 100 4 --tip 15
//! tabsplit tip-by-meal --tip 10 Rick=50 Morty=30
//! tabsplit --json tip-by-meal Rick=50 Morty=30
//! ```

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tabsplit_core::bill::{BillCalculator, PersonLedger};
use tabsplit_shared::config::LoggingConfig;
use tabsplit_shared::{AppConfig, AppError, AppResult, Money, Percentage};

use crate::output::Outcome;

/// Split a bill and work out tips.
#[derive(Parser, Debug)]
#[command(name = "tabsplit", version, about)]
struct Cli {
    /// Path to a configuration file (TOML).
    #[arg(short, long, env = "TABSPLIT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the log filter (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split an amount evenly between people.
    Split {
        /// Total amount of the bill.
        #[arg(allow_negative_numbers = true)]
        amount: Money,
        /// Number of people sharing it.
        #[arg(allow_negative_numbers = true)]
        people: i32,
    },
    /// Split a flat-rate tip evenly between patrons.
    TipPerPerson {
        /// Total price of the bill.
        #[arg(allow_negative_numbers = true)]
        total: Money,
        /// Number of patrons sharing the tip.
        #[arg(allow_negative_numbers = true)]
        patrons: i32,
        /// Tip rate in percent (defaults to the configured rate).
        #[arg(short, long, allow_negative_numbers = true)]
        tip: Option<Percentage>,
    },
    /// Share a tip in proportion to what each person ordered.
    TipByMeal {
        /// Tip rate in percent (defaults to the configured rate).
        #[arg(short, long, allow_negative_numbers = true)]
        tip: Option<Percentage>,
        /// Meal costs as NAME=COST.
        #[arg(value_parser = parse_diner)]
        diners: Vec<(String, Money)>,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::from(e);
            eprintln!("error[{}]: {err}", err.error_code());
            return exit_code(&err);
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }

    init_tracing(&config.logging, cli.log_level.is_some());

    match run(&cli, &config) {
        Ok(outcome) => {
            if cli.json {
                println!("{}", outcome.to_json());
            } else {
                print!("{outcome}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "Calculation failed");
            match err.downcast_ref::<AppError>() {
                Some(app) => {
                    eprintln!("error[{}]: {app}", app.error_code());
                    exit_code(app)
                }
                None => {
                    eprintln!("error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Installs the global subscriber; logs go to stderr so stdout stays clean.
///
/// `RUST_LOG` wins over the configured level unless the level was forced
/// on the command line.
fn init_tracing(logging: &LoggingConfig, forced: bool) {
    let filter = if forced {
        EnvFilter::new(&logging.level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<Outcome> {
    let default_tip = config.defaults.tip_percentage;

    let outcome = match &cli.command {
        Command::Split { amount, people } => {
            let share = BillCalculator::split_evenly(*amount, *people)
                .map_err(AppError::from)
                .context("splitting bill")?;
            Outcome::Share(share)
        }
        Command::TipPerPerson {
            total,
            patrons,
            tip,
        } => {
            let rate = tip.unwrap_or(default_tip);
            info!(%rate, "Splitting tip evenly");
            let share = BillCalculator::split_tip_evenly(*total, *patrons, rate)
                .map_err(AppError::from)
                .context("splitting tip")?;
            Outcome::Share(share)
        }
        Command::TipByMeal { tip, diners } => {
            let rate = tip.unwrap_or(default_tip);
            let ledger = build_ledger(diners)?;
            info!(%rate, diners = ledger.len(), "Allocating tip by meal cost");
            let tips = BillCalculator::allocate_tip_by_meal_cost(&ledger, rate)
                .map_err(AppError::from)
                .context("allocating tip")?;
            Outcome::Allocation(tips)
        }
    };

    debug!(?outcome, "Calculation finished");
    Ok(outcome)
}

/// Builds a ledger, rejecting a name given twice.
fn build_ledger(diners: &[(String, Money)]) -> AppResult<PersonLedger> {
    let mut ledger = PersonLedger::new();
    for (name, cost) in diners {
        if ledger.insert(name.clone(), *cost).is_some() {
            return Err(AppError::Validation(format!("Duplicate diner: {name}")));
        }
    }
    Ok(ledger)
}

fn parse_diner(s: &str) -> Result<(String, Money), String> {
    let (name, cost) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COST, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{s}'"));
    }
    Ok((name.to_string(), cost.parse()?))
}

fn exit_code(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
