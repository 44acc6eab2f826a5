//! Billrate command-line calculator.
//!
//! Usage:
//!   billrate calculate --bill 100=1 --bill 50=2   - Value bills at the saved rates
//!   billrate settings show                         - Print the saved rates
//!   billrate settings set --base-rate 301.50       - Change and save rates
//!   billrate settings reset                        - Restore the default rates

mod args;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use billrate_core::exchange::{
    ExchangeCalculator, RateConfiguration, ReportFormatter, bill_counts_from_fields,
    format_currency, parse_base_rate, parse_deduction,
};
use billrate_core::settings::{FileStore, SettingsStore};
use billrate_shared::AppConfig;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{CalculateArgs, Cli, Command, RateArgs, SettingsCommand};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let path = cli
        .settings_file
        .clone()
        .unwrap_or_else(|| config.storage.path.clone());
    debug!(path = %path, key = %config.storage.key, "using settings file");
    let mut store = SettingsStore::with_key(FileStore::new(path), config.storage.key.clone());

    match cli.command {
        Command::Calculate(args) => calculate(&config, &store, &args),
        Command::Settings(SettingsCommand::Show) => {
            show_settings(&config, &store.load_or_default());
            Ok(())
        }
        Command::Settings(SettingsCommand::Set(rates)) => {
            let mut current = store.load_or_default();
            apply_overrides(&mut current, &rates)?;
            store.save(&current)?;
            println!("Settings saved successfully!");
            show_settings(&config, &current);
            Ok(())
        }
        Command::Settings(SettingsCommand::Reset { yes }) => {
            if !yes && !confirm("Are you sure you want to reset all settings to default values?")? {
                println!("Reset cancelled.");
                return Ok(());
            }
            store.reset()?;
            println!("Settings reset to default values!");
            Ok(())
        }
    }
}

fn calculate(
    config: &AppConfig,
    store: &SettingsStore<FileStore>,
    args: &CalculateArgs,
) -> anyhow::Result<()> {
    let mut rates = store.load_or_default();
    apply_overrides(&mut rates, &args.rates)?;

    let counts = bill_counts_from_fields(
        args.bills
            .iter()
            .map(|(denomination, raw)| (*denomination, raw.as_str())),
    );
    let result = ExchangeCalculator::compute_breakdown(&counts, &rates);
    info!(
        bills = counts.total_bills(),
        total = %result.total,
        "calculation complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let formatter = ReportFormatter::new(config.currency.base, config.currency.quote);
        for line in formatter.render(&result) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Applies raw rate fields from the command line on top of `rates`.
fn apply_overrides(rates: &mut RateConfiguration, args: &RateArgs) -> anyhow::Result<()> {
    if let Some(raw) = &args.base_rate {
        rates.set_base_rate(parse_base_rate(raw));
    }
    for (denomination, raw) in &args.deductions {
        rates.set_deduction(*denomination, parse_deduction(raw))?;
    }
    Ok(())
}

fn show_settings(config: &AppConfig, rates: &RateConfiguration) {
    let quote = config.currency.quote;
    let base = config.currency.base;
    println!(
        "{}100: rate {}",
        base.symbol(),
        format_currency(quote, rates.base_rate())
    );
    for (denomination, deduction) in rates.deductions() {
        println!(
            "{}{denomination}: deduction {:.2}, rate {}",
            base.symbol(),
            deduction,
            format_currency(quote, ExchangeCalculator::effective_rate(denomination, rates))
        );
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
