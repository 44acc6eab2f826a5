//! Command-line arguments.

use std::str::FromStr;

use billrate_shared::Denomination;
use clap::{Args, Parser, Subcommand};

/// Cash exchange calculator for bill denominations.
#[derive(Debug, Parser)]
#[command(name = "billrate")]
#[command(about = "Value a stack of bills at per-denomination exchange rates")]
pub struct Cli {
    /// Settings file to use instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub settings_file: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate the value of the given bills.
    Calculate(CalculateArgs),
    /// Show, change or reset the saved rates.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

/// Arguments for `calculate`.
#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Bills of one denomination, e.g. `--bill 100=3`.
    #[arg(short, long = "bill", value_name = "DENOMINATION=COUNT", value_parser = parse_field)]
    pub bills: Vec<(Denomination, String)>,

    #[command(flatten)]
    pub rates: RateArgs,

    /// Print the result as JSON instead of display lines.
    #[arg(long)]
    pub json: bool,
}

/// Rate overrides shared by `calculate` and `settings set`.
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Rate for the 100 bill.
    #[arg(long, value_name = "RATE")]
    pub base_rate: Option<String>,

    /// Deduction for a smaller bill, e.g. `--deduction 50=2.50`.
    #[arg(long = "deduction", value_name = "DENOMINATION=AMOUNT", value_parser = parse_field)]
    pub deductions: Vec<(Denomination, String)>,
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the saved rates.
    Show,
    /// Change and save rates. Fields not given keep their saved value.
    Set(RateArgs),
    /// Delete the saved rates.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Parses `DENOMINATION=VALUE`. The value is kept raw for lenient coercion.
fn parse_field(raw: &str) -> Result<(Denomination, String), String> {
    let (denomination, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DENOMINATION=VALUE, got '{raw}'"))?;
    Ok((Denomination::from_str(denomination)?, value.to_string()))
}
