//! Command-line interface of the budgetplan binary.

use budgetplan::models::{Scenario, Strategy};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// budgetplan: plan a debt payoff, size an emergency fund and check a monthly budget.
///
/// Amounts may be written with `$` and thousands separators. Invalid or negative amounts
/// are treated as 0 and logged as a warning.
#[derive(Debug, Parser, Clone)]
#[command(name = "budgetplan", version)]
pub(crate) struct Args {
    #[clap(flatten)]
    pub(crate) common: Common,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub(crate) struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the env_logger crate for instructions.
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    pub(crate) log_level: LevelFilter,

    /// Path to the config file. Defaults to config.json in the platform config directory.
    #[arg(long, global = true, env = "BUDGETPLAN_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Simulate paying off the debts in a CSV file and compare avalanche with snowball.
    ///
    /// The file needs balance, rate and minimum payment columns, found by header name
    /// (e.g. "Name,Balance,APR,Minimum"). Without a header row the columns are read as
    /// name, balance, rate, minimum.
    Payoff(PayoffArgs),
    /// Project how long it takes to build an emergency fund.
    Fund(FundArgs),
    /// Check a monthly budget (JSON) against the 50/30/20 rule.
    Budget(BudgetArgs),
    /// Summarize tracked expenses from a CSV file.
    Expenses(ExpensesArgs),
    /// Show progress on savings goals from a CSV file.
    Goals(GoalsArgs),
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct PayoffArgs {
    /// CSV file with one debt per row.
    pub(crate) debts: PathBuf,

    /// Monthly amount paid on top of the minimums. Defaults to the configured value.
    #[arg(long)]
    pub(crate) extra: Option<String>,

    /// Payoff order: avalanche, snowball or custom (file order).
    #[arg(long)]
    pub(crate) strategy: Option<Strategy>,

    /// Also print every month's remaining balances.
    #[arg(long)]
    pub(crate) schedule: bool,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct FundArgs {
    /// single-stable, dual-stable, variable-income or self-employed.
    #[arg(long)]
    pub(crate) scenario: Option<Scenario>,

    #[arg(long, default_value = "1500")]
    pub(crate) housing: String,

    #[arg(long, default_value = "200")]
    pub(crate) utilities: String,

    #[arg(long, default_value = "400")]
    pub(crate) groceries: String,

    #[arg(long, default_value = "300")]
    pub(crate) transportation: String,

    #[arg(long, default_value = "250")]
    pub(crate) insurance: String,

    /// Minimum payments on existing debts.
    #[arg(long, default_value = "500")]
    pub(crate) debt_payments: String,

    #[arg(long, default_value = "150")]
    pub(crate) other_essential: String,

    /// Money already set aside.
    #[arg(long, default_value = "2000")]
    pub(crate) savings: String,

    /// Amount added to the fund each month.
    #[arg(long, default_value = "400")]
    pub(crate) contribution: String,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct BudgetArgs {
    /// JSON file with monthly income and spending by category.
    pub(crate) plan: PathBuf,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct ExpensesArgs {
    /// CSV file with date, description, amount and category columns.
    pub(crate) expenses: PathBuf,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct GoalsArgs {
    /// CSV file with name, target, current and target date columns.
    pub(crate) goals: PathBuf,
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
