mod args;
mod cli;

use anyhow::Result;
use budgetplan::Config;

pub(crate) use args::Args;
use args::Command;

pub(crate) fn as_cli(args: &Args, config: &Config) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut out = std::io::stdout().lock();
    match &args.command {
        Command::Payoff(payoff) => cli::cli_payoff(&mut out, payoff, config, today),
        Command::Fund(fund) => cli::cli_fund(&mut out, fund, config, today),
        Command::Budget(budget) => cli::cli_budget(&mut out, budget),
        Command::Expenses(expenses) => cli::cli_expenses(&mut out, expenses),
        Command::Goals(goals) => cli::cli_goals(&mut out, goals, today),
    }
}
