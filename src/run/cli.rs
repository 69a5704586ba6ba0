use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use std::io::Write;

use budgetplan::format::{
    format_amount, format_percent, full_date_label, month_label, short_month_label, truncate,
};
use budgetplan::import::{lenient_amount, load_budget_plan, load_debts, load_expenses, load_goals};
use budgetplan::models::{Debt, EssentialExpenses, Expense, Goal, Scenario, Strategy};
use budgetplan::payoff::{self, Comparison, PayoffResult, MAX_MONTHS};
use budgetplan::planner::{self, BudgetSummary, ExpenseStats};
use budgetplan::projection::{self, ProjectionResult};
use budgetplan::Config;

use super::args::{BudgetArgs, ExpensesArgs, FundArgs, GoalsArgs, PayoffArgs};

const RULE_WIDTH: usize = 56;

fn rule(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
    Ok(())
}

fn row(out: &mut impl Write, label: &str, value: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "  {label:<22}{value}")?;
    Ok(())
}

// ── payoff ───────────────────────────────────────────────────

pub(crate) fn cli_payoff(
    out: &mut impl Write,
    args: &PayoffArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let debts = load_debts(&args.debts)?;
    let extra = match &args.extra {
        Some(raw) => lenient_amount(raw, "extra payment"),
        None => config.extra_payment,
    };
    let strategy = args.strategy.unwrap_or(config.strategy);
    info!(
        "Planning {} debts with {} extra per month, {strategy} order",
        debts.len(),
        format_amount(extra)
    );

    for debt in debts.iter().filter(|d| d.is_underwater()) {
        warn!(
            "{}: minimum payment {} does not cover {} of monthly interest, the balance will grow",
            debt.name,
            format_amount(debt.minimum_payment),
            format_amount(debt.monthly_interest())
        );
    }

    write_payoff(out, &debts, extra, strategy, args.schedule, today)
}

fn write_payoff(
    out: &mut impl Write,
    debts: &[Debt],
    extra: Decimal,
    strategy: Strategy,
    show_history: bool,
    today: NaiveDate,
) -> Result<()> {
    let comparison = Comparison::run(debts, extra);
    let custom;
    let chosen = match comparison.get(strategy) {
        Some(result) => result,
        None => {
            custom = payoff::simulate(debts, extra, strategy);
            &custom
        }
    };

    if chosen.order.is_empty() {
        writeln!(out, "No debts with a balance to pay off.")?;
        return Ok(());
    }

    writeln!(out, "Debt Payoff Plan: {}", strategy.title())?;
    rule(out)?;
    if chosen.converged {
        row(out, "Debt-free in:", format!("{} months", chosen.total_months))?;
    } else {
        writeln!(
            out,
            "  Still in debt after {} months: the payments never clear the balances.",
            chosen.total_months
        )?;
    }
    row(out, "Total interest:", format_amount(chosen.total_interest_paid))?;
    row(out, "Monthly payment:", format_amount(chosen.monthly_payment))?;

    writeln!(out)?;
    writeln!(out, "Strategy Comparison:")?;
    writeln!(
        out,
        "  {:<12} {:>8} {:>16} {:>16}",
        "Strategy", "Months", "Total Interest", "Interest Saved"
    )?;
    let cheaper = comparison.cheaper();
    for (kind, label, result) in [
        (Strategy::Avalanche, "Avalanche", &comparison.avalanche),
        (Strategy::Snowball, "Snowball", &comparison.snowball),
    ] {
        let marker = if kind == strategy { '*' } else { ' ' };
        // Savings belong to the cheaper strategy only
        let saved = if kind == cheaper {
            format_amount(comparison.interest_saved())
        } else {
            String::new()
        };
        writeln!(
            out,
            "{marker} {label:<12} {:>8} {:>16} {saved:>16}",
            months_text(result),
            format_amount(result.total_interest_paid),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Payoff Schedule:")?;
    for (i, event) in chosen.payoff_schedule.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<24} {:<16} month {:>3}   original balance {}",
            i + 1,
            truncate(&event.name, 24),
            month_label(today, event.month),
            event.month,
            format_amount(event.original_balance)
        )?;
    }
    for name in chosen
        .order
        .iter()
        .filter(|name| chosen.payoff_month(name).is_none())
    {
        writeln!(
            out,
            "   -  {:<24} not paid off within {MAX_MONTHS} months",
            truncate(name, 24)
        )?;
    }

    let minimums = chosen.monthly_payment - extra;
    writeln!(out)?;
    writeln!(out, "Key Insights:")?;
    if chosen.converged {
        row(
            out,
            "Debt-Free Date:",
            full_date_label(today, chosen.debt_free_month()),
        )?;
    } else {
        row(
            out,
            "Debt-Free Date:",
            format!("not within {MAX_MONTHS} months"),
        )?;
    }
    row(
        out,
        "Total Amount Paid:",
        format!("{} (principal + interest)", format_amount(chosen.total_paid)),
    )?;
    row(
        out,
        "Monthly Commitment:",
        format!(
            "{} ({} minimum + {} extra)",
            format_amount(chosen.monthly_payment),
            format_amount(minimums),
            format_amount(extra)
        ),
    )?;
    row(out, "Strategy Used:", strategy.title())?;

    if show_history {
        write_history(out, chosen, today)?;
    }
    Ok(())
}

fn months_text(result: &PayoffResult) -> String {
    if result.converged {
        result.total_months.to_string()
    } else {
        format!("{}+", result.total_months)
    }
}

fn write_history(out: &mut impl Write, result: &PayoffResult, today: NaiveDate) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Month-by-Month Balances:")?;
    let mut header = format!("  {:<9} {:>12}", "Month", "Interest");
    for name in &result.order {
        header.push_str(&format!(" {:>14}", truncate(name, 14)));
    }
    header.push_str(&format!(" {:>14}", "Remaining"));
    writeln!(out, "{header}")?;

    for record in &result.history {
        let mut line = format!(
            "  {:<9} {:>12}",
            short_month_label(today, record.month),
            format_amount(record.interest)
        );
        for balance in &record.balances {
            line.push_str(&format!(" {:>14}", format_amount(*balance)));
        }
        line.push_str(&format!(" {:>14}", format_amount(record.remaining())));
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// ── fund ─────────────────────────────────────────────────────

pub(crate) fn cli_fund(
    out: &mut impl Write,
    args: &FundArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let scenario = args.scenario.unwrap_or(config.scenario);
    let essentials = EssentialExpenses {
        housing: lenient_amount(&args.housing, "housing"),
        utilities: lenient_amount(&args.utilities, "utilities"),
        groceries: lenient_amount(&args.groceries, "groceries"),
        transportation: lenient_amount(&args.transportation, "transportation"),
        insurance: lenient_amount(&args.insurance, "insurance"),
        debt_payments: lenient_amount(&args.debt_payments, "debt payments"),
        other_essential: lenient_amount(&args.other_essential, "other essentials"),
    };
    let savings = lenient_amount(&args.savings, "current savings");
    let contribution = lenient_amount(&args.contribution, "monthly contribution");
    info!(
        "Projecting {} scenario from {} saved, {} per month",
        scenario.id(),
        format_amount(savings),
        format_amount(contribution)
    );

    let result = projection::project(
        essentials.total(),
        savings,
        contribution,
        scenario.target_months(),
    );
    write_fund(out, scenario, &result, today)
}

fn write_fund(
    out: &mut impl Write,
    scenario: Scenario,
    result: &ProjectionResult,
    today: NaiveDate,
) -> Result<()> {
    writeln!(out, "Emergency Fund: {}", scenario.title())?;
    writeln!(out, "  {}", scenario.description())?;
    rule(out)?;
    row(out, "Monthly essentials:", format_amount(result.monthly_essentials))?;
    row(
        out,
        &format!("Target ({} months):", result.target_months),
        format_amount(result.target_amount),
    )?;
    row(out, "Current savings:", format_amount(result.current_savings))?;
    row(out, "Still needed:", format_amount(result.amount_needed))?;
    row(out, "Progress:", format_percent(result.progress_percentage))?;

    writeln!(out)?;
    if result.is_funded() {
        writeln!(out, "Goal already achieved!")?;
        return Ok(());
    }
    if result.is_stalled() {
        writeln!(
            out,
            "No monthly contribution: the target is never reached at this rate."
        )?;
        return Ok(());
    }
    row(
        out,
        "Time to goal:",
        format!(
            "{} months ({})",
            result.months_to_target,
            full_date_label(today, result.months_to_target)
        ),
    )?;

    writeln!(out)?;
    writeln!(out, "Milestones:")?;
    for milestone in result.milestones() {
        let status = match (milestone.reached, milestone.months_away) {
            (true, _) => "reached".to_string(),
            (false, Some(months)) => format!(
                "in {months} months ({})",
                short_month_label(today, months)
            ),
            (false, None) => "not reachable".to_string(),
        };
        writeln!(
            out,
            "  {:>4}%  {:>14}  {status}",
            milestone.percent,
            format_amount(milestone.amount)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Timeline:")?;
    for entry in result.timeline() {
        let marker = if entry.is_target { "  target reached" } else { "" };
        writeln!(
            out,
            "  {:<9} {:>14}{marker}",
            short_month_label(today, entry.month),
            format_amount(entry.amount)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Savings Plans:")?;
    for plan in result.savings_plans() {
        writeln!(
            out,
            "  {:<17} {:>12}/month {:>5} months   {}",
            plan.kind.title(),
            format_amount(plan.monthly),
            plan.months,
            plan.kind.description()
        )?;
    }
    Ok(())
}

// ── budget ───────────────────────────────────────────────────

pub(crate) fn cli_budget(out: &mut impl Write, args: &BudgetArgs) -> Result<()> {
    let plan = load_budget_plan(&args.plan)?;
    write_budget(out, &planner::summarize(&plan))
}

fn write_budget(out: &mut impl Write, summary: &BudgetSummary) -> Result<()> {
    writeln!(out, "Budget Summary (50/30/20)")?;
    rule(out)?;
    writeln!(
        out,
        "  Total income:     {:>14}",
        format_amount(summary.total_income)
    )?;
    writeln!(
        out,
        "  Needs:            {:>14}  {:>6} of income (target 50% or less)",
        format_amount(summary.needs),
        format_percent(summary.needs_pct)
    )?;
    writeln!(
        out,
        "  Wants:            {:>14}  {:>6} of income (target 30% or less)",
        format_amount(summary.wants),
        format_percent(summary.wants_pct)
    )?;
    writeln!(
        out,
        "  Savings:          {:>14}  {:>6} of income (target 20% or more)",
        format_amount(summary.savings),
        format_percent(summary.savings_pct)
    )?;
    writeln!(
        out,
        "  Total expenses:   {:>14}",
        format_amount(summary.total_expenses)
    )?;
    writeln!(
        out,
        "  Remaining:        {:>14}",
        format_amount(summary.remaining)
    )?;

    writeln!(out)?;
    writeln!(out, "Health Score: {}/100", summary.health_score())?;
    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    for rec in summary.recommendations() {
        writeln!(out, "  - {rec}")?;
    }
    Ok(())
}

// ── expenses ─────────────────────────────────────────────────

pub(crate) fn cli_expenses(out: &mut impl Write, args: &ExpensesArgs) -> Result<()> {
    let expenses = load_expenses(&args.expenses)?;
    write_expenses(out, &expenses)
}

fn write_expenses(out: &mut impl Write, expenses: &[Expense]) -> Result<()> {
    if expenses.is_empty() {
        writeln!(out, "No expenses recorded.")?;
        return Ok(());
    }

    let stats = ExpenseStats::from_expenses(expenses);
    writeln!(out, "Expenses")?;
    rule(out)?;
    row(out, "Total spent:", format_amount(stats.total))?;
    row(out, "Transactions:", stats.count)?;
    row(out, "Average:", format_amount(stats.average))?;
    row(out, "Largest:", format_amount(stats.largest))?;

    writeln!(out)?;
    writeln!(out, "Spending by Category:")?;
    for (name, amount) in planner::totals_by_category(expenses) {
        writeln!(out, "  {:<24} {:>14}", truncate(&name, 24), format_amount(amount))?;
    }
    Ok(())
}

// ── goals ────────────────────────────────────────────────────

pub(crate) fn cli_goals(out: &mut impl Write, args: &GoalsArgs, today: NaiveDate) -> Result<()> {
    let goals = load_goals(&args.goals)?;
    write_goals(out, &goals, today)
}

fn write_goals(out: &mut impl Write, goals: &[Goal], today: NaiveDate) -> Result<()> {
    if goals.is_empty() {
        writeln!(out, "No goals set.")?;
        return Ok(());
    }

    writeln!(out, "Savings Goals")?;
    rule(out)?;
    for goal in goals {
        writeln!(
            out,
            "  {:<24} {} of {}  ({})",
            truncate(&goal.name, 24),
            format_amount(goal.current),
            format_amount(goal.target),
            format_percent(goal.progress().min(Decimal::ONE_HUNDRED))
        )?;
        let deadline = goal.target_date.format("%B %-d, %Y");
        if goal.is_overdue(today) {
            writeln!(out, "      overdue, was due {deadline}")?;
        } else {
            writeln!(
                out,
                "      {} days left to save {} (by {deadline})",
                goal.days_left(today),
                format_amount(goal.remaining())
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
