use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use super::detect::{
    detect_debt_columns, detect_expense_columns, detect_goal_columns, DebtColumns, ExpenseColumns,
    GoalColumns,
};
use crate::models::{BudgetPlan, Debt, Expense, Goal};

const DEFAULT_CATEGORY: &str = "other";

/// A CSV file split into an optional header row and data rows.
#[derive(Debug, Clone)]
pub(crate) struct CsvTable {
    pub(crate) headers: Option<Vec<String>>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            all_rows.push(record.iter().map(|s| s.trim().to_string()).collect());
        }

        if all_rows.is_empty() {
            anyhow::bail!("CSV file is empty: {}", path.display());
        }

        let headers = if looks_like_header(&all_rows[0]) {
            Some(all_rows.remove(0))
        } else {
            None
        };
        Ok(Self {
            headers,
            rows: all_rows,
        })
    }

    /// 1-based line number of a data row, counting the header.
    fn line(&self, index: usize) -> usize {
        index + 1 + usize::from(self.headers.is_some())
    }
}

/// Headers don't parse as dates or numbers.
fn looks_like_header(row: &[String]) -> bool {
    row.iter().all(|field| {
        let trimmed = field.trim();
        trimmed.is_empty()
            || (parse_decimal(trimmed).is_err()
                && NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").is_err()
                && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err())
    })
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(|s| s.trim()).unwrap_or("")
}

/// Load debts from a CSV with name, balance, rate and minimum payment columns.
pub fn load_debts(path: &Path) -> Result<Vec<Debt>> {
    let table = CsvTable::read(path)?;
    let cols = match &table.headers {
        Some(headers) => detect_debt_columns(headers).with_context(|| {
            format!(
                "{}: expected balance, rate and minimum payment columns",
                path.display()
            )
        })?,
        None => DebtColumns::default(),
    };

    let debts: Vec<Debt> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line = table.line(i);
            let name = match cell(row, cols.name) {
                "" => format!("Debt {}", i + 1),
                name => name.to_string(),
            };
            Debt::new(
                name,
                lenient_amount(cell(row, cols.balance), &format!("row {line} balance")),
                lenient_amount(cell(row, cols.rate), &format!("row {line} interest rate")),
                lenient_amount(cell(row, cols.minimum), &format!("row {line} minimum payment")),
            )
        })
        .collect();

    info!("Loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}

/// Load tracked expenses from a CSV with date, description, amount and category columns.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    let table = CsvTable::read(path)?;
    let cols = match &table.headers {
        Some(headers) => detect_expense_columns(headers).with_context(|| {
            format!("{}: expected date and amount columns", path.display())
        })?,
        None => ExpenseColumns::default(),
    };

    let mut expenses = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let line = table.line(i);
        let date_str = cell(row, cols.date);
        let date = parse_date(date_str, "%Y-%m-%d")
            .with_context(|| format!("Row {line}: failed to parse date '{date_str}'"))?;
        let category = match cols.category.map(|c| cell(row, c)) {
            Some("") | None => DEFAULT_CATEGORY.to_string(),
            Some(category) => category.to_string(),
        };
        expenses.push(Expense {
            date,
            description: cell(row, cols.description).to_string(),
            amount: lenient_amount(cell(row, cols.amount), &format!("row {line} amount")),
            category,
        });
    }

    info!("Loaded {} expenses from {}", expenses.len(), path.display());
    Ok(expenses)
}

/// Load savings goals from a CSV with name, target, current and target date columns.
pub fn load_goals(path: &Path) -> Result<Vec<Goal>> {
    let table = CsvTable::read(path)?;
    let cols = match &table.headers {
        Some(headers) => detect_goal_columns(headers).with_context(|| {
            format!(
                "{}: expected target, current and date columns",
                path.display()
            )
        })?,
        None => GoalColumns::default(),
    };

    let mut goals = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let line = table.line(i);
        let date_str = cell(row, cols.date);
        let target_date = parse_date(date_str, "%Y-%m-%d")
            .with_context(|| format!("Row {line}: failed to parse date '{date_str}'"))?;
        goals.push(Goal::new(
            cell(row, cols.name).to_string(),
            lenient_amount(cell(row, cols.target), &format!("row {line} target")),
            lenient_amount(cell(row, cols.current), &format!("row {line} current amount")),
            target_date,
        ));
    }

    info!("Loaded {} goals from {}", goals.len(), path.display());
    Ok(goals)
}

/// Load a monthly budget from JSON. Missing fields are 0; negative amounts collapse to 0.
pub fn load_budget_plan(path: &Path) -> Result<BudgetPlan> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read budget plan {}", path.display()))?;
    let mut plan: BudgetPlan = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse budget plan {}", path.display()))?;

    for (field, amount) in plan.amounts_mut() {
        if *amount < Decimal::ZERO {
            warn!("Negative {field} '{amount}' treated as 0");
            *amount = Decimal::ZERO;
        }
    }

    info!("Loaded budget plan from {}", path.display());
    Ok(plan)
}

/// Parse a user-entered amount. Invalid or negative input collapses to 0 with a warning.
pub fn lenient_amount(raw: &str, what: &str) -> Decimal {
    match parse_decimal(raw) {
        Ok(value) if value >= Decimal::ZERO => value,
        Ok(_) => {
            warn!("Negative {what} '{raw}' treated as 0");
            Decimal::ZERO
        }
        Err(_) => {
            warn!("Invalid {what} '{raw}' treated as 0");
            Decimal::ZERO
        }
    }
}

fn parse_date(s: &str, fmt: &str) -> Result<NaiveDate> {
    // Try the given format first
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
        return Ok(d);
    }
    // Fallback: try common formats
    // Two-digit years first, %Y would read "24" as the year 24
    for fallback in &["%m/%d/%y", "%m-%d-%y", "%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fallback) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ',', '%'], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
