/// Column positions for a debts file. Headerless files use the positional default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DebtColumns {
    pub(crate) name: usize,
    pub(crate) balance: usize,
    pub(crate) rate: usize,
    pub(crate) minimum: usize,
}

impl Default for DebtColumns {
    fn default() -> Self {
        Self {
            name: 0,
            balance: 1,
            rate: 2,
            minimum: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpenseColumns {
    pub(crate) date: usize,
    pub(crate) description: usize,
    pub(crate) amount: usize,
    pub(crate) category: Option<usize>,
}

impl Default for ExpenseColumns {
    fn default() -> Self {
        Self {
            date: 0,
            description: 1,
            amount: 2,
            category: Some(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoalColumns {
    pub(crate) name: usize,
    pub(crate) target: usize,
    pub(crate) current: usize,
    pub(crate) date: usize,
}

impl Default for GoalColumns {
    fn default() -> Self {
        Self {
            name: 0,
            target: 1,
            current: 2,
            date: 3,
        }
    }
}

/// Map a debts header row to column positions.
/// Returns None when a balance, rate or minimum payment column cannot be found.
pub(crate) fn detect_debt_columns(headers: &[String]) -> Option<DebtColumns> {
    let h = normalize(headers);
    let balance = find_column(&h, &["balance", "owed", "principal"])?;
    let rate = find_column(&h, &["rate", "apr", "interest"])?;
    let minimum = find_column(&h, &["minimum", "min", "payment"])?;
    let name = find_column(&h, &["name", "debt", "creditor", "account"]).unwrap_or(0);
    Some(DebtColumns {
        name,
        balance,
        rate,
        minimum,
    })
}

pub(crate) fn detect_expense_columns(headers: &[String]) -> Option<ExpenseColumns> {
    let h = normalize(headers);
    let date = find_column(&h, &["date"])?;
    let amount = find_column(&h, &["amount", "cost", "spent"])?;
    let description = find_column(&h, &["description", "memo", "payee", "name"]).unwrap_or(1);
    let category = find_column(&h, &["category", "type"]);
    Some(ExpenseColumns {
        date,
        description,
        amount,
        category,
    })
}

pub(crate) fn detect_goal_columns(headers: &[String]) -> Option<GoalColumns> {
    let h = normalize(headers);
    let target = find_column(&h, &["target", "goal amount"])?;
    let current = find_column(&h, &["current", "saved", "progress"])?;
    let date = find_column(&h, &["date", "deadline", "due"])?;
    let name = find_column(&h, &["name", "goal"]).unwrap_or(0);
    Some(GoalColumns {
        name,
        target,
        current,
        date,
    })
}

fn normalize(headers: &[String]) -> Vec<String> {
    headers.iter().map(|s| s.trim().to_lowercase()).collect()
}

/// First header matching a candidate; an exact match on any candidate wins over a partial one.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| col_index(headers, name))
        .or_else(|| {
            candidates
                .iter()
                .find_map(|name| headers.iter().position(|h| h.contains(name)))
        })
}

fn col_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
