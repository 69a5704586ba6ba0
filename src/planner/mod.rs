//! 50/30/20 budget checks and expense statistics.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{BudgetPlan, Expense};

const NEEDS_LIMIT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const WANTS_LIMIT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const SAVINGS_FLOOR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Decimal,
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
    pub total_expenses: Decimal,
    /// Negative when spending exceeds income.
    pub remaining: Decimal,
    pub needs_pct: Decimal,
    pub wants_pct: Decimal,
    pub savings_pct: Decimal,
}

pub fn summarize(plan: &BudgetPlan) -> BudgetSummary {
    let total_income = plan.total_income();
    let needs = plan.needs();
    let wants = plan.wants();
    let savings = plan.savings();
    let total_expenses = needs + wants + savings;

    BudgetSummary {
        total_income,
        needs,
        wants,
        savings,
        total_expenses,
        remaining: total_income - total_expenses,
        needs_pct: share(needs, total_income),
        wants_pct: share(wants, total_income),
        savings_pct: share(savings, total_income),
    }
}

fn share(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

impl BudgetSummary {
    fn over_needs(&self) -> bool {
        self.needs_pct > NEEDS_LIMIT
    }

    fn over_wants(&self) -> bool {
        self.wants_pct > WANTS_LIMIT
    }

    fn under_saving(&self) -> bool {
        self.savings_pct < SAVINGS_FLOOR
    }

    fn overspending(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    /// 0-100 score, docked for each broken 50/30/20 rule and for overspending.
    pub fn health_score(&self) -> u8 {
        let mut score: i32 = 100;
        if self.over_needs() {
            score -= 20;
        }
        if self.over_wants() {
            score -= 15;
        }
        if self.under_saving() {
            score -= 25;
        }
        if self.overspending() {
            score -= 40;
        }
        score.clamp(0, 100) as u8
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        if self.over_needs() {
            recs.push(Recommendation::ReduceNeeds);
        }
        if self.over_wants() {
            recs.push(Recommendation::ReduceWants);
        }
        if self.under_saving() {
            recs.push(Recommendation::IncreaseSavings);
        }
        if self.overspending() {
            recs.push(Recommendation::Overspending);
        }
        if !self.under_saving() && !self.over_needs() && !self.over_wants() {
            recs.push(Recommendation::OnTrack);
        }
        recs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ReduceNeeds,
    ReduceWants,
    IncreaseSavings,
    Overspending,
    OnTrack,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ReduceNeeds => {
                "Your needs exceed 50% of income. Consider reducing housing or transportation costs."
            }
            Self::ReduceWants => {
                "Your wants exceed 30% of income. Try cutting back on dining out or entertainment."
            }
            Self::IncreaseSavings => {
                "Increase your savings rate to at least 20% for better financial security."
            }
            Self::Overspending => {
                "You're spending more than you earn. Review and cut unnecessary expenses immediately."
            }
            Self::OnTrack => "Excellent! You're following the 50/30/20 rule perfectly.",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStats {
    pub total: Decimal,
    pub count: usize,
    /// Mean amount per expense.
    pub average: Decimal,
    pub largest: Decimal,
}

impl ExpenseStats {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        if expenses.is_empty() {
            return Self::default();
        }
        let total: Decimal = expenses.iter().map(|e| e.amount).sum();
        let count = expenses.len();
        let largest = expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or(Decimal::ZERO);
        Self {
            total,
            count,
            average: total / Decimal::from(count),
            largest,
        }
    }
}

/// Total spent per category, sorted by category name.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(expense.category.to_lowercase())
            .or_insert(Decimal::ZERO) += expense.amount;
    }
    totals
}
