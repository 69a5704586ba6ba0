//! Month-by-month payoff of several debts sharing one extra-payment pool.
//!
//! Every month each outstanding debt accrues interest and receives its minimum
//! payment, then the whole extra payment goes to the first outstanding debt in
//! the priority order chosen by the [`Strategy`]. The order is fixed once before
//! month one and never re-sorted.

use log::{debug, trace};
use rust_decimal::Decimal;

use crate::models::{Debt, Strategy};

/// Hard ceiling on simulated months. Runs that hit it are reported as not converged.
pub const MAX_MONTHS: u32 = 600;

/// A debt reaching a zero balance.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffEvent {
    pub name: String,
    pub original_balance: Decimal,
    /// 1-based month in which the balance reached zero.
    pub month: u32,
}

/// State of every debt at the end of one simulated month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRecord {
    pub month: u32,
    /// Interest accrued across all debts this month.
    pub interest: Decimal,
    /// End-of-month balance per debt, in priority order. Paid-off debts stay at zero.
    pub balances: Vec<Decimal>,
}

impl MonthRecord {
    pub fn remaining(&self) -> Decimal {
        self.balances.iter().copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayoffResult {
    pub total_months: u32,
    pub total_interest_paid: Decimal,
    /// Payoff events in the order they happened.
    pub payoff_schedule: Vec<PayoffEvent>,
    /// Original balances of the simulated debts plus all interest.
    pub total_paid: Decimal,
    /// Sum of minimum payments plus the extra payment.
    pub monthly_payment: Decimal,
    /// False when the month cap was hit (or the numbers overflowed) with debt outstanding.
    pub converged: bool,
    /// Debt names in the priority order used for the extra payment.
    pub order: Vec<String>,
    /// Months actually simulated. Shorter than `total_months` after an overflow.
    pub history: Vec<MonthRecord>,
}

impl Default for PayoffResult {
    /// The "nothing to pay off" result.
    fn default() -> Self {
        Self {
            total_months: 0,
            total_interest_paid: Decimal::ZERO,
            payoff_schedule: Vec::new(),
            total_paid: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            converged: true,
            order: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl PayoffResult {
    /// Month offset at which the last debt is gone.
    pub fn debt_free_month(&self) -> u32 {
        self.total_months
    }

    /// Month in which the named debt was paid off, if it was.
    pub fn payoff_month(&self, name: &str) -> Option<u32> {
        self.payoff_schedule
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.month)
    }
}

/// Working copy of one debt inside a simulation run.
struct Working<'a> {
    debt: &'a Debt,
    balance: Decimal,
    monthly_rate: Decimal,
    paid_off: bool,
}

impl<'a> Working<'a> {
    fn new(debt: &'a Debt) -> Self {
        Self {
            debt,
            balance: debt.balance,
            monthly_rate: debt.monthly_rate(),
            paid_off: false,
        }
    }

    fn event(&self, month: u32) -> PayoffEvent {
        PayoffEvent {
            name: self.debt.name.clone(),
            original_balance: self.debt.original_balance,
            month,
        }
    }
}

fn prioritize(working: &mut [Working<'_>], strategy: Strategy) {
    // Stable sorts: ties keep the caller's order.
    match strategy {
        Strategy::Avalanche => working.sort_by(|a, b| b.monthly_rate.cmp(&a.monthly_rate)),
        Strategy::Snowball => working.sort_by(|a, b| a.balance.cmp(&b.balance)),
        Strategy::Custom => {}
    }
}

/// Run one month. Returns the interest accrued, or `None` if the arithmetic overflowed.
fn step(
    working: &mut [Working<'_>],
    extra_payment: Decimal,
    month: u32,
    schedule: &mut Vec<PayoffEvent>,
) -> Option<Decimal> {
    let mut interest_this_month = Decimal::ZERO;

    for w in working.iter_mut().filter(|w| !w.paid_off) {
        let interest = w.balance.checked_mul(w.monthly_rate)?;
        interest_this_month = interest_this_month.checked_add(interest)?;

        // Minimum covers interest first. Below the interest this goes negative and the balance grows.
        let principal = w.debt.minimum_payment.checked_sub(interest)?.min(w.balance);
        w.balance = w.balance.checked_sub(principal)?;

        if w.balance <= Decimal::ZERO {
            w.paid_off = true;
            schedule.push(w.event(month));
        }
    }

    if extra_payment > Decimal::ZERO {
        if let Some(first) = working.iter_mut().find(|w| !w.paid_off) {
            first.balance -= extra_payment.min(first.balance);
            if first.balance <= Decimal::ZERO {
                first.paid_off = true;
                schedule.push(first.event(month));
            }
        }
    }

    Some(interest_this_month)
}

/// Simulate paying off `debts` with `extra_payment` on top of the minimums each month.
///
/// Debts without a positive balance are ignored. With nothing to pay off the
/// zero-valued [`PayoffResult::default`] is returned.
pub fn simulate(debts: &[Debt], extra_payment: Decimal, strategy: Strategy) -> PayoffResult {
    let mut working: Vec<Working<'_>> = debts
        .iter()
        .filter(|d| d.is_active())
        .map(Working::new)
        .collect();

    if working.is_empty() {
        return PayoffResult::default();
    }

    prioritize(&mut working, strategy);
    let order: Vec<String> = working.iter().map(|w| w.debt.name.clone()).collect();
    debug!("Simulating {} debts, {strategy} order: {order:?}", working.len());

    let original_total: Decimal = working.iter().map(|w| w.debt.original_balance).sum();
    let minimums: Decimal = working.iter().map(|w| w.debt.minimum_payment).sum();

    let mut month = 0;
    let mut total_interest = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(working.len());
    let mut history = Vec::new();
    let mut overflowed = false;

    while working.iter().any(|w| !w.paid_off) && month < MAX_MONTHS {
        month += 1;

        let Some((interest, total)) = step(&mut working, extra_payment, month, &mut schedule)
            .and_then(|i| Some((i, total_interest.checked_add(i)?)))
        else {
            debug!("Arithmetic overflow in month {month}, stopping");
            // Discard the partial month.
            month -= 1;
            schedule.retain(|e| e.month <= month);
            overflowed = true;
            break;
        };
        total_interest = total;

        trace!("Month {month}: interest {interest}");
        history.push(MonthRecord {
            month,
            interest,
            balances: working.iter().map(|w| w.balance.max(Decimal::ZERO)).collect(),
        });
    }

    let converged = !overflowed && working.iter().all(|w| w.paid_off);
    if !converged {
        debug!("Stopped after {month} months with debt outstanding");
    }
    // Overflow means the debt is never paid off.
    let total_months = if overflowed { MAX_MONTHS } else { month };

    PayoffResult {
        total_months,
        total_interest_paid: total_interest,
        payoff_schedule: schedule,
        total_paid: original_total + total_interest,
        monthly_payment: minimums + extra_payment,
        converged,
        order,
        history,
    }
}

/// Avalanche and snowball runs over the same snapshot of debts.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub avalanche: PayoffResult,
    pub snowball: PayoffResult,
}

impl Comparison {
    pub fn run(debts: &[Debt], extra_payment: Decimal) -> Self {
        Self {
            avalanche: simulate(debts, extra_payment, Strategy::Avalanche),
            snowball: simulate(debts, extra_payment, Strategy::Snowball),
        }
    }

    /// Absolute difference in total interest between the two strategies.
    pub fn interest_saved(&self) -> Decimal {
        (self.snowball.total_interest_paid - self.avalanche.total_interest_paid).abs()
    }

    /// Strategy with the lower total interest; avalanche on a tie.
    pub fn cheaper(&self) -> Strategy {
        if self.snowball.total_interest_paid < self.avalanche.total_interest_paid {
            Strategy::Snowball
        } else {
            Strategy::Avalanche
        }
    }

    pub fn get(&self, strategy: Strategy) -> Option<&PayoffResult> {
        match strategy {
            Strategy::Avalanche => Some(&self.avalanche),
            Strategy::Snowball => Some(&self.snowball),
            Strategy::Custom => None,
        }
    }
}

#[cfg(test)]
mod tests;
