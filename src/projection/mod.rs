//! Emergency fund projection: linear monthly savings toward a multiple of essential expenses.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Longest timeline produced, in months.
pub const TIMELINE_MONTHS: u32 = 12;

/// Progress markers, in percent of the target.
pub const MILESTONE_PERCENTS: [u32; 4] = [25, 50, 75, 100];

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub monthly_essentials: Decimal,
    pub target_months: u32,
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Never negative.
    pub amount_needed: Decimal,
    /// Zero both when nothing is needed and when the contribution is not positive;
    /// check [`ProjectionResult::is_funded`] to tell them apart.
    pub months_to_target: u32,
    /// Percent of the target already saved, capped at 100.
    pub progress_percentage: Decimal,
}

/// Project an emergency fund covering `target_months` of `monthly_essentials`.
pub fn project(
    monthly_essentials: Decimal,
    current_savings: Decimal,
    monthly_contribution: Decimal,
    target_months: u32,
) -> ProjectionResult {
    let target_amount = monthly_essentials
        .checked_mul(Decimal::from(target_months))
        .unwrap_or(Decimal::MAX);
    let amount_needed = (target_amount - current_savings).max(Decimal::ZERO);
    let months_to_target = months_at(amount_needed, monthly_contribution);

    let progress_percentage = if target_amount > Decimal::ZERO {
        current_savings
            .checked_div(target_amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ONE_HUNDRED, |pct| pct.min(Decimal::ONE_HUNDRED))
    } else {
        Decimal::ZERO
    };

    ProjectionResult {
        monthly_essentials,
        target_months,
        target_amount,
        current_savings,
        monthly_contribution,
        amount_needed,
        months_to_target,
        progress_percentage,
    }
}

/// Whole months needed to save `needed` at `per_month`; zero when `per_month` is not positive.
fn months_at(needed: Decimal, per_month: Decimal) -> u32 {
    if per_month <= Decimal::ZERO {
        return 0;
    }
    needed
        .checked_div(per_month)
        .map_or(u32::MAX, |months| months.ceil().to_u32().unwrap_or(u32::MAX))
}

impl ProjectionResult {
    pub fn is_funded(&self) -> bool {
        self.amount_needed.is_zero()
    }

    /// Money is still needed but no contribution is coming in.
    pub fn is_stalled(&self) -> bool {
        !self.is_funded() && self.monthly_contribution <= Decimal::ZERO
    }

    /// Month-by-month balance for up to a year, stopping at the target.
    pub fn timeline(&self) -> Timeline {
        let finished = self.monthly_contribution <= Decimal::ZERO
            || self.current_savings >= self.target_amount;
        Timeline {
            amount: self.current_savings,
            contribution: self.monthly_contribution,
            target: self.target_amount,
            month: 0,
            finished,
        }
    }

    /// The current contribution alongside 1.5x and 2x alternatives.
    pub fn savings_plans(&self) -> [SavingsPlan; 3] {
        PlanKind::all().map(|kind| {
            let monthly = self
                .monthly_contribution
                .checked_mul(kind.multiplier())
                .unwrap_or(Decimal::MAX);
            SavingsPlan {
                kind,
                monthly,
                months: months_at(self.amount_needed, monthly),
            }
        })
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        MILESTONE_PERCENTS
            .iter()
            .map(|&percent| {
                let amount = self.target_amount / Decimal::ONE_HUNDRED * Decimal::from(percent);
                let reached = self.current_savings >= amount;
                let months_away = if reached {
                    Some(0)
                } else if self.monthly_contribution > Decimal::ZERO {
                    Some(months_at(amount - self.current_savings, self.monthly_contribution))
                } else {
                    None
                };
                Milestone {
                    percent,
                    amount,
                    reached,
                    months_away,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Months from now, starting at 1.
    pub month: u32,
    pub amount: Decimal,
    pub is_target: bool,
}

/// Lazy savings timeline. Clone it to walk it again.
#[derive(Debug, Clone)]
pub struct Timeline {
    amount: Decimal,
    contribution: Decimal,
    target: Decimal,
    month: u32,
    finished: bool,
}

impl Iterator for Timeline {
    type Item = TimelineEntry;

    fn next(&mut self) -> Option<TimelineEntry> {
        if self.finished || self.month >= TIMELINE_MONTHS {
            return None;
        }
        self.month += 1;
        self.amount = self
            .amount
            .checked_add(self.contribution)
            .unwrap_or(self.target)
            .min(self.target);
        let is_target = self.amount >= self.target;
        self.finished = is_target;
        Some(TimelineEntry {
            month: self.month,
            amount: self.amount,
            is_target,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    Current,
    Accelerated,
    FastTrack,
}

impl PlanKind {
    pub fn all() -> [PlanKind; 3] {
        [Self::Current, Self::Accelerated, Self::FastTrack]
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Current => Decimal::ONE,
            Self::Accelerated => Decimal::new(15, 1),
            Self::FastTrack => Decimal::new(2, 0),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Current => "Current Plan",
            Self::Accelerated => "Accelerated Plan",
            Self::FastTrack => "Fast Track",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Current => "Continue with your current savings rate",
            Self::Accelerated => "Increase savings by 50% to reach goal faster",
            Self::FastTrack => "Double your savings rate for rapid progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsPlan {
    pub kind: PlanKind,
    pub monthly: Decimal,
    /// Zero when `monthly` is not positive.
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub percent: u32,
    pub amount: Decimal,
    pub reached: bool,
    /// Months until reached at the current contribution; `None` if it never will be.
    pub months_away: Option<u32>,
}
