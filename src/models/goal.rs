use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub target_date: NaiveDate,
}

impl Goal {
    pub fn new(name: String, target: Decimal, current: Decimal, target_date: NaiveDate) -> Self {
        Self {
            name,
            target,
            current,
            target_date,
        }
    }

    /// Percent of the target saved so far. Not clamped: over-funded goals exceed 100.
    pub fn progress(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.current
            .checked_div(self.target)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }

    /// Days from `today` until the target date; zero or negative once the date has passed.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_left(today) <= 0
    }

    pub fn remaining(&self) -> Decimal {
        (self.target - self.current).max(Decimal::ZERO)
    }
}
