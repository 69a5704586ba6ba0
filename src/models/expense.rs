use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Household situation that decides how many months of expenses the fund should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    SingleStable,
    DualStable,
    VariableIncome,
    SelfEmployed,
}

impl Scenario {
    pub fn id(&self) -> &'static str {
        match self {
            Self::SingleStable => "single-stable",
            Self::DualStable => "dual-stable",
            Self::VariableIncome => "variable-income",
            Self::SelfEmployed => "self-employed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SingleStable => "Single Income, Stable Job",
            Self::DualStable => "Dual Income, Both Stable",
            Self::VariableIncome => "Variable/Commission Income",
            Self::SelfEmployed => "Self-Employed/Business Owner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SingleStable => "3-6 months of expenses recommended",
            Self::DualStable => "3 months of expenses recommended",
            Self::VariableIncome => "6-9 months of expenses recommended",
            Self::SelfEmployed => "9-12 months of expenses recommended",
        }
    }

    /// Months of essential expenses the fund should hold.
    pub fn target_months(&self) -> u32 {
        match self {
            Self::SingleStable => 6,
            Self::DualStable => 3,
            Self::VariableIncome => 6,
            Self::SelfEmployed => 9,
        }
    }

    pub fn all() -> &'static [Scenario] {
        &[
            Self::SingleStable,
            Self::DualStable,
            Self::VariableIncome,
            Self::SelfEmployed,
        ]
    }
}

impl std::str::FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|sc| sc.id() == lower)
            .copied()
            .ok_or_else(|| {
                let ids: Vec<&str> = Self::all().iter().map(|sc| sc.id()).collect();
                anyhow::anyhow!("Unknown scenario: {s} (expected one of {})", ids.join(", "))
            })
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Essential monthly spending that an emergency fund has to cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EssentialExpenses {
    pub housing: Decimal,
    pub utilities: Decimal,
    pub groceries: Decimal,
    pub transportation: Decimal,
    pub insurance: Decimal,
    pub debt_payments: Decimal,
    pub other_essential: Decimal,
}

impl EssentialExpenses {
    pub fn total(&self) -> Decimal {
        self.housing
            + self.utilities
            + self.groceries
            + self.transportation
            + self.insurance
            + self.debt_payments
            + self.other_essential
    }
}

/// A single tracked expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}
