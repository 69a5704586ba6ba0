use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Order in which the extra payment pool is pointed at outstanding debts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first.
    #[default]
    Avalanche,
    /// Smallest balance first.
    Snowball,
    /// Keep the order the debts were entered in.
    Custom,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avalanche => "avalanche",
            Self::Snowball => "snowball",
            Self::Custom => "custom",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Avalanche => "Debt Avalanche (Highest Interest First)",
            Self::Snowball => "Debt Snowball (Smallest Balance First)",
            Self::Custom => "Custom Order",
        }
    }

    pub fn all() -> &'static [Strategy] {
        &[Self::Avalanche, Self::Snowball, Self::Custom]
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "avalanche" => Ok(Self::Avalanche),
            "snowball" => Ok(Self::Snowball),
            "custom" => Ok(Self::Custom),
            other => anyhow::bail!("Unknown strategy: {other} (expected avalanche, snowball or custom)"),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One outstanding debt as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub name: String,
    /// Current outstanding principal.
    pub balance: Decimal,
    /// Annual percentage rate, e.g. `24.99` for 24.99%.
    pub annual_rate: Decimal,
    pub minimum_payment: Decimal,
    /// Balance captured when the balance was entered. Reporting only.
    pub original_balance: Decimal,
}

impl Debt {
    pub fn new(name: String, balance: Decimal, annual_rate: Decimal, minimum_payment: Decimal) -> Self {
        Self {
            name,
            balance,
            annual_rate,
            minimum_payment,
            original_balance: balance,
        }
    }

    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR
    }

    /// Interest accrued on the current balance over one month.
    pub fn monthly_interest(&self) -> Decimal {
        self.balance * self.monthly_rate()
    }

    pub fn is_active(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// The minimum payment does not cover the first month's interest, so the balance grows.
    pub fn is_underwater(&self) -> bool {
        self.is_active() && self.minimum_payment < self.monthly_interest()
    }
}
