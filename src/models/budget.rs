use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly budget as entered on the planning form. Every field is a monthly amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPlan {
    // Income
    pub primary_income: Decimal,
    pub side_income: Decimal,
    pub investment_income: Decimal,
    pub other_income: Decimal,
    // Needs
    pub housing: Decimal,
    pub utilities: Decimal,
    pub groceries: Decimal,
    pub transportation: Decimal,
    pub insurance: Decimal,
    pub minimum_debt: Decimal,
    // Wants
    pub dining_out: Decimal,
    pub entertainment: Decimal,
    pub shopping: Decimal,
    pub subscriptions: Decimal,
    pub personal_care: Decimal,
    pub hobbies: Decimal,
    // Savings
    pub emergency_fund: Decimal,
    pub retirement: Decimal,
    pub investments: Decimal,
    pub extra_debt: Decimal,
}

impl BudgetPlan {
    pub fn total_income(&self) -> Decimal {
        self.primary_income + self.side_income + self.investment_income + self.other_income
    }

    pub fn needs(&self) -> Decimal {
        self.housing
            + self.utilities
            + self.groceries
            + self.transportation
            + self.insurance
            + self.minimum_debt
    }

    pub fn wants(&self) -> Decimal {
        self.dining_out
            + self.entertainment
            + self.shopping
            + self.subscriptions
            + self.personal_care
            + self.hobbies
    }

    pub fn savings(&self) -> Decimal {
        self.emergency_fund + self.retirement + self.investments + self.extra_debt
    }

    /// Every amount with its field name, for input cleanup.
    pub fn amounts_mut(&mut self) -> [(&'static str, &mut Decimal); 20] {
        [
            ("primary_income", &mut self.primary_income),
            ("side_income", &mut self.side_income),
            ("investment_income", &mut self.investment_income),
            ("other_income", &mut self.other_income),
            ("housing", &mut self.housing),
            ("utilities", &mut self.utilities),
            ("groceries", &mut self.groceries),
            ("transportation", &mut self.transportation),
            ("insurance", &mut self.insurance),
            ("minimum_debt", &mut self.minimum_debt),
            ("dining_out", &mut self.dining_out),
            ("entertainment", &mut self.entertainment),
            ("shopping", &mut self.shopping),
            ("subscriptions", &mut self.subscriptions),
            ("personal_care", &mut self.personal_care),
            ("hobbies", &mut self.hobbies),
            ("emergency_fund", &mut self.emergency_fund),
            ("retirement", &mut self.retirement),
            ("investments", &mut self.investments),
            ("extra_debt", &mut self.extra_debt),
        ]
    }
}
