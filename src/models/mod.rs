mod budget;
mod debt;
mod expense;
mod goal;

pub use budget::BudgetPlan;
pub use debt::{Debt, Strategy};
pub use expense::{EssentialExpenses, Expense, Scenario};
pub use goal::Goal;
