mod csv_import;
mod detect;

pub use csv_import::{lenient_amount, load_budget_plan, load_debts, load_expenses, load_goals};
