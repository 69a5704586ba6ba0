#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn debt(name: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
    Debt::new(name.into(), balance, rate, minimum)
}

fn sample_debts() -> Vec<Debt> {
    vec![
        debt("Credit Card 1", dec!(8547), dec!(24.99), dec!(225)),
        debt("Student Loan", dec!(35492), dec!(6.5), dec!(387)),
    ]
}

fn original_total(debts: &[Debt]) -> Decimal {
    debts
        .iter()
        .filter(|d| d.is_active())
        .map(|d| d.original_balance)
        .sum()
}

// ── Nothing to pay off ────────────────────────────────────────

#[test]
fn test_no_debts() {
    let result = simulate(&[], dec!(100), Strategy::Avalanche);
    assert_eq!(result, PayoffResult::default());
    assert_eq!(result.total_months, 0);
    assert_eq!(result.total_interest_paid, Decimal::ZERO);
    assert!(result.payoff_schedule.is_empty());
    assert_eq!(result.total_paid, Decimal::ZERO);
    assert_eq!(result.monthly_payment, Decimal::ZERO);
}

#[test]
fn test_only_zero_balance_debts() {
    let debts = vec![
        debt("Paid", Decimal::ZERO, dec!(18), dec!(50)),
        debt("Overpaid", dec!(-20), dec!(18), dec!(50)),
    ];
    let result = simulate(&debts, dec!(100), Strategy::Avalanche);
    assert_eq!(result, PayoffResult::default());
}

#[test]
fn test_zero_balance_debts_are_ignored() {
    let debts = vec![
        debt("Paid", Decimal::ZERO, dec!(18), dec!(50)),
        debt("Loan", dec!(300), Decimal::ZERO, dec!(100)),
    ];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Custom);
    assert_eq!(result.order, vec!["Loan".to_string()]);
    // Minimum of the ignored debt is not part of the commitment
    assert_eq!(result.monthly_payment, dec!(100));
    assert_eq!(result.total_paid, dec!(300));
    assert_eq!(result.total_months, 3);
}

// ── Single debt arithmetic ────────────────────────────────────

#[test]
fn test_single_debt_no_interest() {
    let debts = vec![debt("Family", dec!(1000), Decimal::ZERO, dec!(100))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.total_months, 10);
    assert_eq!(result.total_interest_paid, Decimal::ZERO);
    assert_eq!(result.total_paid, dec!(1000));
    assert_eq!(result.monthly_payment, dec!(100));
    assert!(result.converged);
    assert_eq!(
        result.payoff_schedule,
        vec![PayoffEvent {
            name: "Family".into(),
            original_balance: dec!(1000),
            month: 10,
        }]
    );
}

#[test]
fn test_single_debt_with_extra_payment() {
    let debts = vec![debt("Family", dec!(1000), Decimal::ZERO, dec!(100))];
    let result = simulate(&debts, dec!(100), Strategy::Avalanche);
    assert_eq!(result.total_months, 5);
    assert_eq!(result.monthly_payment, dec!(200));
}

#[test]
fn test_interest_is_charged_before_principal() {
    // 12% a year is 1% a month: 10 interest on 1000
    let debts = vec![debt("Loan", dec!(1000), dec!(12), dec!(1010))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.total_months, 1);
    assert_eq!(result.total_interest_paid, dec!(10));
    assert_eq!(result.total_paid, dec!(1010));
}

#[test]
fn test_first_month_balance() {
    // 1% of 1000 is 10 interest, so 90 of the 100 minimum is principal
    let debts = vec![debt("Loan", dec!(1000), dec!(12), dec!(100))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.history[0].month, 1);
    assert_eq!(result.history[0].interest, dec!(10));
    assert_eq!(result.history[0].balances, vec![dec!(910)]);
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn test_avalanche_orders_by_rate_descending() {
    let debts = vec![
        debt("Low", dec!(500), dec!(3), dec!(25)),
        debt("High", dec!(5000), dec!(29.99), dec!(150)),
        debt("Mid", dec!(2000), dec!(12), dec!(60)),
    ];
    let result = simulate(&debts, dec!(100), Strategy::Avalanche);
    assert_eq!(result.order, vec!["High", "Mid", "Low"]);
}

#[test]
fn test_snowball_orders_by_balance_ascending() {
    let debts = vec![
        debt("Big", dec!(5000), dec!(29.99), dec!(150)),
        debt("Small", dec!(500), dec!(3), dec!(25)),
        debt("Medium", dec!(2000), dec!(12), dec!(60)),
    ];
    let result = simulate(&debts, dec!(100), Strategy::Snowball);
    assert_eq!(result.order, vec!["Small", "Medium", "Big"]);
}

#[test]
fn test_custom_keeps_caller_order() {
    let debts = vec![
        debt("Big", dec!(5000), dec!(29.99), dec!(150)),
        debt("Small", dec!(500), dec!(3), dec!(25)),
        debt("Medium", dec!(2000), dec!(12), dec!(60)),
    ];
    let result = simulate(&debts, dec!(100), Strategy::Custom);
    assert_eq!(result.order, vec!["Big", "Small", "Medium"]);
}

#[test]
fn test_ties_keep_caller_order() {
    let debts = vec![
        debt("First", dec!(1000), dec!(10), dec!(50)),
        debt("Second", dec!(1000), dec!(10), dec!(50)),
    ];
    assert_eq!(
        simulate(&debts, dec!(50), Strategy::Avalanche).order,
        vec!["First", "Second"]
    );
    assert_eq!(
        simulate(&debts, dec!(50), Strategy::Snowball).order,
        vec!["First", "Second"]
    );
}

#[test]
fn test_same_month_payoffs_follow_priority_order() {
    let debts = vec![
        debt("Zero", dec!(100), Decimal::ZERO, dec!(100)),
        debt("Card", dec!(100), dec!(24), dec!(200)),
    ];
    let avalanche = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    let names: Vec<&str> = avalanche.payoff_schedule.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Card", "Zero"]);
    assert!(avalanche.payoff_schedule.iter().all(|e| e.month == 1));

    let custom = simulate(&debts, Decimal::ZERO, Strategy::Custom);
    let names: Vec<&str> = custom.payoff_schedule.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Zero", "Card"]);
}

#[test]
fn test_extra_payoff_is_recorded_after_minimum_payoffs() {
    // "Priority" is first in line but only the extra payment finishes it,
    // while "Tiny" is cleared by its own minimum earlier in the same month.
    let debts = vec![
        debt("Priority", dec!(300), Decimal::ZERO, dec!(100)),
        debt("Tiny", dec!(50), Decimal::ZERO, dec!(50)),
    ];
    let result = simulate(&debts, dec!(200), Strategy::Custom);
    let names: Vec<&str> = result.payoff_schedule.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Tiny", "Priority"]);
    assert_eq!(result.total_months, 1);
}

#[test]
fn test_extra_moves_to_next_debt_after_payoff() {
    let debts = vec![
        debt("A", dec!(100), Decimal::ZERO, dec!(10)),
        debt("B", dec!(1000), Decimal::ZERO, dec!(10)),
    ];
    let result = simulate(&debts, dec!(90), Strategy::Custom);
    assert_eq!(result.payoff_month("A"), Some(1));
    // B: 990 after month one, then 100 a month, last 80 cleared in month 11
    assert_eq!(result.payoff_month("B"), Some(11));
    assert_eq!(result.total_months, 11);
}

#[test]
fn test_extra_never_overpays() {
    let debts = vec![debt("Small", dec!(30), Decimal::ZERO, dec!(10))];
    let result = simulate(&debts, dec!(500), Strategy::Avalanche);
    assert_eq!(result.total_months, 1);
    assert_eq!(result.history[0].balances, vec![Decimal::ZERO]);
    assert_eq!(result.total_paid, dec!(30));
}

// ── Termination ───────────────────────────────────────────────

#[test]
fn test_underwater_debt_hits_month_cap() {
    // 2% of 10,000 is 200 interest against a 100 minimum
    let debts = vec![debt("Underwater", dec!(10000), dec!(24), dec!(100))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.total_months, MAX_MONTHS);
    assert!(!result.converged);
    assert!(result.payoff_schedule.is_empty());
    assert_eq!(result.history.len(), MAX_MONTHS as usize);
}

#[test]
fn test_negative_amortization_grows_balance() {
    let debts = vec![debt("Underwater", dec!(10000), dec!(24), dec!(100))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.history[0].balances, vec![dec!(10100)]);
    assert!(result.history[1].balances[0] > result.history[0].balances[0]);
}

#[test]
fn test_extra_payment_can_rescue_underwater_debt() {
    let debts = vec![debt("Underwater", dec!(10000), dec!(24), dec!(100))];
    let result = simulate(&debts, dec!(400), Strategy::Avalanche);
    assert!(result.converged);
    assert!(result.total_months < MAX_MONTHS);
}

#[test]
fn test_overflow_stops_without_panicking() {
    let debts = vec![debt("Runaway", dec!(1000), dec!(10000), Decimal::ZERO)];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert!(!result.converged);
    assert_eq!(result.total_months, MAX_MONTHS);
    assert_eq!(result.total_paid, dec!(1000) + result.total_interest_paid);
}

#[test]
fn test_payday_loan_overflow_reports_cap() {
    // 400% APR, minimum well below the monthly interest
    let debts = vec![debt("Payday", dec!(500), dec!(400), dec!(50))];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert!(!result.converged);
    assert_eq!(result.total_months, MAX_MONTHS);
    assert_eq!(result.debt_free_month(), MAX_MONTHS);
    assert!(result.payoff_schedule.is_empty());
    assert!(result.history.len() < MAX_MONTHS as usize);
}

#[test]
fn test_total_months_never_exceeds_cap() {
    let cases = vec![
        sample_debts(),
        vec![debt("Stuck", dec!(50000), dec!(30), Decimal::ZERO)],
        vec![
            debt("A", dec!(1), dec!(99), dec!(1)),
            debt("B", dec!(100000), dec!(1), dec!(10)),
        ],
    ];
    for debts in &cases {
        for strategy in Strategy::all() {
            let result = simulate(debts, dec!(25), *strategy);
            assert!(result.total_months <= MAX_MONTHS);
            assert_eq!(result.history.len(), result.total_months as usize);
        }
    }
}

// ── Invariants ────────────────────────────────────────────────

#[test]
fn test_conservation_of_principal() {
    let mut debts = sample_debts();
    debts.push(debt("Car", dec!(12000.55), dec!(4.9), dec!(310)));
    debts.push(debt("Closed", Decimal::ZERO, dec!(19), dec!(40)));
    for strategy in Strategy::all() {
        let result = simulate(&debts, dec!(200), *strategy);
        assert_eq!(
            original_total(&debts) + result.total_interest_paid,
            result.total_paid,
            "conservation failed for {strategy}"
        );
    }
}

#[test]
fn test_conservation_uses_original_balance() {
    let mut card = debt("Card", dec!(900), Decimal::ZERO, dec!(100));
    card.original_balance = dec!(1200);
    let result = simulate(&[card], Decimal::ZERO, Strategy::Avalanche);
    assert_eq!(result.total_months, 9);
    assert_eq!(result.total_paid, dec!(1200));
    assert_eq!(result.payoff_schedule[0].original_balance, dec!(1200));
}

#[test]
fn test_balances_never_increase_when_minimum_covers_interest() {
    let mut debts = sample_debts();
    debts.push(debt("Car", dec!(12000), dec!(4.9), dec!(310)));
    for strategy in Strategy::all() {
        let result = simulate(&debts, dec!(150), *strategy);
        assert!(result.converged);
        for pair in result.history.windows(2) {
            for (before, after) in pair[0].balances.iter().zip(&pair[1].balances) {
                assert!(after <= before, "balance rose in month {}", pair[1].month);
            }
        }
    }
}

#[test]
fn test_converged_run_ends_at_zero() {
    let result = simulate(&sample_debts(), dec!(200), Strategy::Avalanche);
    assert!(result.converged);
    let last = result.history.last().unwrap();
    assert_eq!(last.remaining(), Decimal::ZERO);
    assert_eq!(result.debt_free_month(), last.month);
    assert_eq!(result.payoff_schedule.len(), 2);
    assert_eq!(result.payoff_schedule.last().unwrap().month, result.total_months);
}

#[test]
fn test_total_interest_is_sum_of_monthly_interest() {
    let result = simulate(&sample_debts(), dec!(200), Strategy::Snowball);
    let summed: Decimal = result.history.iter().map(|m| m.interest).sum();
    assert_eq!(summed, result.total_interest_paid);
}

#[test]
fn test_simulation_is_pure() {
    let debts = sample_debts();
    let first = simulate(&debts, dec!(200), Strategy::Avalanche);
    let second = simulate(&debts, dec!(200), Strategy::Avalanche);
    assert_eq!(first, second);
    // Input untouched
    assert_eq!(debts, sample_debts());
}

// ── End to end ────────────────────────────────────────────────

#[test]
fn test_sample_plan_pays_high_rate_card_first() {
    let result = simulate(&sample_debts(), dec!(200), Strategy::Avalanche);
    assert_eq!(result.monthly_payment, dec!(812));
    assert_eq!(result.order, vec!["Credit Card 1", "Student Loan"]);
    let card = result.payoff_month("Credit Card 1").unwrap();
    let loan = result.payoff_month("Student Loan").unwrap();
    assert!(card < loan);
    assert_eq!(result.payoff_schedule[0].name, "Credit Card 1");
    assert_eq!(
        result.total_paid,
        dec!(8547) + dec!(35492) + result.total_interest_paid
    );
}

#[test]
fn test_sample_plan_strategies_agree_when_orders_match() {
    // The high-rate card is also the smaller balance, so both strategies see the same order
    let comparison = Comparison::run(&sample_debts(), dec!(200));
    assert_eq!(comparison.avalanche.order, comparison.snowball.order);
    assert_eq!(
        comparison.avalanche.total_interest_paid,
        comparison.snowball.total_interest_paid
    );
    assert_eq!(comparison.interest_saved(), Decimal::ZERO);
    assert_eq!(comparison.cheaper(), Strategy::Avalanche);
}

#[test]
fn test_avalanche_beats_snowball_on_equal_balances() {
    // Entered low-rate first so the snowball tie-break targets the cheap debt
    let debts = vec![
        debt("B", dec!(1000), dec!(5), dec!(50)),
        debt("A", dec!(1000), dec!(20), dec!(50)),
    ];
    let avalanche = simulate(&debts, dec!(100), Strategy::Avalanche);
    let snowball = simulate(&debts, dec!(100), Strategy::Snowball);
    assert!(avalanche.converged && snowball.converged);
    assert_eq!(avalanche.payoff_schedule[0].name, "A");
    assert_eq!(snowball.payoff_schedule[0].name, "B");
    assert!(avalanche.total_interest_paid < snowball.total_interest_paid);
}

#[test]
fn test_avalanche_beats_snowball_when_rate_and_balance_disagree() {
    let debts = vec![
        debt("Card", dec!(35492), dec!(24.99), dec!(900)),
        debt("Loan", dec!(8547), dec!(6.5), dec!(225)),
    ];
    let comparison = Comparison::run(&debts, dec!(200));
    assert_eq!(comparison.avalanche.order, vec!["Card", "Loan"]);
    assert_eq!(comparison.snowball.order, vec!["Loan", "Card"]);
    assert!(
        comparison.avalanche.total_interest_paid < comparison.snowball.total_interest_paid
    );
    assert_eq!(comparison.cheaper(), Strategy::Avalanche);
    assert_eq!(
        comparison.interest_saved(),
        comparison.snowball.total_interest_paid - comparison.avalanche.total_interest_paid
    );
}

#[test]
fn test_comparison_get() {
    let comparison = Comparison::run(&sample_debts(), dec!(200));
    assert!(comparison.get(Strategy::Avalanche).is_some());
    assert!(comparison.get(Strategy::Snowball).is_some());
    assert!(comparison.get(Strategy::Custom).is_none());
}

#[test]
fn test_overflow_discards_partial_month() {
    let debts = vec![debt("Runaway", dec!(1000), dec!(10000), Decimal::ZERO)];
    let result = simulate(&debts, Decimal::ZERO, Strategy::Avalanche);
    assert!(result.history.len() < result.total_months as usize);
    assert!(result.history.iter().enumerate().all(|(i, m)| m.month == i as u32 + 1));
    let summed: Decimal = result.history.iter().map(|m| m.interest).sum();
    assert_eq!(summed, result.total_interest_paid);
}
