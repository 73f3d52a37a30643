// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use perdiem::engine::compute_ledger;
use perdiem::models::{BudgetInput, DateRange, SavingsGoal};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn input(total: &str, start: NaiveDate, end: NaiveDate) -> BudgetInput {
    BudgetInput {
        total_amount: total.to_string(),
        savings_goals: Vec::new(),
        range: DateRange { start, end },
        expenses: BTreeMap::new(),
    }
}

fn goal(id: i64, amount: &str) -> SavingsGoal {
    SavingsGoal {
        id,
        name: format!("Goal {}", id),
        amount: amount.to_string(),
        category: "general".to_string(),
    }
}

// Scenario A: 3100 over a 31-day month with nothing logged. Every day is
// assumed fully spent, so nothing remains at the end.
#[test]
fn full_month_no_expenses_consumes_everything() {
    let inp = input("3100", date(2025, 8, 1), date(2025, 8, 31));
    let ledger = compute_ledger(&inp, date(2025, 8, 15));

    assert_eq!(ledger.days_count, 31);
    assert_eq!(ledger.days.len(), 31);
    assert_eq!(ledger.daily_allowance, dec("100"));
    for d in &ledger.days {
        assert_eq!(d.spent, d.allowance);
        assert_eq!(d.remaining, Decimal::ZERO);
    }
    assert!(ledger.total_remaining.abs() < dec("0.0001"));
    assert_eq!(ledger.total_spent, dec("3100"));
}

// Scenario B: savings reduce the pot, a logged underspend carries forward,
// and the unlogged second day consumes allowance plus carryover.
#[test]
fn carryover_rolls_underspend_into_next_day() {
    let mut inp = input("1000", date(2025, 6, 1), date(2025, 6, 2));
    inp.savings_goals.push(goal(1, "200"));
    inp.expenses.insert(date(2025, 6, 1), "300".to_string());
    let ledger = compute_ledger(&inp, date(2025, 6, 1));

    assert_eq!(ledger.available, dec("800"));
    assert_eq!(ledger.daily_allowance, dec("400"));

    let day1 = &ledger.days[0];
    assert_eq!(day1.allowance, dec("400"));
    assert_eq!(day1.spent, dec("300"));
    assert_eq!(day1.remaining, dec("100"));

    let day2 = &ledger.days[1];
    assert_eq!(day2.allowance, dec("500"));
    assert_eq!(day2.spent, dec("500"));
    assert_eq!(day2.remaining, Decimal::ZERO);
}

// Scenario C: end before start yields the degenerate ledger, not an error.
#[test]
fn inverted_range_is_degenerate() {
    let inp = input("500", date(2025, 5, 10), date(2025, 5, 1));
    let ledger = compute_ledger(&inp, date(2025, 5, 5));

    assert!(!ledger.is_valid_range);
    assert_eq!(ledger.days_count, 0);
    assert!(ledger.days.is_empty());
    assert_eq!(ledger.daily_allowance, Decimal::ZERO);
    assert_eq!(ledger.total_spent, Decimal::ZERO);
    assert_eq!(ledger.spent_percentage, Decimal::ZERO);
    assert_eq!(ledger.available, dec("500"));
    assert_eq!(ledger.total_remaining, dec("500"));
}

// Scenario D: zero total never divides by zero.
#[test]
fn zero_total_amount_is_all_zeroes() {
    let inp = input("0", date(2025, 4, 1), date(2025, 4, 10));
    let ledger = compute_ledger(&inp, date(2025, 4, 1));

    assert_eq!(ledger.available, Decimal::ZERO);
    assert_eq!(ledger.daily_allowance, Decimal::ZERO);
    assert_eq!(ledger.spent_percentage, Decimal::ZERO);
}

#[test]
fn savings_cannot_drive_available_negative() {
    let mut inp = input("100", date(2025, 1, 1), date(2025, 1, 5));
    inp.savings_goals.push(goal(1, "400"));
    inp.savings_goals.push(goal(2, "not a number"));
    let ledger = compute_ledger(&inp, date(2025, 1, 1));

    assert_eq!(ledger.available, Decimal::ZERO);
    assert_eq!(ledger.daily_allowance, Decimal::ZERO);
}

#[test]
fn bad_goal_text_counts_as_zero_not_abort() {
    let mut inp = input("1000", date(2025, 1, 1), date(2025, 1, 2));
    inp.savings_goals.push(goal(1, "250"));
    inp.savings_goals.push(goal(2, "garbage"));
    inp.savings_goals.push(goal(3, ""));
    let ledger = compute_ledger(&inp, date(2025, 1, 1));

    assert_eq!(ledger.available, dec("750"));
}

#[test]
fn allowance_chain_matches_base_plus_previous_remaining() {
    let mut inp = input("100", date(2025, 2, 1), date(2025, 2, 7));
    inp.expenses.insert(date(2025, 2, 2), "5".to_string());
    inp.expenses.insert(date(2025, 2, 4), "40".to_string());
    let ledger = compute_ledger(&inp, date(2025, 2, 7));

    assert_eq!(ledger.days[0].allowance, ledger.daily_allowance);
    for i in 1..ledger.days.len() {
        assert_eq!(
            ledger.days[i].allowance,
            ledger.daily_allowance + ledger.days[i - 1].remaining
        );
    }
}

// Overspending propagates the deficit: the next day's allowance drops below
// the base share by exactly the overspend.
#[test]
fn overspend_shrinks_next_allowance() {
    let mut inp = input("200", date(2025, 3, 1), date(2025, 3, 2));
    inp.expenses.insert(date(2025, 3, 1), "150".to_string());
    let ledger = compute_ledger(&inp, date(2025, 3, 2));

    assert_eq!(ledger.daily_allowance, dec("100"));
    assert_eq!(ledger.days[0].remaining, dec("-50"));
    assert_eq!(ledger.days[1].allowance, dec("50"));
}

#[test]
fn unlogged_day_defaults_to_full_allowance() {
    let inp = input("70", date(2025, 7, 1), date(2025, 7, 7));
    let ledger = compute_ledger(&inp, date(2025, 7, 1));

    for d in &ledger.days {
        assert!(!d.logged);
        assert_eq!(d.spent, d.allowance);
    }
}

#[test]
fn whitespace_entry_is_treated_as_absent() {
    let mut inp = input("100", date(2025, 1, 1), date(2025, 1, 1));
    inp.expenses.insert(date(2025, 1, 1), "   ".to_string());
    let ledger = compute_ledger(&inp, date(2025, 1, 1));

    assert!(!ledger.days[0].logged);
    assert_eq!(ledger.days[0].spent, ledger.days[0].allowance);
}

#[test]
fn unparseable_expense_is_logged_as_zero() {
    let mut inp = input("100", date(2025, 1, 1), date(2025, 1, 2));
    inp.expenses.insert(date(2025, 1, 1), "lots".to_string());
    let ledger = compute_ledger(&inp, date(2025, 1, 2));

    let day1 = &ledger.days[0];
    assert!(day1.logged);
    assert_eq!(day1.spent, Decimal::ZERO);
    // The untouched allowance rolls forward in full.
    assert_eq!(ledger.days[1].allowance, dec("50") + dec("50"));
}

#[test]
fn spent_up_to_today_uses_calendar_comparison() {
    let mut inp = input("100", date(2025, 9, 1), date(2025, 9, 10));
    for d in 1..=10 {
        inp.expenses.insert(date(2025, 9, d), "10".to_string());
    }
    let ledger = compute_ledger(&inp, date(2025, 9, 4));

    assert_eq!(ledger.spent_up_to_today, dec("40"));
    assert_eq!(ledger.total_spent, dec("100"));
}

#[test]
fn today_before_range_counts_nothing() {
    let mut inp = input("100", date(2025, 9, 1), date(2025, 9, 5));
    inp.expenses.insert(date(2025, 9, 1), "10".to_string());
    let ledger = compute_ledger(&inp, date(2025, 8, 20));

    assert_eq!(ledger.spent_up_to_today, Decimal::ZERO);
}

#[test]
fn spent_percentage_is_clamped_to_one_hundred() {
    let mut inp = input("100", date(2025, 1, 1), date(2025, 1, 2));
    inp.expenses.insert(date(2025, 1, 1), "90".to_string());
    inp.expenses.insert(date(2025, 1, 2), "90".to_string());
    let ledger = compute_ledger(&inp, date(2025, 1, 2));

    assert_eq!(ledger.total_spent, dec("180"));
    assert_eq!(ledger.spent_percentage, dec("100"));
    assert_eq!(ledger.total_remaining, dec("-80"));
}

#[test]
fn single_day_range_counts_one_day() {
    let inp = input("50", date(2025, 3, 15), date(2025, 3, 15));
    let ledger = compute_ledger(&inp, date(2025, 3, 15));

    assert_eq!(ledger.days_count, 1);
    assert_eq!(ledger.daily_allowance, dec("50"));
}

#[test]
fn negative_amount_text_is_treated_as_zero() {
    let inp = input("-500", date(2025, 1, 1), date(2025, 1, 5));
    let ledger = compute_ledger(&inp, date(2025, 1, 1));

    assert_eq!(ledger.available, Decimal::ZERO);
}

#[test]
fn recompute_is_deterministic() {
    let mut inp = input("977.13", date(2025, 10, 1), date(2025, 10, 31));
    inp.savings_goals.push(goal(1, "123.45"));
    inp.expenses.insert(date(2025, 10, 3), "19.99".to_string());
    inp.expenses.insert(date(2025, 10, 17), "250".to_string());
    let today = date(2025, 10, 20);

    let first = compute_ledger(&inp, today);
    let second = compute_ledger(&inp, today);
    assert_eq!(first, second);
}

// Uneven division accumulates long decimal tails; the telescoped total must
// still come back to the available pot within epsilon.
#[test]
fn uneven_division_sums_within_epsilon() {
    let inp = input("100", date(2025, 11, 1), date(2025, 11, 30));
    let ledger = compute_ledger(&inp, date(2025, 11, 30));

    assert!((ledger.total_spent - dec("100")).abs() < dec("0.0001"));
    assert!(ledger.total_remaining.abs() < dec("0.0001"));
}

#[test]
fn day_names_and_display_dates() {
    let inp = input("70", date(2025, 8, 4), date(2025, 8, 10));
    let ledger = compute_ledger(&inp, date(2025, 8, 4));

    assert_eq!(ledger.days[0].day_name, "Monday");
    assert_eq!(ledger.days[6].day_name, "Sunday");
    assert_eq!(ledger.days[0].formatted_date, "4 Aug 2025");
}
