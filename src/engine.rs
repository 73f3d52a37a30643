// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{BudgetInput, DayEntry, Ledger};
use crate::utils::parse_amount;

/// Compute the full day-by-day ledger from the raw input state.
///
/// Pure and infallible: amount text that fails to parse counts as zero, and
/// an invalid range (end before start) yields a degenerate ledger with
/// `is_valid_range == false` rather than an error. `today` is supplied by the
/// caller so the "spent up to today" aggregate is deterministic under test.
///
/// Carryover invariant: day 0's allowance is the base daily share; every
/// later day's allowance is the base share plus the previous day's remaining,
/// which may be negative when a day overspent. A day with no logged expense
/// is assumed fully spent, so its remaining is zero and nothing rolls
/// forward from it.
pub fn compute_ledger(input: &BudgetInput, today: NaiveDate) -> Ledger {
    let total_amount = parse_amount(&input.total_amount);
    let total_savings: Decimal = input
        .savings_goals
        .iter()
        .map(|g| parse_amount(&g.amount))
        .sum();
    // Savings can never drive availability negative.
    let available = (total_amount - total_savings).max(Decimal::ZERO);

    if input.range.end < input.range.start {
        return Ledger {
            available,
            daily_allowance: Decimal::ZERO,
            days_count: 0,
            total_spent: Decimal::ZERO,
            total_remaining: available,
            spent_percentage: Decimal::ZERO,
            spent_up_to_today: Decimal::ZERO,
            is_valid_range: false,
            days: Vec::new(),
        };
    }

    let days_count = (input.range.end - input.range.start).num_days() + 1;
    let base_daily = available / Decimal::from(days_count);

    let mut days = Vec::with_capacity(days_count as usize);
    let mut carryover = Decimal::ZERO;
    let mut total_spent = Decimal::ZERO;
    let mut spent_up_to_today = Decimal::ZERO;

    for date in input.range.start.iter_days().take(days_count as usize) {
        let allowance = base_daily + carryover;
        let entry = input.expenses.get(&date).map(|s| s.trim());
        let (spent, logged) = match entry {
            Some(text) if !text.is_empty() => (parse_amount(text), true),
            // No entry for this day: treat the whole allowance as consumed
            // so forgotten days never inflate the rest of the range.
            _ => (allowance, false),
        };
        let remaining = allowance - spent;
        carryover = remaining;

        total_spent += spent;
        if date <= today {
            spent_up_to_today += spent;
        }

        days.push(DayEntry {
            date,
            day_name: date.format("%A").to_string(),
            formatted_date: format_display_date(date),
            allowance,
            spent,
            remaining,
            logged,
        });
    }

    let spent_percentage = if available > Decimal::ZERO {
        (total_spent / available * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    Ledger {
        available,
        daily_allowance: base_daily,
        days_count,
        total_spent,
        total_remaining: available - total_spent,
        spent_percentage,
        spent_up_to_today,
        is_valid_range: true,
        days,
    }
}

/// Display form used in ledger rows and text export, e.g. "5 Aug 2025".
fn format_display_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), date.format("%b"), date.year())
}
