// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::month_bounds;

/// A named amount set aside before the daily allowance is computed.
/// `amount` stays as the raw text the user typed; the engine parses it
/// leniently (bad text counts as zero).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl SavingsGoal {
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            name: "Savings".to_string(),
            amount: String::new(),
            category: "general".to_string(),
        }
    }
}

/// Inclusive calendar date range. Validity (`start <= end`) is judged by the
/// engine, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The full raw input state: everything the ledger is derived from, and the
/// only thing the store persists. Expense amounts are sparse free text keyed
/// by date; an absent or empty entry means "nothing logged for that day".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    pub total_amount: String,
    pub savings_goals: Vec<SavingsGoal>,
    pub range: DateRange,
    pub expenses: BTreeMap<NaiveDate, String>,
}

impl BudgetInput {
    /// Defaults used when the store is empty or unreadable: no amount, one
    /// zero placeholder goal, the current calendar month as the range.
    pub fn default_for(today: NaiveDate) -> Self {
        let (start, end) = month_bounds(today);
        Self {
            total_amount: String::new(),
            savings_goals: vec![SavingsGoal::placeholder(1)],
            range: DateRange { start, end },
            expenses: BTreeMap::new(),
        }
    }
}

/// One computed row of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub day_name: String,
    pub formatted_date: String,
    pub allowance: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// False when no expense was logged and `spent` defaulted to the full
    /// allowance.
    pub logged: bool,
}

/// The computed ledger: one entry per day in range plus aggregates.
/// Always well formed; an invalid range yields `is_valid_range == false`
/// with an empty day list and zeroed aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub available: Decimal,
    pub daily_allowance: Decimal,
    pub days_count: i64,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub spent_percentage: Decimal,
    pub spent_up_to_today: Decimal,
    pub is_valid_range: bool,
    pub days: Vec<DayEntry>,
}
