// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::engine::compute_ledger;
use crate::store::Store;
use crate::utils::{fmt_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = m.get_flag("json");
    let input = store.load(today)?;
    let ledger = compute_ledger(&input, today);

    if crate::utils::maybe_print_json(json_flag, &ledger)? {
        return Ok(());
    }

    if !ledger.is_valid_range {
        println!(
            "The end date ({}) is before the start date ({}).",
            input.range.end, input.range.start
        );
        println!("Fix the range with: perdiem budget set --start <date> --end <date>");
        return Ok(());
    }

    let rows = ledger
        .days
        .iter()
        .map(|d| {
            vec![
                d.formatted_date.clone(),
                d.day_name.clone(),
                fmt_amount(d.allowance),
                if d.logged {
                    fmt_amount(d.spent)
                } else {
                    format!("{} (assumed)", fmt_amount(d.spent))
                },
                fmt_amount(d.remaining),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Day", "Allowance", "Spent", "Remaining"], rows)
    );

    println!(
        "Available: {}  Daily allowance: {}  Days: {}",
        fmt_amount(ledger.available),
        fmt_amount(ledger.daily_allowance),
        ledger.days_count
    );
    println!(
        "Spent: {} ({}%)  Spent up to today: {}  Remaining: {}",
        fmt_amount(ledger.total_spent),
        ledger.spent_percentage.round_dp(1),
        fmt_amount(ledger.spent_up_to_today),
        fmt_amount(ledger.total_remaining)
    );
    Ok(())
}
