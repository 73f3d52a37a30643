// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::compute_ledger;
use crate::models::{DateRange, Ledger};
use crate::store::Store;
use crate::utils::fmt_amount;

pub fn handle(store: &Store, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(store, sub, today),
        Some(("text", sub)) => export_text(store, sub, today),
        _ => Ok(()),
    }
}

pub fn default_csv_name(range: &DateRange) -> String {
    format!("perdiem_{}_{}.csv", range.start, range.end)
}

fn export_csv(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let input = store.load(today)?;
    let ledger = compute_ledger(&input, today);
    if !ledger.is_valid_range {
        println!("Nothing to export: the date range is invalid");
        return Ok(());
    }

    let out = sub
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| default_csv_name(&input.range));

    let mut wtr = csv::Writer::from_path(&out)?;
    wtr.write_record(["Date", "Day", "Allowance", "Spent", "Remaining"])?;
    for d in &ledger.days {
        wtr.write_record([
            d.date.to_string(),
            d.day_name.clone(),
            format!("{:.2}", d.allowance.round_dp(2)),
            format!("{:.2}", d.spent.round_dp(2)),
            format!("{:.2}", d.remaining.round_dp(2)),
        ])?;
    }
    wtr.flush()?;
    println!("Exported ledger to {}", out);
    Ok(())
}

/// One line per day, clipboard-ready. Spent and remaining segments are
/// omitted for zero-spend days.
pub fn render_text(ledger: &Ledger) -> String {
    ledger
        .days
        .iter()
        .map(|d| {
            if d.spent == Decimal::ZERO {
                format!(
                    "{}, {} → Allowance: {}",
                    d.day_name,
                    d.formatted_date,
                    fmt_amount(d.allowance)
                )
            } else {
                format!(
                    "{}, {} → Allowance: {}, Spent: {}, Remaining: {}",
                    d.day_name,
                    d.formatted_date,
                    fmt_amount(d.allowance),
                    fmt_amount(d.spent),
                    fmt_amount(d.remaining)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn export_text(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let input = store.load(today)?;
    let ledger = compute_ledger(&input, today);
    if !ledger.is_valid_range {
        println!("Nothing to export: the date range is invalid");
        return Ok(());
    }

    let text = render_text(&ledger);
    match sub.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, &text)?;
            println!("Exported ledger to {}", out);
        }
        None => println!("{}", text),
    }
    Ok(())
}
