// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::store::Store;
use crate::utils::{fmt_amount, parse_amount, parse_date, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub, today)?,
        Some(("show", sub)) => show(store, sub, today)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;

    if let Some(amount) = sub.get_one::<String>("amount") {
        input.total_amount = amount.trim().to_string();
    }
    if let Some(start) = sub.get_one::<String>("start") {
        input.range.start = parse_date(start.trim())?;
    }
    if let Some(end) = sub.get_one::<String>("end") {
        input.range.end = parse_date(end.trim())?;
    }

    store.save(&input)?;
    println!(
        "Budget: {} over {} to {}",
        fmt_amount(parse_amount(&input.total_amount)),
        input.range.start,
        input.range.end
    );
    if input.range.end < input.range.start {
        println!("Warning: end date is before start date; fix the range to get a ledger");
    }
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let input = store.load(today)?;

    if crate::utils::maybe_print_json(json_flag, &input)? {
        return Ok(());
    }

    let mut rows = vec![
        vec![
            "Total amount".to_string(),
            fmt_amount(parse_amount(&input.total_amount)),
        ],
        vec!["Start".to_string(), input.range.start.to_string()],
        vec!["End".to_string(), input.range.end.to_string()],
        vec![
            "Savings goals".to_string(),
            input.savings_goals.len().to_string(),
        ],
        vec![
            "Logged expenses".to_string(),
            input
                .expenses
                .values()
                .filter(|v| !v.trim().is_empty())
                .count()
                .to_string(),
        ],
    ];
    let total_savings: rust_decimal::Decimal = input
        .savings_goals
        .iter()
        .map(|g| parse_amount(&g.amount))
        .sum();
    rows.push(vec!["Total savings".to_string(), fmt_amount(total_savings)]);

    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}
