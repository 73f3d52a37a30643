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
        Some(("clear", sub)) => clear(store, sub, today)?,
        Some(("list", sub)) => list(store, sub, today)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    // The amount stays free text; the engine coerces bad input to zero.
    let amount = sub.get_one::<String>("amount").unwrap().trim().to_string();

    if date < input.range.start || date > input.range.end {
        println!("Note: {} is outside the current range", date);
    }
    input.expenses.insert(date, amount.clone());
    store.save(&input)?;
    println!("Logged {} on {}", fmt_amount(parse_amount(&amount)), date);
    Ok(())
}

fn clear(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    if input.expenses.remove(&date).is_some() {
        store.save(&input)?;
        println!("Cleared entry for {}", date);
    } else {
        println!("No entry for {}", date);
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let input = store.load(today)?;

    if crate::utils::maybe_print_json(json_flag, &input.expenses)? {
        return Ok(());
    }

    let rows = input
        .expenses
        .iter()
        .map(|(date, raw)| {
            vec![
                date.to_string(),
                raw.clone(),
                fmt_amount(parse_amount(raw)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Date", "Entry", "Parsed"], rows));
    Ok(())
}
