// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use crate::models::SavingsGoal;
use crate::store::Store;
use crate::utils::{fmt_amount, parse_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub, today)?,
        Some(("set", sub)) => set(store, sub, today)?,
        Some(("remove", sub)) => remove(store, sub, today)?,
        Some(("list", sub)) => list(store, sub, today)?,
        _ => {}
    }
    Ok(())
}

fn parse_id(sub: &clap::ArgMatches) -> Result<i64> {
    let raw = sub.get_one::<String>("id").unwrap();
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid goal id '{}'", raw))
}

fn add(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;
    let id = input
        .savings_goals
        .iter()
        .map(|g| g.id)
        .max()
        .unwrap_or(0)
        + 1;
    let goal = SavingsGoal {
        id,
        name: sub.get_one::<String>("name").unwrap().trim().to_string(),
        amount: sub.get_one::<String>("amount").unwrap().trim().to_string(),
        category: sub
            .get_one::<String>("category")
            .unwrap()
            .trim()
            .to_string(),
    };
    println!(
        "Added goal #{} '{}' at {}",
        goal.id,
        goal.name,
        fmt_amount(parse_amount(&goal.amount))
    );
    input.savings_goals.push(goal);
    store.save(&input)?;
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;
    let id = parse_id(sub)?;
    let goal = input
        .savings_goals
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("Goal #{} not found", id))?;
    if let Some(name) = sub.get_one::<String>("name") {
        goal.name = name.trim().to_string();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        goal.amount = amount.trim().to_string();
    }
    if let Some(category) = sub.get_one::<String>("category") {
        goal.category = category.trim().to_string();
    }
    println!(
        "Goal #{} '{}' = {}",
        goal.id,
        goal.name,
        fmt_amount(parse_amount(&goal.amount))
    );
    store.save(&input)?;
    Ok(())
}

fn remove(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let mut input = store.load(today)?;
    let id = parse_id(sub)?;
    let before = input.savings_goals.len();
    input.savings_goals.retain(|g| g.id != id);
    if input.savings_goals.len() == before {
        return Err(anyhow!("Goal #{} not found", id));
    }
    // At least one goal must exist at all times; removing the last one
    // leaves a zero placeholder behind.
    if input.savings_goals.is_empty() {
        input.savings_goals.push(SavingsGoal::placeholder(1));
    }
    store.save(&input)?;
    println!("Removed goal #{}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let input = store.load(today)?;

    if crate::utils::maybe_print_json(json_flag, &input.savings_goals)? {
        return Ok(());
    }

    let rows = input
        .savings_goals
        .iter()
        .map(|g| {
            vec![
                g.id.to_string(),
                g.name.clone(),
                g.category.clone(),
                fmt_amount(parse_amount(&g.amount)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Category", "Amount"], rows));
    Ok(())
}
