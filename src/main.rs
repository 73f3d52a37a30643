// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use perdiem::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_or_init()?;
    // Sampled once per invocation; every handler sees the same "today".
    let today = chrono::Local::now().date_naive();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::db_path()?.display());
        }
        Some(("budget", sub)) => commands::budget::handle(&store, sub, today)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub, today)?,
        Some(("spend", sub)) => commands::expenses::handle(&store, sub, today)?,
        Some(("ledger", sub)) => commands::ledger::handle(&store, sub, today)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub, today)?,
        Some(("reset", _)) => {
            store.reset()?;
            println!("Inputs reset to defaults");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
