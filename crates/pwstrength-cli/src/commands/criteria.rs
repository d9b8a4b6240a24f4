//! The `pwstrength criteria` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use pwstrength_core::Rule;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Criterion"]);

    for rule in Rule::ALL {
        table.add_row(vec![Cell::new(rule), Cell::new(rule.criterion())]);
    }

    println!("Strong Password Criteria:\n{table}");
    Ok(())
}
