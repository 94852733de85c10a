//! `imgurl actions` – list the action table.

use anyhow::Result;
use imgurl_core::TransformTable;

pub fn run_actions(table: &TransformTable, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(table.entries())?);
        return Ok(());
    }
    if table.is_empty() {
        println!("No actions configured.");
        return Ok(());
    }
    let width = table.actions().map(str::len).max().unwrap_or(0).max(6);
    println!("{:<width$} {}", "ACTION", "TRANSFORMATION");
    for entry in table.entries() {
        let t = if entry.transformation.is_empty() {
            "-"
        } else {
            entry.transformation.as_str()
        };
        println!("{:<width$} {}", entry.action, t);
    }
    Ok(())
}
