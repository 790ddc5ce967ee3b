//! Consoles command implementation.
//!
//! Lists every console the runtime knows about, with its numeric identifier
//! and the number of memory regions published for it.

use anyhow::Result;
use rakit::Console;
use serde_json::json;
use strum::IntoEnumIterator;

/// Run the consoles command
pub fn run(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = Console::iter()
            .map(|console| {
                json!({
                    "id": console as i32,
                    "name": console.name(),
                    "regions": console.memory_regions().len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:>4}  {:<40} {}", "ID", "Name", "Regions");
    for console in Console::iter() {
        println!(
            "{:>4}  {:<40} {}",
            console as i32,
            console.name(),
            console.memory_regions().len()
        );
    }

    Ok(())
}
