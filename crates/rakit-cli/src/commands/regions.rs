//! Regions command implementation.
//!
//! Prints the static memory map for one console.
//!
//! # Output Format
//!
//! ```text
//! 0x0000 - 0x07FF -> 0x0000  System RAM           System RAM
//! ```

use anyhow::{Result, bail};
use tracing::info;

use super::resolve_console;

/// Run the regions command
pub fn run(console_arg: &str, json: bool) -> Result<()> {
    let Some(console) = resolve_console(console_arg) else {
        bail!("unknown console: {console_arg}");
    };

    info!(id = console as i32, name = console.name(), "resolved console");

    let regions = console.memory_regions();

    if json {
        println!("{}", serde_json::to_string_pretty(regions)?);
        return Ok(());
    }

    println!(
        "{} ({} regions):",
        console.name(),
        regions.len()
    );
    println!();

    if regions.is_empty() {
        println!("No memory map published for this console.");
        return Ok(());
    }

    for region in regions {
        println!(
            "0x{:06X} - 0x{:06X} -> 0x{:08X}  {:<20} {}",
            region.start_address,
            region.end_address,
            region.real_address,
            region.memory_type.to_string(),
            region.description,
        );
    }

    Ok(())
}
