//! CLI command implementations.

pub mod consoles;
pub mod error;
pub mod regions;

use rakit::Console;
use strum::IntoEnumIterator;

/// Resolve a console argument given as a numeric id or a (case-insensitive)
/// display name.
pub fn resolve_console(arg: &str) -> Option<Console> {
    if let Ok(id) = arg.parse::<i32>() {
        return Console::from_raw(id);
    }
    Console::iter().find(|c| c.name().eq_ignore_ascii_case(arg))
}
