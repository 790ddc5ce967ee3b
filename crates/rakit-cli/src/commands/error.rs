//! Error command implementation.
//!
//! Decodes a raw runtime error code to its name and message.

use anyhow::Result;
use rakit::Code;

/// Run the error command
pub fn run(code: i32) -> Result<()> {
    match Code::from_raw(code) {
        Some(decoded) => {
            println!("{code}: {decoded:?} - {}", decoded.message());
            if decoded.is_auth_failure() {
                println!("(session/authentication failure)");
            } else if decoded.is_api_failure() {
                println!("(server communication failure)");
            } else if decoded.is_parse_failure() {
                println!("(malformed trigger or leaderboard definition)");
            }
        }
        None => {
            println!("{code}: not a known runtime error code");
        }
    }

    Ok(())
}
