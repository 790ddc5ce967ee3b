//! # rakit
//!
//! Metadata and record layer for the RetroAchievements client runtime.
//!
//! This crate provides:
//! - Console identifiers, display names, and static memory maps
//! - Achievement, game, leaderboard, and subset record types decoded from
//!   the runtime's native structs
//! - The runtime's error-code table
//!
//! Every numeric value that mirrors a runtime define (console identifiers,
//! achievement states, error codes, ...) is a cross-boundary contract and is
//! covered by fidelity tests. Trigger evaluation, memory watching, and server
//! communication live in the runtime itself, not here.

pub mod achievement;
pub mod console;
pub mod error;
pub mod game;
pub mod media;
pub mod raw;

pub use achievement::{Achievement, Bucket, BucketGroup, Category, ListGrouping, State, UnlockMode};
pub use console::{Console, MemoryRegion, MemoryType};
pub use error::{Code, Error, Result};
pub use game::{GameInfo, Leaderboard, LeaderboardState, Subset};
