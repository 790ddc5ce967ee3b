mod info;
mod leaderboard;
mod subset;

pub use info::*;
pub use leaderboard::*;
pub use subset::*;
