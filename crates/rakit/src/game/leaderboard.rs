use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};
use crate::raw;

/// Lifecycle stage of a leaderboard within a play session.
///
/// Values must match the runtime's defines.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum LeaderboardState {
    #[default]
    Inactive = 0,
    Active = 1,
    /// Attempt in progress, tracker value live.
    Tracking = 2,
    Disabled = 3,
}

impl LeaderboardState {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// A leaderboard as reported by the runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub title: String,
    pub description: String,
    /// Formatted value shown while an attempt is being tracked.
    pub tracker_value: String,
    pub id: u32,
    pub state: LeaderboardState,
    pub lower_is_better: bool,
}

impl Leaderboard {
    /// Decode a native leaderboard record.
    ///
    /// # Safety
    ///
    /// The pointer fields of `record` must be null or point to valid
    /// nul-terminated strings.
    pub unsafe fn from_raw(record: &raw::Leaderboard) -> Result<Self> {
        let state = LeaderboardState::from_u8(record.state)
            .ok_or(Error::InvalidLeaderboardState(record.state))?;

        Ok(Self {
            title: unsafe { raw::string_from_ptr(record.title) },
            description: unsafe { raw::string_from_ptr(record.description) },
            tracker_value: raw::string_from_buf(&record.tracker_value),
            id: record.id,
            state,
            lower_is_better: record.lower_is_better != 0,
        })
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}. {}", self.title, self.description, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_state_values_match_runtime() {
        assert_eq!(LeaderboardState::Inactive as u8, 0);
        assert_eq!(LeaderboardState::Active as u8, 1);
        assert_eq!(LeaderboardState::Tracking as u8, 2);
        assert_eq!(LeaderboardState::Disabled as u8, 3);
    }

    #[test]
    fn test_from_raw() {
        let title = CString::new("Speedrun").unwrap();
        let description = CString::new("Fastest any% clear").unwrap();
        let record = raw::Leaderboard {
            title: title.as_ptr(),
            description: description.as_ptr(),
            tracker_value: raw::buf_from_str("0:42.67"),
            id: 1818,
            state: LeaderboardState::Tracking as u8,
            format: 0,
            lower_is_better: 1,
        };

        let leaderboard = unsafe { Leaderboard::from_raw(&record) }.unwrap();
        assert_eq!(leaderboard.title, "Speedrun");
        assert_eq!(leaderboard.tracker_value, "0:42.67");
        assert_eq!(leaderboard.id, 1818);
        assert_eq!(leaderboard.state, LeaderboardState::Tracking);
        assert!(leaderboard.lower_is_better);
        assert_eq!(leaderboard.to_string(), "Speedrun, Fastest any% clear. Tracking");
    }

    #[test]
    fn test_from_raw_rejects_bad_state() {
        let record = raw::Leaderboard {
            title: std::ptr::null(),
            description: std::ptr::null(),
            tracker_value: [0; 24],
            id: 1,
            state: 7,
            format: 0,
            lower_is_better: 0,
        };
        let err = unsafe { Leaderboard::from_raw(&record) }.unwrap_err();
        assert!(matches!(err, Error::InvalidLeaderboardState(7)));
    }
}
