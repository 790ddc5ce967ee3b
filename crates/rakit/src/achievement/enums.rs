use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

/// Lifecycle stage of an achievement within a play session.
///
/// Transitions are owned by the runtime's evaluation engine; this layer only
/// reports the stage a record was in when it was produced. Values must match
/// the runtime's defines.
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
pub enum State {
    /// Unprocessed.
    #[default]
    Inactive = 0,
    /// Eligible to trigger.
    Active = 1,
    /// Earned by the user.
    Unlocked = 2,
    /// Not supported by this version of the runtime.
    Disabled = 3,
}

impl State {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Presentation grouping for an achievement list.
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
pub enum Bucket {
    #[default]
    Unknown = 0,
    Locked = 1,
    Unlocked = 2,
    Unsupported = 3,
    Unofficial = 4,
    #[strum(serialize = "Recently Unlocked")]
    RecentlyUnlocked = 5,
    #[strum(serialize = "Active Challenge")]
    ActiveChallenge = 6,
    #[strum(serialize = "Almost There")]
    AlmostThere = 7,
}

impl Bucket {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Display label for the bucket header.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// How the runtime groups achievements when building a bucketed list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, FromRepr,
)]
#[repr(i32)]
pub enum ListGrouping {
    #[default]
    LockState = 0,
    Progress = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_values_match_runtime() {
        assert_eq!(State::Inactive as u8, 0);
        assert_eq!(State::Active as u8, 1);
        assert_eq!(State::Unlocked as u8, 2);
        assert_eq!(State::Disabled as u8, 3);
    }

    #[test]
    fn test_state_from_u8() {
        assert_eq!(State::from_u8(2), Some(State::Unlocked));
        assert_eq!(State::from_u8(4), None);
    }

    #[test]
    fn test_bucket_values_match_runtime() {
        assert_eq!(Bucket::Unknown as u8, 0);
        assert_eq!(Bucket::Locked as u8, 1);
        assert_eq!(Bucket::Unlocked as u8, 2);
        assert_eq!(Bucket::Unsupported as u8, 3);
        assert_eq!(Bucket::Unofficial as u8, 4);
        assert_eq!(Bucket::RecentlyUnlocked as u8, 5);
        assert_eq!(Bucket::ActiveChallenge as u8, 6);
        assert_eq!(Bucket::AlmostThere as u8, 7);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(Bucket::AlmostThere.label(), "Almost There");
        assert_eq!(Bucket::RecentlyUnlocked.label(), "Recently Unlocked");
        assert_eq!(Bucket::Locked.label(), "Locked");
    }

    #[test]
    fn test_list_grouping_values() {
        assert_eq!(ListGrouping::LockState as i32, 0);
        assert_eq!(ListGrouping::Progress as i32, 1);
    }
}
