use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievement::{Bucket, Category, State, UnlockMode};
use crate::error::{Error, Result};
use crate::{media, raw};

/// A single achievement as reported by the runtime.
///
/// Records are snapshots: all fields are fixed at construction, and the
/// runtime produces a fresh record whenever an achievement changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    /// Badge identifier on the media server.
    pub badge_name: String,
    /// Progress toward the measured target, e.g. "3/10".
    pub measured_progress: String,
    pub measured_percent: f32,
    pub id: u32,
    pub points: u32,
    /// `None` while the achievement is still locked.
    pub unlock_time: Option<DateTime<Utc>>,
    pub state: State,
    pub category: Category,
    pub bucket: Bucket,
    pub unlocked: UnlockMode,
    /// Badge image URL for the requested icon state.
    pub badge_url: Option<String>,
}

impl Achievement {
    /// Decode a native achievement record.
    ///
    /// `icon_state` selects which badge variant `badge_url` points at, which
    /// may differ from the record's own state (e.g. a lock-state list showing
    /// greyed-out icons for everything).
    ///
    /// # Safety
    ///
    /// The pointer fields of `record` must be null or point to valid
    /// nul-terminated strings.
    pub unsafe fn from_raw(record: &raw::Achievement, icon_state: State) -> Result<Self> {
        let state =
            State::from_u8(record.state).ok_or(Error::InvalidAchievementState(record.state))?;
        let bucket = Bucket::from_u8(record.bucket).ok_or(Error::InvalidBucket(record.bucket))?;

        let badge_name = raw::string_from_buf(&record.badge_name);
        let badge_url = media::achievement_badge_url(&badge_name, icon_state);

        Ok(Self {
            title: unsafe { raw::string_from_ptr(record.title) },
            description: unsafe { raw::string_from_ptr(record.description) },
            badge_name,
            measured_progress: raw::string_from_buf(&record.measured_progress),
            measured_percent: record.measured_percent,
            id: record.id,
            points: record.points,
            unlock_time: match record.unlock_time {
                0 => None,
                t => DateTime::from_timestamp(t, 0),
            },
            state,
            category: Category::from_raw(record.category),
            bucket,
            unlocked: UnlockMode::from_raw(record.unlocked),
            badge_url,
        })
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == State::Unlocked
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn sample_raw(title: &CString, description: &CString) -> raw::Achievement {
        raw::Achievement {
            title: title.as_ptr(),
            description: description.as_ptr(),
            badge_name: raw::buf_from_str("05515"),
            measured_progress: raw::buf_from_str("3/10"),
            measured_percent: 30.0,
            id: 4201,
            points: 25,
            unlock_time: 0,
            state: State::Active as u8,
            category: Category::CORE.bits(),
            bucket: Bucket::AlmostThere as u8,
            unlocked: UnlockMode::empty().bits(),
        }
    }

    #[test]
    fn test_from_raw_maps_all_fields() {
        let title = CString::new("Dragon Slayer").unwrap();
        let description = CString::new("Defeat the dragon without taking damage").unwrap();
        let record = sample_raw(&title, &description);

        let achievement = unsafe { Achievement::from_raw(&record, State::Active) }.unwrap();
        assert_eq!(achievement.title, "Dragon Slayer");
        assert_eq!(
            achievement.description,
            "Defeat the dragon without taking damage"
        );
        assert_eq!(achievement.badge_name, "05515");
        assert_eq!(achievement.measured_progress, "3/10");
        assert_eq!(achievement.measured_percent, 30.0);
        assert_eq!(achievement.id, 4201);
        assert_eq!(achievement.points, 25);
        assert_eq!(achievement.unlock_time, None);
        assert_eq!(achievement.state, State::Active);
        assert_eq!(achievement.category, Category::CORE);
        assert_eq!(achievement.bucket, Bucket::AlmostThere);
        assert_eq!(achievement.unlocked, UnlockMode::empty());
        assert!(!achievement.is_unlocked());
        assert_eq!(
            achievement.badge_url.as_deref(),
            Some("https://media.retroachievements.org/Badge/05515_lock.png")
        );
    }

    #[test]
    fn test_from_raw_unlocked() {
        let title = CString::new("Dragon Slayer").unwrap();
        let description = CString::new("").unwrap();
        let mut record = sample_raw(&title, &description);
        record.state = State::Unlocked as u8;
        record.unlock_time = 1_693_345_678;
        record.unlocked = UnlockMode::BOTH.bits();

        let achievement = unsafe { Achievement::from_raw(&record, State::Unlocked) }.unwrap();
        assert!(achievement.is_unlocked());
        assert_eq!(
            achievement.unlock_time,
            DateTime::from_timestamp(1_693_345_678, 0)
        );
        assert!(achievement.unlocked.is_hardcore());
        assert_eq!(
            achievement.badge_url.as_deref(),
            Some("https://media.retroachievements.org/Badge/05515.png")
        );
    }

    #[test]
    fn test_from_raw_rejects_bad_discriminants() {
        let title = CString::new("x").unwrap();
        let description = CString::new("y").unwrap();

        let mut record = sample_raw(&title, &description);
        record.state = 9;
        let err = unsafe { Achievement::from_raw(&record, State::Active) }.unwrap_err();
        assert!(matches!(err, Error::InvalidAchievementState(9)));

        let mut record = sample_raw(&title, &description);
        record.bucket = 200;
        let err = unsafe { Achievement::from_raw(&record, State::Active) }.unwrap_err();
        assert!(matches!(err, Error::InvalidBucket(200)));
    }

    #[test]
    fn test_from_raw_null_strings() {
        let record = raw::Achievement {
            title: std::ptr::null(),
            description: std::ptr::null(),
            badge_name: [0; 8],
            measured_progress: [0; 24],
            measured_percent: 0.0,
            id: 1,
            points: 0,
            unlock_time: 0,
            state: 0,
            category: 0,
            bucket: 0,
            unlocked: 0,
        };
        let achievement = unsafe { Achievement::from_raw(&record, State::Inactive) }.unwrap();
        assert!(achievement.title.is_empty());
        assert!(achievement.badge_url.is_none());
    }

    #[test]
    fn test_display() {
        let title = CString::new("Dragon Slayer").unwrap();
        let description = CString::new("Defeat the dragon").unwrap();
        let record = sample_raw(&title, &description);
        let achievement = unsafe { Achievement::from_raw(&record, State::Active) }.unwrap();
        assert_eq!(
            achievement.to_string(),
            "Dragon Slayer: Defeat the dragon"
        );
    }
}
