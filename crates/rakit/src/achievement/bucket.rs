use serde::{Deserialize, Serialize};

use crate::achievement::{Achievement, Bucket, State};
use crate::error::Result;
use crate::raw;

/// One group of a bucketed achievement list.
///
/// The runtime groups achievements for presentation ("Locked", "Almost
/// There", ...) and labels each group; records are decoded eagerly so the
/// group owns its data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketGroup {
    pub label: String,
    pub subset_id: u32,
    pub bucket: Bucket,
    pub achievements: Vec<Achievement>,
}

impl BucketGroup {
    /// Decode a native bucket entry and every achievement in it.
    ///
    /// Each achievement's badge URL follows its own state. Null entries in
    /// the native array are skipped.
    ///
    /// # Safety
    ///
    /// `bucket.achievements` must point to `bucket.num_achievements` valid
    /// achievement pointers, and all string pointers must be null or valid
    /// nul-terminated strings.
    pub unsafe fn from_raw(bucket: &raw::AchievementBucket) -> Result<Self> {
        let entries: &[*const raw::Achievement] = if bucket.achievements.is_null() {
            &[]
        } else {
            unsafe {
                std::slice::from_raw_parts(bucket.achievements, bucket.num_achievements as usize)
            }
        };

        let mut achievements = Vec::with_capacity(entries.len());
        for &entry in entries {
            if entry.is_null() {
                tracing::debug!("null achievement entry in bucket, skipping");
                continue;
            }
            let record = unsafe { &*entry };
            let icon_state = State::from_u8(record.state).unwrap_or(State::Disabled);
            achievements.push(unsafe { Achievement::from_raw(record, icon_state) }?);
        }

        Ok(Self {
            label: unsafe { raw::string_from_ptr(bucket.label) },
            subset_id: bucket.subset_id,
            bucket: Bucket::from_u8(bucket.bucket_type).unwrap_or(Bucket::Unknown),
            achievements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{Category, UnlockMode};
    use std::ffi::CString;

    #[test]
    fn test_from_raw_decodes_entries() {
        let title = CString::new("First Steps").unwrap();
        let description = CString::new("Clear stage 1").unwrap();
        let record = raw::Achievement {
            title: title.as_ptr(),
            description: description.as_ptr(),
            badge_name: raw::buf_from_str("00001"),
            measured_progress: [0; 24],
            measured_percent: 0.0,
            id: 1,
            points: 5,
            unlock_time: 0,
            state: State::Active as u8,
            category: Category::CORE.bits(),
            bucket: Bucket::Locked as u8,
            unlocked: UnlockMode::empty().bits(),
        };
        let entries = [&record as *const raw::Achievement, std::ptr::null()];
        let label = CString::new("Locked").unwrap();
        let native = raw::AchievementBucket {
            achievements: entries.as_ptr(),
            num_achievements: entries.len() as u32,
            label: label.as_ptr(),
            subset_id: 77,
            bucket_type: Bucket::Locked as u8,
        };

        let group = unsafe { BucketGroup::from_raw(&native) }.unwrap();
        assert_eq!(group.label, "Locked");
        assert_eq!(group.subset_id, 77);
        assert_eq!(group.bucket, Bucket::Locked);
        // Null entry is skipped.
        assert_eq!(group.achievements.len(), 1);
        assert_eq!(group.achievements[0].title, "First Steps");
    }

    #[test]
    fn test_from_raw_empty_bucket() {
        let label = CString::new("Recently Unlocked").unwrap();
        let native = raw::AchievementBucket {
            achievements: std::ptr::null(),
            num_achievements: 0,
            label: label.as_ptr(),
            subset_id: 0,
            bucket_type: Bucket::RecentlyUnlocked as u8,
        };
        let group = unsafe { BucketGroup::from_raw(&native) }.unwrap();
        assert!(group.achievements.is_empty());
        assert_eq!(group.bucket, Bucket::RecentlyUnlocked);
    }

    #[test]
    fn test_from_raw_unknown_bucket_type() {
        let label = CString::new("???").unwrap();
        let native = raw::AchievementBucket {
            achievements: std::ptr::null(),
            num_achievements: 0,
            label: label.as_ptr(),
            subset_id: 0,
            bucket_type: 42,
        };
        let group = unsafe { BucketGroup::from_raw(&native) }.unwrap();
        assert_eq!(group.bucket, Bucket::Unknown);
    }
}
