use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::raw;

/// An achievement subset of the loaded game (e.g. a bonus set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subset {
    pub id: u32,
    pub title: String,
    pub achievement_count: u32,
    pub leaderboard_count: u32,
    /// `None` when the subset has no badge of its own.
    pub badge_name: Option<String>,
    pub badge_url: Option<String>,
}

impl Subset {
    /// Decode a native subset record.
    ///
    /// # Safety
    ///
    /// The pointer fields of `record` must be null or point to valid
    /// nul-terminated strings.
    pub unsafe fn from_raw(record: &raw::Subset) -> Result<Self> {
        let badge_name = match raw::string_from_buf(&record.badge_name) {
            name if name.trim().is_empty() => None,
            name => Some(name),
        };
        let badge_url = match unsafe { raw::string_from_ptr(record.badge_url) } {
            url if url.is_empty() => None,
            url => Some(url),
        };

        Ok(Self {
            id: record.id,
            title: unsafe { raw::string_from_ptr(record.title) },
            achievement_count: record.num_achievements,
            leaderboard_count: record.num_leaderboards,
            badge_name,
            badge_url,
        })
    }
}
