use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::error::Result;
use crate::{media, raw};

/// The currently loaded game as reported by the runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: u32,
    pub console: Console,
    pub title: String,
    /// Identification hash of the loaded media.
    pub hash: String,
    pub badge_name: String,
    pub badge_url: Option<String>,
}

impl GameInfo {
    /// Decode a native game record.
    ///
    /// An unrecognized console identifier resolves to [`Console::Unknown`]
    /// rather than failing; the runtime can know consoles this build doesn't.
    ///
    /// # Safety
    ///
    /// The pointer fields of `record` must be null or point to valid
    /// nul-terminated strings.
    pub unsafe fn from_raw(record: &raw::Game) -> Result<Self> {
        let console = match Console::from_raw(record.console_id as i32) {
            Some(console) => console,
            None => {
                tracing::debug!(console_id = record.console_id, "unrecognized console in game record");
                Console::Unknown
            }
        };
        let badge_name = unsafe { raw::string_from_ptr(record.badge_name) };
        let badge_url = media::game_badge_url(&badge_name);

        Ok(Self {
            id: record.id,
            console,
            title: unsafe { raw::string_from_ptr(record.title) },
            hash: unsafe { raw::string_from_ptr(record.hash) },
            badge_name,
            badge_url,
        })
    }
}

impl std::fmt::Display for GameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hash {}, console {}", self.title, self.hash, self.console.name())
    }
}
