//! Badge image URL construction.
//!
//! The native runtime resolves badge names to media server URLs; the same
//! scheme is reproduced here so records can carry a ready-to-fetch URL.

use crate::achievement::State;

const MEDIA_HOST: &str = "https://media.retroachievements.org";

/// Badge image URL for an achievement.
///
/// Locked and unsupported achievements get the greyed-out `_lock` variant.
/// Returns `None` when the badge name is empty.
pub fn achievement_badge_url(badge_name: &str, state: State) -> Option<String> {
    if badge_name.is_empty() {
        return None;
    }
    let url = match state {
        State::Unlocked => format!("{MEDIA_HOST}/Badge/{badge_name}.png"),
        _ => format!("{MEDIA_HOST}/Badge/{badge_name}_lock.png"),
    };
    Some(url)
}

/// Badge image URL for a game.
pub fn game_badge_url(badge_name: &str) -> Option<String> {
    if badge_name.is_empty() {
        return None;
    }
    Some(format!("{MEDIA_HOST}/Images/{badge_name}.png"))
}
