//! Mirrors of the native client structs the runtime hands out.
//!
//! Field order and widths must match the `rc_client.h` definitions; record
//! types in this crate decode from these and never hold onto the pointers.

use std::ffi::{CStr, c_char};

/// Native achievement record (`rc_client_achievement_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: *const c_char,
    pub description: *const c_char,
    pub badge_name: [c_char; 8],
    pub measured_progress: [c_char; 24],
    pub measured_percent: f32,
    pub id: u32,
    pub points: u32,
    pub unlock_time: i64,
    pub state: u8,
    pub category: u8,
    pub bucket: u8,
    pub unlocked: u8,
}

/// Native loaded-game record (`rc_client_game_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Game {
    pub id: u32,
    pub console_id: u32,
    pub title: *const c_char,
    pub hash: *const c_char,
    pub badge_name: *const c_char,
}

/// Native leaderboard record (`rc_client_leaderboard_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Leaderboard {
    pub title: *const c_char,
    pub description: *const c_char,
    pub tracker_value: [c_char; 24],
    pub id: u32,
    pub state: u8,
    pub format: u8,
    pub lower_is_better: u8,
}

/// Native subset record (`rc_client_subset_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Subset {
    pub id: u32,
    pub title: *const c_char,
    pub badge_name: [c_char; 16],
    pub badge_url: *const c_char,
    pub num_achievements: u32,
    pub num_leaderboards: u32,
}

/// Native achievement list bucket (`rc_client_achievement_bucket_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AchievementBucket {
    pub achievements: *const *const Achievement,
    pub num_achievements: u32,
    pub label: *const c_char,
    pub subset_id: u32,
    pub bucket_type: u8,
}

/// Copy a nullable C string pointer into an owned `String`.
///
/// # Safety
///
/// `ptr` must be null or point to a valid nul-terminated string.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

/// Copy a fixed-size C string buffer into an owned `String`.
///
/// The buffer is nul-terminated in-band; anything after the first nul is
/// ignored, and a buffer with no nul is taken whole.
pub(crate) fn string_from_buf(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .map(|&c| c as u8)
        .take_while(|&b| b != 0)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
pub(crate) fn buf_from_str<const N: usize>(s: &str) -> [c_char; N] {
    let mut buf = [0 as c_char; N];
    for (slot, byte) in buf.iter_mut().zip(s.bytes()) {
        *slot = byte as c_char;
    }
    buf
}
