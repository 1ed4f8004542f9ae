//! Platform helpers.
//!
//! Filesystem access and wall-clock time.

pub mod fs;

/// Get current Unix timestamp
pub fn get_unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
