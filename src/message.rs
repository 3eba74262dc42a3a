use chrono::DateTime;
use chrono::Local;

/// Prefix of every commit message created by this tool.
pub const COMMIT_MESSAGE_PREFIX: &str = "Update data/script - ";

/// Local-time layout embedded after the prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the commit message for a run happening at `now`.
///
/// The timestamp is formatted from the instant passed in, so every run
/// stamps its own wall-clock time rather than a cached value.
pub fn commit_message(now: DateTime<Local>) -> String {
    format!("{}{}", COMMIT_MESSAGE_PREFIX, now.format(TIMESTAMP_FORMAT))
}
