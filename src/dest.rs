use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Default second-level directory pattern: zero-padded month-day.
pub const DEFAULT_PATTERN: &str = "%m-%d";

/// Build the destination directory for a timestamp:
/// `target_root/<YYYY>/<pattern-rendered segment>`.
///
/// Pure function; same inputs always yield the same path.
pub fn dest_dir(target_root: &Path, date: &NaiveDateTime, pattern: &str) -> PathBuf {
    let year = date.format("%Y").to_string();
    let segment = date.format(pattern).to_string();
    target_root.join(year).join(segment)
}
