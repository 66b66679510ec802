//! File naming for daily thought logs.
//!
//! Log files are named `<YYYY-MM-DD>_<suffix>.log`. The suffix comes from
//! configuration, so it is sanitized to keep the file inside the log
//! directory and valid on common filesystems.

use chrono::NaiveDate;

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback suffix when sanitization produces an empty result.
const FALLBACK_SUFFIX: &str = "thought";

/// Date format used for the partition key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sanitizes a log file suffix.
///
/// 1. Whitespace → hyphens (collapsed)
/// 2. Invalid filesystem and control characters removed
/// 3. Leading/trailing dots, spaces, hyphens trimmed
/// 4. Empty results → "thought" fallback
///
/// Non-ASCII letters are kept, so persona names in any script survive.
pub fn sanitize_suffix(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last_was_hyphen = false;

    for c in input.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) || c.is_control() {
            continue;
        } else {
            result.push(c);
            last_was_hyphen = false;
        }
    }

    let trimmed = result.trim_matches(|c| c == '.' || c == ' ' || c == '-');
    if trimmed.is_empty() {
        FALLBACK_SUFFIX.to_string()
    } else {
        trimmed.to_string()
    }
}

/// File name for the given day's log.
pub fn partition_file_name(date: NaiveDate, suffix: &str) -> String {
    format!("{}_{}.log", date.format(DATE_FORMAT), sanitize_suffix(suffix))
}
