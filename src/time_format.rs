//! Relative age labels for notification rows

use chrono::{DateTime, Utc};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Format how long ago `created_at` was, relative to `now`
///
/// Uses the largest whole unit: `"3d ago"`, `"5h ago"`, `"2m ago"`, otherwise
/// `"Just now"`. Timestamps in the future (clock skew) clamp to zero elapsed
/// time and also read `"Just now"`.
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - created_at).num_milliseconds().max(0);

    let days = elapsed_ms / MS_PER_DAY;
    if days > 0 {
        return format!("{}d ago", days);
    }

    let hours = elapsed_ms / MS_PER_HOUR;
    if hours > 0 {
        return format!("{}h ago", hours);
    }

    let minutes = elapsed_ms / MS_PER_MINUTE;
    if minutes > 0 {
        return format!("{}m ago", minutes);
    }

    "Just now".to_string()
}

#[cfg(test)]
#[path = "time_format_tests.rs"]
mod time_format_tests;
