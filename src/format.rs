//! Display formatting helpers

use chrono::{DateTime, Utc};

/// Relative description of `at` as seen from `now`, e.g. "3 days ago"
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match () {
        _ if seconds < 45 => "a few seconds ago".to_string(),
        _ if minutes < 2 => "a minute ago".to_string(),
        _ if minutes < 45 => format!("{} minutes ago", minutes),
        _ if hours < 2 => "an hour ago".to_string(),
        _ if hours < 22 => format!("{} hours ago", hours),
        _ if days < 2 => "a day ago".to_string(),
        _ if days < 26 => format!("{} days ago", days),
        _ if days < 45 => "a month ago".to_string(),
        _ if days < 320 => format!("{} months ago", (days + 15) / 30),
        _ if days < 548 => "a year ago".to_string(),
        _ => format!("{} years ago", (days + 182) / 365),
    }
}

/// "1 comment" / "3 comments"
pub fn plural(count: i32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
