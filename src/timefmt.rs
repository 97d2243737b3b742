//! Relative-time labels ("5 minutes ago") for post timestamps.
//!
//! Buckets use a strict less-than on each upper bound, so exactly one hour
//! old reads "1 hours ago", never "60 minutes ago".  Anything a week or
//! older is shown as an absolute calendar date instead.

use chrono::{DateTime, Utc};

use crate::locale::Locale;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const WEEK: i64 = 604_800;

/// Format `epoch_secs` relative to the current wall clock, in English.
pub fn format_relative(epoch_secs: Option<i64>) -> String {
    format_relative_at(epoch_secs, Utc::now(), Locale::English)
}

/// Format `epoch_secs` relative to an explicit reference instant.
///
/// Timestamps in the future count as zero elapsed seconds.  A timestamp
/// outside chrono's representable range is treated like a missing one.
pub fn format_relative_at(epoch_secs: Option<i64>, now: DateTime<Utc>, locale: Locale) -> String {
    let Some(ts) = epoch_secs else {
        return locale.recently().to_string();
    };

    let elapsed = now.timestamp().saturating_sub(ts).max(0);

    if elapsed < HOUR {
        locale.minutes_ago(elapsed / MINUTE)
    } else if elapsed < DAY {
        locale.hours_ago(elapsed / HOUR)
    } else if elapsed < WEEK {
        locale.days_ago(elapsed / DAY)
    } else {
        match DateTime::<Utc>::from_timestamp(ts, 0) {
            Some(at) => at.format(locale.date_pattern()).to_string(),
            None => locale.recently().to_string(),
        }
    }
}
