//! Time utilities: parsing HH:MM, localizing wall-clock times, formatting durations.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<h>[01]?\d|2[0-3]):(?P<m>[0-5]\d)$").expect("valid HH:MM regex")
});

/// Parse a 24-hour `HH:MM` string. The hour may have one digit, the
/// minutes always need two (`9:05` is accepted, `9:5` is not).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let caps = HH_MM.captures(t.trim())?;
    let h = caps["h"].parse().ok()?;
    let m = caps["m"].parse().ok()?;
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Parse `YYYY-MM-DD HH:MM`.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M").ok()
}

/// Attach `tz` to a wall-clock time. Ambiguous times take the earlier
/// instant; times skipped by a DST jump give `None`.
pub fn localize<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

/// Seconds → "HHh MMm". Leftover seconds are dropped, negatives clamp to zero.
pub fn format_hm(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    format!("{:02}h {:02}m", secs / 3600, (secs % 3600) / 60)
}
