use crate::utils::time::format_hm;
use chrono::{DateTime, TimeDelta, TimeZone};

/// "Remaining: HHh MMm" before the end time, "Overtime: HHh MMm" from it on.
/// Overtime mentions the extra break when there was one.
pub fn status_line<Tz: TimeZone>(now: &DateTime<Tz>, end: &DateTime<Tz>, extra: TimeDelta) -> String {
    if now < end {
        let remaining = end.clone() - now.clone();
        return format!("Remaining: {}", format_hm(remaining.num_seconds()));
    }

    let overtime = now.clone() - end.clone();
    let mut status = format!("Overtime: {}", format_hm(overtime.num_seconds()));
    if extra > TimeDelta::zero() {
        status.push_str(&format!(" (incl. {} min extra break)", extra.num_minutes()));
    }
    status
}

/// Elapsed seconds since start, never negative
pub fn elapsed_seconds<Tz: TimeZone>(start: &DateTime<Tz>, now: &DateTime<Tz>) -> i64 {
    (now.clone() - start.clone()).num_seconds().max(0)
}
