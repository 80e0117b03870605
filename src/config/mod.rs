use chrono::TimeDelta;
use chrono_tz::Tz;
use log::warn;
use serde::Serialize;

pub const ENV_STANDARD_BREAK_MINUTES: &str = "STANDARD_BREAK_MINUTES";
pub const ENV_WORK_HOURS_REGULAR: &str = "WORK_HOURS_REGULAR";
pub const ENV_WORK_MINUTES_REGULAR: &str = "WORK_MINUTES_REGULAR";
pub const ENV_WORK_HOURS_FRIDAY: &str = "WORK_HOURS_FRIDAY";
pub const ENV_WORK_MINUTES_FRIDAY: &str = "WORK_MINUTES_FRIDAY";
pub const ENV_TIMEZONE: &str = "TIMEZONE";

const DEFAULT_STANDARD_BREAK_MINUTES: u32 = 30;
const DEFAULT_WORK_REGULAR: (u32, u32) = (8, 0);
const DEFAULT_WORK_FRIDAY: (u32, u32) = (6, 30);
pub const DEFAULT_TIMEZONE: &str = "Europe/Vienna";

const MAX_WORK_HOURS: u32 = 24;
const MAX_WORK_MINUTES: u32 = 59;
const MAX_BREAK_MINUTES: u32 = 24 * 60;

/// Process-wide settings, built once at startup and then only read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub standard_break_minutes: u32,
    pub work_hours_regular: u32,
    pub work_minutes_regular: u32,
    pub work_hours_friday: u32,
    pub work_minutes_friday: u32,
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standard_break_minutes: DEFAULT_STANDARD_BREAK_MINUTES,
            work_hours_regular: DEFAULT_WORK_REGULAR.0,
            work_minutes_regular: DEFAULT_WORK_REGULAR.1,
            work_hours_friday: DEFAULT_WORK_FRIDAY.0,
            work_minutes_friday: DEFAULT_WORK_FRIDAY.1,
            timezone: chrono_tz::Europe::Vienna,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    /// for missing or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let standard_break_minutes = match lookup(ENV_STANDARD_BREAK_MINUTES) {
            None => DEFAULT_STANDARD_BREAK_MINUTES,
            Some(raw) => parse_bounded(&raw, MAX_BREAK_MINUTES).unwrap_or_else(|| {
                warn!(
                    "Invalid {ENV_STANDARD_BREAK_MINUTES}='{raw}', using {DEFAULT_STANDARD_BREAK_MINUTES}"
                );
                DEFAULT_STANDARD_BREAK_MINUTES
            }),
        };

        let (work_hours_regular, work_minutes_regular) = load_pair(
            &lookup,
            ENV_WORK_HOURS_REGULAR,
            ENV_WORK_MINUTES_REGULAR,
            DEFAULT_WORK_REGULAR,
        );
        let (work_hours_friday, work_minutes_friday) = load_pair(
            &lookup,
            ENV_WORK_HOURS_FRIDAY,
            ENV_WORK_MINUTES_FRIDAY,
            DEFAULT_WORK_FRIDAY,
        );

        let tz_name = lookup(ENV_TIMEZONE).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        Self {
            standard_break_minutes,
            work_hours_regular,
            work_minutes_regular,
            work_hours_friday,
            work_minutes_friday,
            timezone: resolve_timezone(&tz_name),
        }
    }

    pub fn standard_break(&self) -> TimeDelta {
        TimeDelta::minutes(self.standard_break_minutes as i64)
    }

    /// Monday–Thursday work time, break excluded
    pub fn regular_work(&self) -> TimeDelta {
        TimeDelta::hours(self.work_hours_regular as i64)
            + TimeDelta::minutes(self.work_minutes_regular as i64)
    }

    /// Friday work time, break excluded
    pub fn friday_work(&self) -> TimeDelta {
        TimeDelta::hours(self.work_hours_friday as i64)
            + TimeDelta::minutes(self.work_minutes_friday as i64)
    }
}

/// Resolve an IANA timezone name; unknown names fall back to UTC.
pub fn resolve_timezone(name: &str) -> Tz {
    match name.trim().parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!("Unknown timezone '{name}', falling back to UTC.");
            Tz::UTC
        }
    }
}

/// Non-negative integer no larger than `max`
fn parse_bounded(raw: &str, max: u32) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v <= max)
}

/// Hours and minutes of one day type are read together: if either is
/// invalid, both revert to their defaults.
fn load_pair<F>(lookup: &F, hours_key: &str, minutes_key: &str, default: (u32, u32)) -> (u32, u32)
where
    F: Fn(&str) -> Option<String>,
{
    let hours = lookup(hours_key);
    let minutes = lookup(minutes_key);

    let parsed_hours = hours
        .as_deref()
        .map_or(Some(default.0), |raw| parse_bounded(raw, MAX_WORK_HOURS));
    let parsed_minutes = minutes
        .as_deref()
        .map_or(Some(default.1), |raw| parse_bounded(raw, MAX_WORK_MINUTES));

    match (parsed_hours, parsed_minutes) {
        (Some(h), Some(m)) => (h, m),
        _ => {
            warn!(
                "Invalid {hours_key}/{minutes_key} ({:?}/{:?}), using {}h{:02}m",
                hours, minutes, default.0, default.1
            );
            default
        }
    }
}
