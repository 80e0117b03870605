#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use worktime::config::{
    Config, ENV_STANDARD_BREAK_MINUTES, ENV_TIMEZONE, ENV_WORK_HOURS_FRIDAY,
    ENV_WORK_HOURS_REGULAR, ENV_WORK_MINUTES_FRIDAY, ENV_WORK_MINUTES_REGULAR,
};

/// Binary with a clean configuration environment (defaults, Vienna time)
pub fn wt() -> Command {
    let mut cmd = cargo_bin_cmd!("worktime");
    for key in [
        ENV_STANDARD_BREAK_MINUTES,
        ENV_WORK_HOURS_REGULAR,
        ENV_WORK_MINUTES_REGULAR,
        ENV_WORK_HOURS_FRIDAY,
        ENV_WORK_MINUTES_FRIDAY,
    ] {
        cmd.env_remove(key);
    }
    cmd.env(ENV_TIMEZONE, "Europe/Vienna");
    cmd
}

pub fn vienna() -> Config {
    Config::default()
}

/// `YYYY-MM-DD HH:MM[:SS]` in the given zone
pub fn at(tz: Tz, s: &str) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .expect("valid test datetime");
    tz.from_local_datetime(&naive).single().expect("unambiguous test datetime")
}

// 2025-09-01 is a Monday
pub const MONDAY: &str = "2025-09-01";
pub const THURSDAY: &str = "2025-09-04";
pub const FRIDAY: &str = "2025-09-05";
pub const SATURDAY: &str = "2025-09-06";
pub const SUNDAY: &str = "2025-09-07";

pub fn vienna_at(day: &str, time: &str) -> DateTime<Tz> {
    at(chrono_tz::Europe::Vienna, &format!("{day} {time}"))
}
