pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{localize, parse_date_time};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Current time in the configured timezone, or the `--at` override.
pub fn resolve_now(at: Option<&String>, cfg: &Config) -> AppResult<DateTime<Tz>> {
    match at {
        None => Ok(Utc::now().with_timezone(&cfg.timezone)),
        Some(s) => {
            let naive = parse_date_time(s).ok_or_else(|| AppError::InvalidDateTime(s.clone()))?;
            localize(&cfg.timezone, naive.date(), naive.time())
                .ok_or_else(|| AppError::InvalidDateTime(s.clone()))
        }
    }
}
