use crate::config::Config;
use crate::core::calculator::breaks::BreakPlan;
use crate::models::day_type::DayType;
use chrono::{DateTime, TimeDelta, TimeZone};

/// Required = base work + standard break. Extra break is not part of it.
pub fn required_total(day: DayType, cfg: &Config) -> TimeDelta {
    day.base_work(cfg) + cfg.standard_break()
}

/// End = start + base work + break actually taken.
/// `None` when the end falls outside the representable range.
pub fn expected_end<Tz: TimeZone>(
    start: &DateTime<Tz>,
    day: DayType,
    plan: &BreakPlan,
    cfg: &Config,
) -> Option<DateTime<Tz>> {
    start
        .clone()
        .checked_add_signed(day.base_work(cfg))?
        .checked_add_signed(plan.used)
}
