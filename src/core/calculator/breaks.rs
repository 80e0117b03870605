use crate::config::Config;
use crate::errors::{CalcError, CalcResult};
use crate::models::request::CalculationRequest;
use chrono::TimeDelta;

/// Break actually taken plus the part of it exceeding the standard break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPlan {
    pub used: TimeDelta,
    pub extra: TimeDelta,
}

/// Resolve the break for a request.
///
/// Without a custom break the standard one applies. A custom break is taken
/// as entered, also when shorter than the standard; only the excess over the
/// standard counts as extra.
pub fn resolve_break(req: &CalculationRequest, cfg: &Config) -> CalcResult<BreakPlan> {
    let standard = cfg.standard_break();

    if !req.custom_break {
        return Ok(BreakPlan {
            used: standard,
            extra: TimeDelta::zero(),
        });
    }

    if !(0..=23).contains(&req.break_hours) || !(0..60).contains(&req.break_minutes) {
        return Err(CalcError::InvalidBreak);
    }

    let used = TimeDelta::hours(req.break_hours) + TimeDelta::minutes(req.break_minutes);
    let extra = if used > standard {
        used - standard
    } else {
        TimeDelta::zero()
    };

    Ok(BreakPlan { used, extra })
}
