use crate::config::Config;
use crate::core::calculator::{breaks, expected, surplus};
use crate::errors::{CalcError, CalcResult};
use crate::models::{day_type::DayType, request::CalculationRequest, result::CalculationResult};
use crate::utils::time::{format_hm, localize, parse_time};
use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use log::debug;

pub struct Core;

impl Core {
    /// Compute end time and status for a start time entered today.
    ///
    /// `now` is sampled once by the caller and fixes both the date the start
    /// time belongs to and the timezone. The function has no side effects.
    pub fn calculate(
        req: &CalculationRequest,
        now: DateTime<Tz>,
        cfg: &Config,
    ) -> CalcResult<CalculationResult> {
        //
        // 1. Parse start time and place it on today's date
        //
        let start_time = parse_time(&req.start_time).ok_or(CalcError::InvalidFormat)?;
        let tz = now.timezone();
        let start = localize(&tz, now.date_naive(), start_time).ok_or_else(|| {
            CalcError::Localization(format!("{} {}", now.date_naive(), start_time))
        })?;

        //
        // 2. Classify the day
        //
        let day = DayType::from_weekday(start.weekday()).ok_or(CalcError::WeekendNotSupported)?;

        if now < start {
            return Err(CalcError::FutureStartTime);
        }

        //
        // 3. Break and end time
        //
        let plan = breaks::resolve_break(req, cfg)?;
        let required = expected::required_total(day, cfg);
        let end = expected::expected_end(&start, day, &plan, cfg)
            .ok_or_else(|| CalcError::OutOfRange(start.to_string()))?;

        //
        // 4. Elapsed and status
        //
        let elapsed = surplus::elapsed_seconds(&start, &now);
        let status = surplus::status_line(&now, &end, plan.extra);

        debug!(
            "start={} day={:?} break={}s extra={}s end={} status='{}'",
            start,
            day,
            plan.used.num_seconds(),
            plan.extra.num_seconds(),
            end,
            status
        );

        Ok(CalculationResult {
            end_time: end.format("%H:%M").to_string(),
            day_type: day.label(required),
            worked: format_hm(elapsed),
            status,
            elapsed_seconds: elapsed,
            required_seconds: (required + plan.extra).num_seconds(),
            break_seconds: plan.used.num_seconds(),
            timezone: tz.name().to_string(),
        })
    }
}
