use crate::config::Config;
use chrono::{TimeDelta, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayType {
    Regular, // Mon–Thu
    Friday,
}

impl DayType {
    /// Classify a weekday; weekends have no day type.
    pub fn from_weekday(day: Weekday) -> Option<Self> {
        match day.num_days_from_monday() {
            0..=3 => Some(DayType::Regular),
            4 => Some(DayType::Friday),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DayType::Regular => "Regular",
            DayType::Friday => "Friday",
        }
    }

    /// Work time for this day type, break excluded
    pub fn base_work(&self, cfg: &Config) -> TimeDelta {
        match self {
            DayType::Regular => cfg.regular_work(),
            DayType::Friday => cfg.friday_work(),
        }
    }

    /// e.g. "Regular (8.50h)"
    pub fn label(&self, required: TimeDelta) -> String {
        format!(
            "{} ({:.2}h)",
            self.name(),
            required.num_seconds() as f64 / 3600.0
        )
    }
}
