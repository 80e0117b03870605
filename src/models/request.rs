use serde::{Deserialize, Serialize};

/// One calculation input. Break values are signed so that negative
/// input reaches validation instead of being lost in a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub start_time: String,
    pub custom_break: bool,
    pub break_hours: i64,
    pub break_minutes: i64,
}

impl CalculationRequest {
    /// Request using the standard break
    pub fn standard(start_time: &str) -> Self {
        Self {
            start_time: start_time.to_string(),
            custom_break: false,
            break_hours: 0,
            break_minutes: 0,
        }
    }

    /// Request overriding the break length
    pub fn with_break(start_time: &str, hours: i64, minutes: i64) -> Self {
        Self {
            start_time: start_time.to_string(),
            custom_break: true,
            break_hours: hours,
            break_minutes: minutes,
        }
    }
}
