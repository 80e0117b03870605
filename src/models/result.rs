use serde::Serialize;

/// Outcome of a single calculation. Serializes to the response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub end_time: String,
    pub day_type: String,
    pub worked: String,
    pub status: String,
    /// Gross wall-clock time since start, break included
    pub elapsed_seconds: i64,
    /// Work + standard break + any extra break
    pub required_seconds: i64,
    pub break_seconds: i64,
    pub timezone: String,
}

impl CalculationResult {
    pub fn is_overtime(&self) -> bool {
        self.status.starts_with("Overtime")
    }

    /// Elapsed share of the required time, 0..=100
    pub fn progress_percent(&self) -> u8 {
        if self.required_seconds <= 0 {
            return 0;
        }
        let ratio = (self.elapsed_seconds as f64 / self.required_seconds as f64).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u8
    }
}
