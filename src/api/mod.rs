//! JSON request handling around the calculator.
//!
//! Takes the raw payload a front-end posts and turns it into a status code
//! and a JSON body. Transport is left to the caller.

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::CalcError;
use crate::models::request::CalculationRequest;
use chrono::DateTime;
use chrono_tz::Tz;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

const MSG_INVALID_REQUEST: &str = "Invalid request format.";
const MSG_UNEXPECTED: &str = "An unexpected calculation error occurred.";

/// Numbers may arrive as JSON numbers, form strings or `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for NumberField {
    fn default() -> Self {
        NumberField::Text("0".to_string())
    }
}

impl NumberField {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberField::Null => None,
            NumberField::Int(v) => Some(*v),
            NumberField::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            NumberField::Float(_) => None,
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatePayload {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub long_break: bool,
    #[serde(default)]
    pub break_hours: NumberField,
    #[serde(default)]
    pub break_minutes: NumberField,
}

impl CalculatePayload {
    /// Break fields are only looked at when a long break was requested.
    pub fn into_request(self) -> Result<CalculationRequest, CalcError> {
        let start = self.start_time.trim();
        if !self.long_break {
            return Ok(CalculationRequest::standard(start));
        }

        let hours = self.break_hours.as_i64().ok_or(CalcError::InvalidBreak)?;
        let minutes = self.break_minutes.as_i64().ok_or(CalcError::InvalidBreak)?;
        Ok(CalculationRequest::with_break(start, hours, minutes))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Message of an error body, if any
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

/// Handle a raw JSON calculation request.
pub fn handle(body: &str, now: DateTime<Tz>, cfg: &Config) -> ApiResponse {
    let payload = match serde_json::from_str::<Value>(body) {
        Ok(v @ Value::Object(_)) => v,
        _ => return ApiResponse::error(STATUS_BAD_REQUEST, MSG_INVALID_REQUEST),
    };

    match serde_json::from_value::<CalculatePayload>(payload) {
        Ok(p) => handle_payload(p, now, cfg),
        Err(e) => {
            warn!("Malformed calculation payload: {e}");
            ApiResponse::error(STATUS_BAD_REQUEST, MSG_INVALID_REQUEST)
        }
    }
}

/// Handle an already decoded payload.
pub fn handle_payload(payload: CalculatePayload, now: DateTime<Tz>, cfg: &Config) -> ApiResponse {
    let outcome = payload
        .into_request()
        .and_then(|req| Core::calculate(&req, now, cfg));

    match outcome {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(body) => ApiResponse {
                status: STATUS_OK,
                body,
            },
            Err(e) => {
                error!("Cannot serialize calculation result: {e}");
                ApiResponse::error(STATUS_SERVER_ERROR, MSG_UNEXPECTED)
            }
        },
        Err(e) if e.is_client_error() => ApiResponse::error(STATUS_BAD_REQUEST, &e.to_string()),
        Err(e) => {
            error!("Calculation error: {e:?}");
            ApiResponse::error(STATUS_SERVER_ERROR, MSG_UNEXPECTED)
        }
    }
}
