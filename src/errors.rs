//! Unified application error types.
//! `CalcError` is the closed set of outcomes the calculator can report,
//! `AppError` wraps it together with everything the CLI layer can hit.

use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid start time format. Please use HH:MM.")]
    InvalidFormat,

    #[error("Invalid break time entered.")]
    InvalidBreak,

    // ---------------------------
    // Domain rules
    // ---------------------------
    #[error("Start time appears to be in the future.")]
    FutureStartTime,

    #[error("It's the weekend!")]
    WeekendNotSupported,

    // ---------------------------
    // Unexpected
    // ---------------------------
    #[error("Cannot localize {0} in the configured timezone")]
    Localization(String),

    #[error("End time out of range for start {0}")]
    OutOfRange(String),
}

impl CalcError {
    /// True when the caller can fix the condition by correcting its input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CalcError::Localization(_) | CalcError::OutOfRange(_))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Calculation
    // ---------------------------
    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDateTime(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
pub type CalcResult<T> = Result<T, CalcError>;
