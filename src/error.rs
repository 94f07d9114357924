use crate::utils::days::DayName;
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(arrow_days::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(code(arrow_days::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(arrow_days::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(arrow_days::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Which side of a day's range a time string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Start => f.write_str("start_time"),
            TimeField::End => f.write_str("end_time"),
        }
    }
}

/// Why a single `HH:MM:SS` string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TimeParseError {
    #[error("expected HH:MM:SS, got {0:?}")]
    #[diagnostic(code(arrow_days::time::shape))]
    Shape(String),

    #[error("seconds must be \"00\", got {0:?}")]
    #[diagnostic(code(arrow_days::time::seconds))]
    Seconds(String),

    #[error("hour {0:?} is not a number between 0 and 23")]
    #[diagnostic(code(arrow_days::time::hour))]
    Hour(String),

    #[error("minute {0:?} is not one of 00, 15, 30, 45")]
    #[diagnostic(code(arrow_days::time::minute))]
    Minute(String),
}

/// A day-of-week collection could not be turned into week slots.
///
/// One bad time invalidates the whole collection; no partial slots are
/// handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid {field} on {day}")]
#[diagnostic(
    code(arrow_days::parse),
    help("times must be 24-hour HH:MM:SS on a quarter hour with zero seconds")
)]
pub struct ParseError {
    pub day: DayName,
    pub field: TimeField,
    #[source]
    #[diagnostic_source]
    pub source: TimeParseError,
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
