use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Calendar parse error: {0}")]
    #[diagnostic(code(weekgrid::parse))]
    Parse(String),

    #[error("Calendar contains no events")]
    #[diagnostic(
        code(weekgrid::empty_calendar),
        help("the week grid spans the earliest and latest event start dates, so the input calendar needs at least one event with a DTSTART")
    )]
    EmptyCalendar,

    #[error("Serialization error: {0}")]
    #[diagnostic(code(weekgrid::serialization))]
    Serialization(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(weekgrid::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(weekgrid::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(weekgrid::io))]
    Io(#[from] std::io::Error),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type GridResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(message: &str) -> Error {
    Error::Environment(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create parse errors
pub fn parse_error(message: &str) -> Error {
    Error::Parse(message.to_string())
}
