use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Network error: {0}")]
    #[diagnostic(
        code(employee_hours::network),
        help("check that the time entries endpoint is reachable and TIME_ENTRIES_URL is correct")
    )]
    Network(String),

    #[error("Format error: {0}")]
    #[diagnostic(code(employee_hours::format))]
    Format(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(employee_hours::config))]
    Config(String),

    #[error("Render error: {0}")]
    #[diagnostic(code(employee_hours::render))]
    Render(String),

    #[error(transparent)]
    #[diagnostic(code(employee_hours::io))]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Render(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ReportResult<T> = Result<T, Error>;

/// Helper to create network errors
pub fn network_error(message: &str) -> Error {
    Error::Network(message.to_string())
}

/// Helper to create format errors
pub fn format_error(message: &str) -> Error {
    Error::Format(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
