use std::path::PathBuf;

/// Verbose error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Date pattern could not be translated
    #[error("date pattern error: {message} in {pattern:?} at offset {offset}")]
    DatePattern {
        pattern: String,
        offset: usize,
        message: String,
    },

    /// Settings file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using verbose Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the demo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Ran to completion
    Success = 0,
    /// A reported error asked for termination
    Reported = 1,
    /// Configuration, pattern or argument error
    ConfigError = 2,
    /// I/O failure
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::DatePattern { .. } | Error::Config { .. } | Error::Argument(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
