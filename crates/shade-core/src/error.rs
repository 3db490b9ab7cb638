//! Error types module
//!
//! All failures of the Shade client and node are unified under [`ShadeError`].
//! Every error aborts the operation of the current item; the dispatch shell
//! decides whether that surfaces for the whole run or becomes an `{error}`
//! record for the item.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures reported by the remote service
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be reported.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "REMOTE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same call could succeed
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum ShadeError {
    #[error("Shade API request failed with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unknown operation '{operation}' for resource '{resource}'")]
    UnknownOperation { resource: String, operation: String },

    #[error("{message}: {source}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used across the Shade crates
pub type ShadeResult<T> = Result<T, ShadeError>;

impl ShadeError {
    pub fn validation(message: impl Into<String>) -> Self {
        ShadeError::Validation(message.into())
    }

    pub fn unknown_operation(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        ShadeError::UnknownOperation {
            resource: resource.into(),
            operation: operation.into(),
        }
    }

    /// Wrap a lower-level failure (connection refused, timeout, ...) with context.
    pub fn transport(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        ShadeError::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// HTTP status of a remote failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShadeError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message followed by every cause in the source chain not already part of it.
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let cause = err.to_string();
            if !details.contains(&cause) {
                details.push_str(": ");
                details.push_str(&cause);
            }
            source = err.source();
        }

        details
    }
}

impl From<serde_json::Error> for ShadeError {
    fn from(err: serde_json::Error) -> Self {
        ShadeError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ShadeError {
    fn from(err: validator::ValidationErrors) -> Self {
        ShadeError::Validation(err.to_string())
    }
}

impl ErrorMetadata for ShadeError {
    fn error_code(&self) -> &'static str {
        match self {
            ShadeError::Remote { .. } => "REMOTE_ERROR",
            ShadeError::Validation(_) => "VALIDATION_ERROR",
            ShadeError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            ShadeError::Transport { .. } => "TRANSPORT_ERROR",
            ShadeError::Decode(_) => "DECODE_ERROR",
            ShadeError::Config(_) => "CONFIG_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            ShadeError::Remote { status, .. } => *status == 429 || *status >= 500,
            ShadeError::Transport { .. } => true,
            _ => false,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            ShadeError::Validation(_) | ShadeError::UnknownOperation { .. } => LogLevel::Debug,
            ShadeError::Remote { status, .. } if *status < 500 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
