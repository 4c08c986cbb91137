//! Error types for servkit.

use std::time::Duration;

use thiserror::Error;

use crate::strings;

/// Main error type for all handler lifecycle operations.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A configuration-derived accessor was called before `initialize` ran.
    ///
    /// This is a programming-sequence error on the host side. The message is
    /// looked up in the process-wide localized strings table.
    #[error("{0}")]
    NotInitialized(String),

    /// `initialize` was called a second time. The first configuration wins.
    #[error("handler already initialized; configuration can be installed only once")]
    AlreadyInitialized,

    /// Initialization failed; the host must not place the handler into service.
    #[error("initialization failed: {0}")]
    Init(String),

    /// The handler cannot service requests, temporarily or permanently.
    ///
    /// `retry_after` carries the earliest delay after which the host should
    /// try again; `None` means the condition is permanent.
    #[error("handler unavailable: {reason}")]
    Unavailable {
        reason: String,
        retry_after: Option<Duration>,
    },

    /// A request could not be processed.
    #[error("processing failed: {0}")]
    Processing(String),

    /// I/O error while reading the request or writing the response.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document.
    #[error("configuration document error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HandlerError {
    /// Build the not-initialized condition with its localized diagnostic.
    pub fn not_initialized() -> Self {
        Self::NotInitialized(
            strings::global()
                .get(strings::keys::CONFIG_NOT_INITIALIZED)
                .to_string(),
        )
    }

    /// Whether the host may retry after this error.
    ///
    /// Only a temporary [`HandlerError::Unavailable`] is retryable; this
    /// crate itself never retries anything.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable {
                retry_after: Some(_),
                ..
            }
        )
    }
}

/// Result type alias using HandlerError.
pub type Result<T> = std::result::Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_carries_diagnostic() {
        let err = HandlerError::not_initialized();
        match &err {
            HandlerError::NotInitialized(msg) => {
                assert!(msg.contains("not been initialized"), "message was: {msg}");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        // Display mirrors the localized text verbatim.
        assert_eq!(
            err.to_string(),
            strings::global().get(strings::keys::CONFIG_NOT_INITIALIZED)
        );
    }

    #[test]
    fn test_retryable_only_for_temporary_unavailability() {
        let temporary = HandlerError::Unavailable {
            reason: "warming up".into(),
            retry_after: Some(Duration::from_secs(5)),
        };
        let permanent = HandlerError::Unavailable {
            reason: "backend gone".into(),
            retry_after: None,
        };

        assert!(temporary.is_retryable());
        assert!(!permanent.is_retryable());
        assert!(!HandlerError::AlreadyInitialized.is_retryable());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HandlerError = io.into();
        assert!(matches!(err, HandlerError::Io(_)));
    }
}
