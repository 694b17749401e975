//! Application error taxonomy.
//!
//! Every failure that leaves the fetch pipeline is one of four kinds. The set
//! is closed: code that inspects an error matches on [`ApplicationErrorKind`]
//! exhaustively instead of probing for fields.

use std::sync::Arc;

/// Shared, type-erased cause carried by [`ApplicationErrorKind::Unknown`].
pub type UnknownCause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of application error conditions.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ApplicationErrorKind {
    /// The transport reported a non-success outcome.
    #[display("HTTP {} error: {}", status, message)]
    Transport {
        /// HTTP status code, or 0 when no response was received
        status: u16,
        /// Human-readable message
        message: String,
    },
    /// A nominally successful response could not be decoded.
    #[display("Decode error: {}", message)]
    Decode {
        /// Raw response body text
        body: String,
        /// Human-readable message
        message: String,
    },
    /// Application-raised validation failure.
    #[display("{}: {}", name, message)]
    Custom {
        /// Error name (e.g. "TypeError")
        name: String,
        /// Human-readable message
        message: String,
    },
    /// A value that fits none of the typed kinds.
    #[display("Unknown error: {}", cause)]
    Unknown {
        /// The opaque causing value
        cause: UnknownCause,
    },
}

impl ApplicationErrorKind {
    /// Name of the kind, stable across messages.
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationErrorKind::Transport { .. } => "TransportError",
            ApplicationErrorKind::Decode { .. } => "DecodeError",
            ApplicationErrorKind::Custom { .. } => "CustomError",
            ApplicationErrorKind::Unknown { .. } => "UnknownError",
        }
    }

    /// Check if a runtime retrying the request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApplicationErrorKind::Transport { status, .. } => {
                matches!(*status, 0 | 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

// Unknown causes are compared by their rendered message since `dyn Error`
// has no equality of its own.
impl PartialEq for ApplicationErrorKind {
    fn eq(&self, other: &Self) -> bool {
        use ApplicationErrorKind::*;
        match (self, other) {
            (
                Transport { status, message },
                Transport {
                    status: other_status,
                    message: other_message,
                },
            ) => status == other_status && message == other_message,
            (
                Decode { body, message },
                Decode {
                    body: other_body,
                    message: other_message,
                },
            ) => body == other_body && message == other_message,
            (
                Custom { name, message },
                Custom {
                    name: other_name,
                    message: other_message,
                },
            ) => name == other_name && message == other_message,
            (Unknown { cause }, Unknown { cause: other_cause }) => {
                Arc::ptr_eq(cause, other_cause) || cause.to_string() == other_cause.to_string()
            }
            _ => false,
        }
    }
}

/// Application error with source location tracking.
///
/// The kind is fixed at construction and only exposed by reference.
///
/// # Examples
///
/// ```
/// use canned_error::{ApplicationError, ApplicationErrorKind};
///
/// let err = ApplicationError::transport(400, "failure");
/// assert_eq!(err.status(), Some(400));
/// assert!(matches!(err.kind(), ApplicationErrorKind::Transport { .. }));
/// assert!(format!("{}", err).contains("HTTP 400 error: failure"));
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Application Error: {} at line {} in {}", kind, line, file)]
pub struct ApplicationError {
    kind: ApplicationErrorKind,
    line: u32,
    file: &'static str,
}

impl ApplicationError {
    /// Create a new ApplicationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApplicationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Transport failure with a status code and message.
    #[track_caller]
    pub fn transport(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApplicationErrorKind::Transport {
            status,
            message: message.into(),
        })
    }

    /// Decode failure carrying the raw body text.
    #[track_caller]
    pub fn decode(body: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ApplicationErrorKind::Decode {
            body: body.into(),
            message: message.into(),
        })
    }

    /// Application-raised validation failure.
    ///
    /// ```
    /// use canned_error::ApplicationError;
    ///
    /// let err = ApplicationError::custom("TypeError", "login is missing");
    /// assert_eq!(err.kind().name(), "CustomError");
    /// ```
    #[track_caller]
    pub fn custom(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ApplicationErrorKind::Custom {
            name: name.into(),
            message: message.into(),
        })
    }

    /// Wrap an opaque cause.
    #[track_caller]
    pub fn unknown(cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::new(ApplicationErrorKind::Unknown {
            cause: Arc::from(cause.into()),
        })
    }

    /// Classify an escaping error value.
    ///
    /// Values that already are an `ApplicationError` are returned as they are;
    /// anything else becomes [`ApplicationErrorKind::Unknown`].
    ///
    /// ```
    /// use canned_error::{ApplicationError, ApplicationErrorKind};
    ///
    /// let typed = ApplicationError::classify(Box::new(ApplicationError::transport(404, "nope")));
    /// assert_eq!(typed.status(), Some(404));
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let untyped = ApplicationError::classify(Box::new(io));
    /// assert!(matches!(untyped.kind(), ApplicationErrorKind::Unknown { .. }));
    /// ```
    #[track_caller]
    pub fn classify(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        match error.downcast::<ApplicationError>() {
            Ok(typed) => *typed,
            Err(other) => Self::unknown(other),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ApplicationErrorKind {
        &self.kind
    }

    /// Line number where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// HTTP status for transport errors.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ApplicationErrorKind::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message without location information.
    pub fn message(&self) -> String {
        match &self.kind {
            ApplicationErrorKind::Transport { message, .. }
            | ApplicationErrorKind::Decode { message, .. }
            | ApplicationErrorKind::Custom { message, .. } => message.clone(),
            ApplicationErrorKind::Unknown { cause } => cause.to_string(),
        }
    }

    /// Check if this error should trigger a retry by the caller's runtime.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl std::error::Error for ApplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ApplicationErrorKind::Unknown { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<ApplicationErrorKind> for ApplicationError {
    #[track_caller]
    fn from(kind: ApplicationErrorKind) -> Self {
        Self::new(kind)
    }
}
