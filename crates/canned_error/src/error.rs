//! Top-level error wrapper types.

use crate::{ApplicationError, ConfigError};

/// Every error the Canned crates can return.
///
/// # Examples
///
/// ```
/// use canned_error::{CannedError, ConfigError};
///
/// let err: CannedError = ConfigError::new("Missing base_url").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CannedErrorKind {
    /// Error produced by the fetch pipeline
    #[from(ApplicationError)]
    Application(ApplicationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Canned error with kind discrimination.
///
/// # Examples
///
/// ```
/// use canned_error::{ApplicationError, CannedResult};
///
/// fn fetch() -> CannedResult<String> {
///     Err(ApplicationError::transport(503, "Service unavailable"))?
/// }
///
/// assert!(fetch().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Canned Error: {}", _0)]
pub struct CannedError(Box<CannedErrorKind>);

impl CannedError {
    /// Create a new error from a kind.
    pub fn new(kind: CannedErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CannedErrorKind {
        &self.0
    }
}

impl<T> From<T> for CannedError
where
    T: Into<CannedErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Canned operations.
pub type CannedResult<T> = std::result::Result<T, CannedError>;
