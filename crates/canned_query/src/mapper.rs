//! Response mapper: one recovery path for failed requests and failed mapping.

use canned_core::Outcome;
use canned_error::ApplicationError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Maps a response payload to the model, or fails.
pub type MapResponseFn<R, M> = Arc<dyn Fn(R) -> Outcome<M, ApplicationError> + Send + Sync>;

/// Maps an error to a fallback model, or fails.
pub type MapErrorFn<M> =
    Arc<dyn Fn(ApplicationError) -> Outcome<M, ApplicationError> + Send + Sync>;

/// Mapping configuration for one call site.
///
/// `map_response` is required. `map_error` is optional, and leaving it out
/// means errors propagate unchanged.
pub struct ResponseMapperSpec<R, M> {
    map_response: MapResponseFn<R, M>,
    map_error: Option<MapErrorFn<M>>,
}

impl<R, M> Clone for ResponseMapperSpec<R, M> {
    fn clone(&self) -> Self {
        Self {
            map_response: Arc::clone(&self.map_response),
            map_error: self.map_error.clone(),
        }
    }
}

impl<R, M> std::fmt::Debug for ResponseMapperSpec<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseMapperSpec")
            .field("map_error", &self.map_error.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, M> ResponseMapperSpec<R, M> {
    /// Spec with a response mapping and no recovery.
    pub fn new(
        map_response: impl Fn(R) -> Outcome<M, ApplicationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            map_response: Arc::new(map_response),
            map_error: None,
        }
    }

    /// Add an error recovery.
    pub fn with_map_error(
        mut self,
        map_error: impl Fn(ApplicationError) -> Outcome<M, ApplicationError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.map_error = Some(Arc::new(map_error));
        self
    }

    /// Build the mapper.
    pub fn build(self) -> ResponseMapper<R, M> {
        ResponseMapper { spec: self }
    }
}

impl<T: 'static> ResponseMapperSpec<T, T> {
    /// Pass responses through unchanged.
    pub fn identity() -> Self {
        Self::new(Outcome::success)
    }
}

/// The pair of total mapping functions built from a [`ResponseMapperSpec`].
///
/// # Examples
///
/// ```
/// use canned_core::{failure, success};
/// use canned_error::ApplicationError;
/// use canned_query::ResponseMapperSpec;
///
/// let mapper = ResponseMapperSpec::new(|n: u32| {
///     if n > 0 {
///         success(n)
///     } else {
///         failure(ApplicationError::custom("ValidationError", "zero"))
///     }
/// })
/// .with_map_error(|_| success(1))
/// .build();
///
/// assert_eq!(mapper.from_response(5).unwrap(), 5);
/// // A mapping failure goes through the same recovery as a request failure.
/// assert_eq!(mapper.from_response(0).unwrap(), 1);
/// assert_eq!(mapper.from_error(ApplicationError::transport(500, "boom")).unwrap(), 1);
/// ```
pub struct ResponseMapper<R, M> {
    spec: ResponseMapperSpec<R, M>,
}

impl<R, M> Clone for ResponseMapper<R, M> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
        }
    }
}

impl<R, M> std::fmt::Debug for ResponseMapper<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseMapper")
            .field("spec", &self.spec)
            .finish()
    }
}

impl<R, M> From<ResponseMapperSpec<R, M>> for ResponseMapper<R, M> {
    fn from(spec: ResponseMapperSpec<R, M>) -> Self {
        spec.build()
    }
}

impl<R, M> ResponseMapper<R, M> {
    /// Map a response to the model.
    ///
    /// A failed mapping is handed to [`ResponseMapper::from_error`], so a
    /// "200 OK but invalid" payload gets the same recovery as a failed request.
    ///
    /// # Errors
    ///
    /// Returns the mapping error when no recovery is configured, or the
    /// recovery's own error.
    pub fn from_response(&self, response: R) -> Result<M, ApplicationError> {
        match (self.spec.map_response)(response).unwrap_or_propagate() {
            Ok(model) => {
                trace!("Mapped response to model");
                Ok(model)
            }
            Err(error) => {
                debug!(error = %error, "Response mapping failed, routing to error mapping");
                self.from_error(error)
            }
        }
    }

    /// Recover from an error, or propagate it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `error` itself when no recovery is configured, or the
    /// recovery's own error.
    pub fn from_error(&self, error: ApplicationError) -> Result<M, ApplicationError> {
        match &self.spec.map_error {
            Some(map_error) => {
                debug!(kind = error.kind().name(), "Recovering from error");
                map_error(error).unwrap_or_propagate()
            }
            None => Err(error),
        }
    }

    /// True if a `map_error` recovery is configured.
    pub fn has_recovery(&self) -> bool {
        self.spec.map_error.is_some()
    }
}
