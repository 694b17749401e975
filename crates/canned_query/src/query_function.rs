//! Query function: request + mapper behind one async call.

use crate::ResponseMapper;
use canned_core::QueryContext;
use canned_error::ApplicationError;
use canned_interface::Request;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Adapts a request and a mapper into the single async operation an external
/// request runtime schedules.
///
/// A query function has no side effects beyond the request. It never reports
/// errors anywhere; escalation is the caller's job.
///
/// # Examples
///
/// ```
/// use canned_core::{success, QueryContext};
/// use canned_error::ApplicationError;
/// use canned_query::{QueryFunction, ResponseMapperSpec};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let query = QueryFunction::new(
///     |_: ()| async { Err::<String, _>(ApplicationError::transport(503, "down")) },
///     ResponseMapperSpec::identity().with_map_error(|_| success("fallback".to_string())),
/// );
///
/// let model = query.call(QueryContext::new("user", ())).await.unwrap();
/// assert_eq!(model, "fallback");
/// # }
/// ```
pub struct QueryFunction<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    request: Arc<dyn Request<P, R>>,
    mapper: ResponseMapper<R, M>,
}

impl<P, R, M> Clone for QueryFunction<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            request: Arc::clone(&self.request),
            mapper: self.mapper.clone(),
        }
    }
}

impl<P, R, M> std::fmt::Debug for QueryFunction<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryFunction")
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}

impl<P, R, M> QueryFunction<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    /// Create a query function.
    pub fn new(
        request: impl Request<P, R> + 'static,
        mapper: impl Into<ResponseMapper<R, M>>,
    ) -> Self {
        Self {
            request: Arc::new(request),
            mapper: mapper.into(),
        }
    }

    /// The mapper applied to every outcome.
    pub fn mapper(&self) -> &ResponseMapper<R, M> {
        &self.mapper
    }

    /// Run the request with the context's parameters and map the outcome.
    ///
    /// # Errors
    ///
    /// Returns the request or mapping error when the mapper has no recovery
    /// for it.
    #[instrument(skip_all, fields(key = ?context.key()))]
    pub async fn call<K>(&self, context: QueryContext<K, P>) -> Result<M, ApplicationError>
    where
        K: Debug,
    {
        let (_, params) = context.dissolve();

        match self.request.send(params).await {
            Ok(response) => {
                debug!("Request succeeded, mapping response");
                self.mapper.from_response(response)
            }
            Err(error) => {
                warn!(error = %error, "Request failed, mapping error");
                self.mapper.from_error(error)
            }
        }
    }
}
