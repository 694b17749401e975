//! Trait definitions at the pipeline's seams.

use async_trait::async_trait;
use canned_error::ApplicationError;
use std::future::Future;

/// A parameterized request whose outcome the pipeline classifies.
///
/// Transports, fetch clients with a pre-applied parser, and plain async
/// closures all implement this. The pipeline never cares how the request is
/// issued, only what it resolves to.
///
/// # Examples
///
/// ```
/// use canned_error::ApplicationError;
/// use canned_interface::Request;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let echo = |name: String| async move { Ok::<_, ApplicationError>(name.len()) };
/// assert_eq!(echo.send("octocat".to_string()).await.unwrap(), 7);
/// # }
/// ```
#[async_trait]
pub trait Request<P, R>: Send + Sync
where
    P: Send + 'static,
    R: Send + 'static,
{
    /// Issue the request with the given parameters.
    async fn send(&self, params: P) -> Result<R, ApplicationError>;
}

#[async_trait]
impl<P, R, F, Fut> Request<P, R> for F
where
    P: Send + 'static,
    R: Send + 'static,
    F: Fn(P) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, ApplicationError>> + Send + 'static,
{
    async fn send(&self, params: P) -> Result<R, ApplicationError> {
        (self)(params).await
    }
}

/// Destination for errors that escaped all local recovery.
///
/// The process-wide error queue implements this; tests and per-query
/// overrides can pass a closure instead.
pub trait ErrorSink: Send + Sync {
    /// Accept an unrecovered error.
    fn report(&self, error: ApplicationError);
}

impl<F> ErrorSink for F
where
    F: Fn(ApplicationError) + Send + Sync,
{
    fn report(&self, error: ApplicationError) {
        (self)(error)
    }
}
