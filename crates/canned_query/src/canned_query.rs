//! Queries that escalate unrecovered errors to an error sink.

use crate::QueryFunction;
use canned_core::QueryContext;
use canned_error::ApplicationError;
use canned_interface::ErrorSink;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{info, instrument};

/// A query function wired to an error sink.
///
/// Failures that the mapper did not recover are reported to the sink, which
/// is normally the process-wide error queue. The outcome itself is returned
/// unchanged so the caller can still render it.
pub struct CannedQuery<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    query: QueryFunction<P, R, M>,
    handle_error: Arc<dyn ErrorSink>,
}

impl<P, R, M> Clone for CannedQuery<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            handle_error: Arc::clone(&self.handle_error),
        }
    }
}

impl<P, R, M> CannedQuery<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    /// Wire a query function to the default error sink.
    pub fn new(query: QueryFunction<P, R, M>, default_handler: impl ErrorSink + 'static) -> Self {
        Self {
            query,
            handle_error: Arc::new(default_handler),
        }
    }

    /// Report errors to a different sink for this query only.
    pub fn with_error_handler(mut self, handler: impl ErrorSink + 'static) -> Self {
        self.handle_error = Arc::new(handler);
        self
    }

    /// The wrapped query function.
    pub fn query(&self) -> &QueryFunction<P, R, M> {
        &self.query
    }

    /// Run the query, reporting an unrecovered error before returning it.
    ///
    /// # Errors
    ///
    /// Returns the same error that was reported.
    #[instrument(skip_all, fields(key = ?context.key()))]
    pub async fn run<K>(&self, context: QueryContext<K, P>) -> Result<M, ApplicationError>
    where
        K: Debug,
    {
        let result = self.query.call(context).await;
        if let Err(error) = &result {
            info!(kind = error.kind().name(), "Reporting unrecovered error");
            self.handle_error.report(error.clone());
        }
        result
    }
}
