//! Collection queries that keep serving the last good result.

use crate::CannedQuery;
use canned_core::QueryContext;
use canned_error::ApplicationError;
use parking_lot::Mutex;
use std::fmt::Debug;
use tracing::debug;

/// A [`CannedQuery`] over a collection that remembers the last successful
/// result.
///
/// A failed run leaves the remembered collection in place, so a list view
/// keeps showing the previous items while the error is surfaced elsewhere.
pub struct CollectionQuery<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
{
    query: CannedQuery<P, R, Vec<M>>,
    collection: Mutex<Vec<M>>,
}

impl<P, R, M> CollectionQuery<P, R, M>
where
    P: Send + 'static,
    R: Send + 'static,
    M: Clone,
{
    /// Start with an empty collection.
    pub fn new(query: CannedQuery<P, R, Vec<M>>) -> Self {
        Self {
            query,
            collection: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the last successful collection.
    pub fn collection(&self) -> Vec<M> {
        self.collection.lock().clone()
    }

    /// Run the query.
    ///
    /// Returns the collection after the run together with the run's own
    /// outcome.
    pub async fn run<K>(
        &self,
        context: QueryContext<K, P>,
    ) -> (Vec<M>, Result<Vec<M>, ApplicationError>)
    where
        K: Debug,
    {
        let result = self.query.run(context).await;
        let mut collection = self.collection.lock();
        if let Ok(items) = &result {
            debug!(len = items.len(), "Replacing collection");
            *collection = items.clone();
        }
        (collection.clone(), result)
    }
}
