//! Invocation context handed to query functions by the external runtime.

use derive_getters::{Dissolve, Getters};

/// An opaque cache key plus the parameter bundle for one invocation.
///
/// The runtime owns the key; the pipeline only reads it for tracing.
///
/// ```
/// use canned_core::QueryContext;
///
/// let ctx = QueryContext::new("users.getByUsername", "octocat".to_string());
/// assert_eq!(ctx.key(), &"users.getByUsername");
/// let (_, params) = ctx.dissolve();
/// assert_eq!(params, "octocat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Dissolve, derive_new::new)]
pub struct QueryContext<K, P> {
    key: K,
    params: P,
}
