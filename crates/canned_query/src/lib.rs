//! Response mapping and query functions for the Canned data-fetching
//! pipeline.
//!
//! - [`ResponseMapperSpec`] / [`ResponseMapper`]: map a payload to a model,
//!   recovering from errors when a `map_error` is configured.
//! - [`QueryFunction`]: request + mapper as one async call for an external
//!   runtime.
//! - [`CannedQuery`]: a query function that reports unrecovered errors.
//! - [`CollectionQuery`]: a canned query that keeps its last good collection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod canned_query;
mod collection;
mod mapper;
mod query_function;

pub use canned_query::CannedQuery;
pub use collection::CollectionQuery;
pub use mapper::{MapErrorFn, MapResponseFn, ResponseMapper, ResponseMapperSpec};
pub use query_function::QueryFunction;
