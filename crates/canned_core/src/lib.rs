//! Core data types for the Canned data-fetching pipeline.
//!
//! - [`Outcome`] is the success/failure container mapping callbacks return.
//! - [`QueryContext`] is what an external request runtime passes to a query.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod outcome;
mod telemetry;

pub use context::QueryContext;
pub use outcome::{Outcome, failure, success};
pub use telemetry::{init_telemetry, shutdown_telemetry};
