//! Process-wide error queue for the Canned data-fetching pipeline.
//!
//! [`ErrorHandlerState`] collects errors that escaped every local recovery,
//! in arrival order, for a notification surface to show and dismiss.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error_handler;

pub use error_handler::{ErrorHandlerState, ErrorState};
