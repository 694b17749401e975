//! Trait definitions for the Canned data-fetching pipeline.
//!
//! [`Request`] is the seam to the transport; [`ErrorSink`] is the seam to
//! whatever surfaces unrecovered errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ErrorSink, Request};
