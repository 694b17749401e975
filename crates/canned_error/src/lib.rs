//! Error types for the Canned data-fetching pipeline.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! [`ApplicationError`] is the currency of the fetch pipeline itself. The
//! boxed [`CannedError`] covers everything else (configuration, startup) and
//! converts from either with `?`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod application;
mod config;
mod error;

pub use application::{ApplicationError, ApplicationErrorKind, UnknownCause};
pub use config::ConfigError;
pub use error::{CannedError, CannedErrorKind, CannedResult};
