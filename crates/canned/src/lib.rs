//! Canned - recoverable data fetching
//!
//! Canned wraps an arbitrary request in one error-mapping pipeline. Every
//! failure is classified into an [`ApplicationError`], handed to a mapper that
//! may recover from it, and otherwise pushed onto a shared error queue for the
//! UI to show and dismiss.
//!
//! # Quick Start
//!
//! ```
//! use canned::{
//!     success, ApplicationError, CannedQuery, ErrorHandlerState, QueryContext, QueryFunction,
//!     ResponseMapperSpec,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let errors = ErrorHandlerState::new();
//!
//! let query = QueryFunction::new(
//!     |name: String| async move {
//!         if name.is_empty() {
//!             Err(ApplicationError::transport(404, "Not Found"))
//!         } else {
//!             Ok(name.len())
//!         }
//!     },
//!     ResponseMapperSpec::new(success),
//! );
//! let query = CannedQuery::new(query, errors.clone());
//!
//! assert_eq!(query.run(QueryContext::new("len", "octocat".to_string())).await.unwrap(), 7);
//! assert!(query.run(QueryContext::new("len", String::new())).await.is_err());
//! assert_eq!(errors.count(), 1);
//! # }
//! ```
//!
//! # Architecture
//!
//! - `canned_error` - [`ApplicationError`] and the configuration error types
//! - `canned_core` - [`Outcome`], [`QueryContext`] and telemetry setup
//! - `canned_interface` - the [`Request`] and [`ErrorSink`] seams
//! - `canned_http` - [`ResponseParser`], [`FetchClient`] and [`HttpTransport`]
//! - `canned_query` - [`ResponseMapper`], [`QueryFunction`] and the canned queries
//! - `canned_state` - [`ErrorHandlerState`], the error queue
//! - `canned_github` - GitHub user queries
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use canned_core::{Outcome, QueryContext, failure, init_telemetry, shutdown_telemetry, success};
pub use canned_error::{
    ApplicationError, ApplicationErrorKind, CannedError, CannedErrorKind, CannedResult, ConfigError,
    UnknownCause,
};
pub use canned_github::{
    CannedConfig, GET_USER_KEY, GithubClient, GithubConfig, MISSING_FIELD_ERROR, SEARCH_USERS_KEY,
    SearchUsersDto, UserProfile, UserProfileDto, user_profile_from_dto, user_profiles_from_search,
};
pub use canned_http::{
    DefaultDecodeErrorClassifier, DefaultHttpErrorClassifier, ErrorClassifier, FetchClient,
    HttpRequest, HttpRequestBuilder, HttpTransport, RawResponse, ResponseParser,
};
pub use canned_interface::{ErrorSink, Request};
pub use canned_query::{
    CannedQuery, CollectionQuery, MapErrorFn, MapResponseFn, QueryFunction, ResponseMapper,
    ResponseMapperSpec,
};
pub use canned_state::{ErrorHandlerState, ErrorState};
