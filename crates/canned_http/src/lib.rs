//! Response parsing and HTTP transport for the Canned data-fetching pipeline.
//!
//! A [`RawResponse`] is a status plus a body that can be read once.
//! [`ResponseParser`] turns it into a payload, a transport error or a decode
//! error, with the error text delegated to [`ErrorClassifier`]s.
//! [`FetchClient`] pre-applies the parser to any raw fetch, and
//! [`HttpTransport`] is the reqwest-backed fetch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod fetch;
mod parser;
mod response;
mod transport;

pub use classifier::{DefaultDecodeErrorClassifier, DefaultHttpErrorClassifier, ErrorClassifier};
pub use fetch::FetchClient;
pub use parser::ResponseParser;
pub use response::RawResponse;
pub use transport::{HttpRequest, HttpRequestBuilder, HttpTransport};
