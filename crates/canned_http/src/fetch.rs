//! Fetch client: a transport request with the response parser pre-applied.

use crate::{RawResponse, ResponseParser};
use async_trait::async_trait;
use canned_error::ApplicationError;
use canned_interface::Request;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;

/// Pairs a raw fetch with a [`ResponseParser`].
///
/// The result is itself a [`Request`] that resolves to the decoded payload,
/// so it plugs straight into a query function.
///
/// # Examples
///
/// ```
/// use canned_error::ApplicationError;
/// use canned_http::{FetchClient, RawResponse};
/// use canned_interface::Request;
/// use reqwest::StatusCode;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let client: FetchClient<(), serde_json::Value> = FetchClient::new(|_: ()| async {
///     Ok::<_, ApplicationError>(RawResponse::new(StatusCode::OK, r#"{"ok":true}"#))
/// });
/// let payload = client.send(()).await.unwrap();
/// assert_eq!(payload["ok"], true);
/// # }
/// ```
pub struct FetchClient<P, T>
where
    P: Send + 'static,
{
    fetch: Arc<dyn Request<P, RawResponse>>,
    parser: ResponseParser,
    _payload: PhantomData<fn() -> T>,
}

impl<P, T> Clone for FetchClient<P, T>
where
    P: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            fetch: Arc::clone(&self.fetch),
            parser: self.parser.clone(),
            _payload: PhantomData,
        }
    }
}

impl<P, T> std::fmt::Debug for FetchClient<P, T>
where
    P: Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

impl<P, T> FetchClient<P, T>
where
    P: Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    /// Create a fetch client with the default parser.
    pub fn new(fetch: impl Request<P, RawResponse> + 'static) -> Self {
        Self {
            fetch: Arc::new(fetch),
            parser: ResponseParser::default(),
            _payload: PhantomData,
        }
    }

    /// Use a parser with custom classifiers.
    pub fn with_parser(mut self, parser: ResponseParser) -> Self {
        self.parser = parser;
        self
    }

    /// The parser applied to every response.
    pub fn parser(&self) -> &ResponseParser {
        &self.parser
    }
}

#[async_trait]
impl<P, T> Request<P, T> for FetchClient<P, T>
where
    P: Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    #[instrument(skip_all)]
    async fn send(&self, params: P) -> Result<T, ApplicationError> {
        let response = self.fetch.send(params).await?;
        self.parser.parse(response).await
    }
}
