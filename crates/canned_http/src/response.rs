//! Raw transport responses with a single-read body.

use canned_error::ApplicationError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Response body that can be read exactly once.
///
/// A body straight off the wire is `Streaming` until something buffers it.
/// Buffered bytes are shared, so duplicates never re-read the stream.
#[derive(Debug)]
enum Body {
    Buffered(Arc<[u8]>),
    Streaming(reqwest::Response),
}

impl Body {
    fn empty() -> Self {
        Body::Buffered(Arc::from(Vec::new()))
    }

    /// Buffer the body in place and return a handle to the bytes.
    ///
    /// If the read fails or is cancelled the body is left empty, so it can't
    /// be consumed a second time.
    async fn buffer(&mut self, status: StatusCode) -> Result<Arc<[u8]>, ApplicationError> {
        let bytes = match std::mem::replace(self, Body::empty()) {
            Body::Buffered(bytes) => bytes,
            Body::Streaming(response) => {
                let bytes = response.bytes().await.map_err(|e| {
                    ApplicationError::transport(
                        status.as_u16(),
                        format!("Failed to read response body: {}", e),
                    )
                })?;
                debug!(len = bytes.len(), "Buffered streaming body");
                Arc::from(bytes.to_vec())
            }
        };
        *self = Body::Buffered(Arc::clone(&bytes));
        Ok(bytes)
    }
}

/// Transport-level response: a status plus a lazily read body.
///
/// Reading methods take `self`, so the body is consumed exactly once. Call
/// [`RawResponse::duplicate`] before the first read when the body has to be
/// inspected twice.
///
/// # Examples
///
/// ```
/// use canned_http::RawResponse;
/// use reqwest::StatusCode;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut response = RawResponse::new(StatusCode::OK, r#"{"ok":true}"#);
/// let copy = response.duplicate().await.unwrap();
///
/// let value: serde_json::Value = response.json().await.unwrap();
/// assert_eq!(value["ok"], true);
/// assert_eq!(copy.text().await.unwrap(), r#"{"ok":true}"#);
/// # }
/// ```
#[derive(Debug)]
pub struct RawResponse {
    status: StatusCode,
    url: Option<String>,
    body: Body,
}

impl RawResponse {
    /// Create a response with an in-memory body.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        let body: Vec<u8> = body.into();
        Self {
            status,
            url: None,
            body: Body::Buffered(Arc::from(body)),
        }
    }

    /// Create a response from a JSON value.
    pub fn json_body(status: StatusCode, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// Wrap a reqwest response without reading its body.
    pub fn from_reqwest(response: reqwest::Response) -> Self {
        Self {
            status: response.status(),
            url: Some(response.url().to_string()),
            body: Body::Streaming(response),
        }
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Request URL, when the response came from the network.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Duplicate the response before its body is read.
    ///
    /// A streaming body is buffered once; both the original and the copy then
    /// share the same bytes.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the body stream fails while buffering.
    #[instrument(skip(self), fields(status = %self.status))]
    pub async fn duplicate(&mut self) -> Result<RawResponse, ApplicationError> {
        let bytes = self.body.buffer(self.status).await?;
        Ok(Self {
            status: self.status,
            url: self.url.clone(),
            body: Body::Buffered(bytes),
        })
    }

    /// Read the body as bytes.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the body stream fails.
    pub async fn bytes(mut self) -> Result<Arc<[u8]>, ApplicationError> {
        self.body.buffer(self.status).await
    }

    /// Read the body as text, replacing invalid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the body stream fails.
    pub async fn text(self) -> Result<String, ApplicationError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a decode error carrying the body text if the JSON does not
    /// match `T`, or a transport error if the body stream fails.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, ApplicationError> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ApplicationError::decode(
                String::from_utf8_lossy(&bytes).into_owned(),
                format!("JSON parse error: {}", e),
            )
        })
    }
}
