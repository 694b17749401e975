//! Response parser: status check, then decode.

use crate::{DefaultDecodeErrorClassifier, DefaultHttpErrorClassifier, ErrorClassifier, RawResponse};
use canned_error::ApplicationError;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Classifies a raw response into a decoded payload or an error.
///
/// The parser only sequences the two questions "did the transport fail?" and
/// "did decoding fail?". What the resulting errors say is up to the injected
/// classifiers.
///
/// # Examples
///
/// ```
/// use canned_error::ApplicationErrorKind;
/// use canned_http::{RawResponse, ResponseParser};
/// use reqwest::StatusCode;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let parser = ResponseParser::default();
///
/// let ok: serde_json::Value = parser
///     .parse(RawResponse::new(StatusCode::OK, r#"{"ok":true}"#))
///     .await
///     .unwrap();
/// assert_eq!(ok["ok"], true);
///
/// let err = parser
///     .parse::<serde_json::Value>(RawResponse::new(
///         StatusCode::BAD_REQUEST,
///         r#"{"message":"failure"}"#,
///     ))
///     .await
///     .unwrap_err();
/// assert_eq!(
///     err.kind(),
///     &ApplicationErrorKind::Transport { status: 400, message: "failure".into() }
/// );
/// # }
/// ```
#[derive(Clone)]
pub struct ResponseParser {
    http_error: Arc<dyn ErrorClassifier>,
    decode_error: Arc<dyn ErrorClassifier>,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self {
            http_error: Arc::new(DefaultHttpErrorClassifier),
            decode_error: Arc::new(DefaultDecodeErrorClassifier),
        }
    }
}

impl std::fmt::Debug for ResponseParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseParser").finish_non_exhaustive()
    }
}

impl ResponseParser {
    /// Parser with the default classifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the classifier used for non-2xx responses.
    pub fn with_http_error_classifier(
        mut self,
        classifier: impl ErrorClassifier + 'static,
    ) -> Self {
        self.http_error = Arc::new(classifier);
        self
    }

    /// Replace the classifier used when a 2xx body fails to decode.
    pub fn with_decode_error_classifier(
        mut self,
        classifier: impl ErrorClassifier + 'static,
    ) -> Self {
        self.decode_error = Arc::new(classifier);
        self
    }

    /// Parse a response.
    ///
    /// The response is duplicated before its body is touched; the duplicate
    /// goes to whichever classifier handles a failure.
    ///
    /// # Errors
    ///
    /// - the HTTP-error classifier's result for a non-2xx status
    /// - the decode-error classifier's result for an undecodable 2xx body
    /// - a transport error if the body stream itself fails
    #[instrument(skip_all, fields(status = %response.status()))]
    pub async fn parse<T: DeserializeOwned>(
        &self,
        mut response: RawResponse,
    ) -> Result<T, ApplicationError> {
        let duplicate = response.duplicate().await?;

        if !response.is_success() {
            warn!("Request returned non-success status");
            return Err(self.http_error.classify(duplicate).await);
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(payload) => {
                debug!(len = bytes.len(), "Decoded response body");
                Ok(payload)
            }
            Err(e) => {
                warn!(error = %e, "Failed to decode response body");
                Err(self.decode_error.classify(duplicate).await)
            }
        }
    }
}
