//! Pluggable classifiers that turn failed responses into application errors.

use crate::RawResponse;
use async_trait::async_trait;
use canned_error::ApplicationError;
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Turns an unconsumed response into an [`ApplicationError`].
///
/// The parser hands classifiers a duplicate whose body has not been read, so
/// a classifier is free to consume it.
///
/// # Examples
///
/// ```
/// use canned_error::ApplicationError;
/// use canned_http::{ErrorClassifier, RawResponse};
/// use reqwest::StatusCode;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let classifier = |response: RawResponse| async move {
///     ApplicationError::custom("HttpError", response.status().to_string())
/// };
/// let err = classifier
///     .classify(RawResponse::new(StatusCode::NOT_FOUND, ""))
///     .await;
/// assert_eq!(err.message(), "404 Not Found");
/// # }
/// ```
#[async_trait]
pub trait ErrorClassifier: Send + Sync {
    /// Build the error for this response.
    async fn classify(&self, response: RawResponse) -> ApplicationError;
}

#[async_trait]
impl<F, Fut> ErrorClassifier for F
where
    F: Fn(RawResponse) -> Fut + Send + Sync,
    Fut: Future<Output = ApplicationError> + Send + 'static,
{
    async fn classify(&self, response: RawResponse) -> ApplicationError {
        (self)(response).await
    }
}

/// Default classifier for non-2xx responses.
///
/// The message is taken from, in order: a JSON object's string `message`
/// field, a JSON string body, the raw body text, the status reason phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHttpErrorClassifier;

#[async_trait]
impl ErrorClassifier for DefaultHttpErrorClassifier {
    async fn classify(&self, response: RawResponse) -> ApplicationError {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return e,
        };

        let message = match serde_json::from_str::<Value>(&text) {
            Ok(Value::String(message)) => Some(message),
            Ok(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            Ok(_) => None,
            Err(_) if text.trim().is_empty() => None,
            Err(_) => Some(text),
        }
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

        debug!(status = status.as_u16(), message = %message, "Classified HTTP error");
        ApplicationError::transport(status.as_u16(), message)
    }
}

/// Default classifier for 2xx responses whose body failed to decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDecodeErrorClassifier;

#[async_trait]
impl ErrorClassifier for DefaultDecodeErrorClassifier {
    async fn classify(&self, response: RawResponse) -> ApplicationError {
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return e,
        };
        let message = format!("JSON parse error. Response text: {}", text);
        ApplicationError::decode(text, message)
    }
}
