//! HTTP transport backed by reqwest.

use crate::RawResponse;
use async_trait::async_trait;
use canned_error::ApplicationError;
use canned_interface::Request;
use derive_getters::Getters;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// A GET request relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct HttpRequest {
    /// Path appended to the base URL (e.g. `/users/octocat`)
    path: String,
    /// Query string pairs
    #[builder(default)]
    query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Request for a path with no query string.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append a query string pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Creates a new builder for `HttpRequest`.
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }
}

/// Issues GET requests and returns the unread response.
///
/// Headers and the base URL belong to the caller; the transport only applies
/// them. Non-2xx statuses are not errors here, they are left for the
/// [`ResponseParser`](crate::ResponseParser) to classify.
#[derive(Debug, Clone, Getters)]
pub struct HttpTransport {
    #[getter(skip)]
    client: Client,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl HttpTransport {
    /// Create a transport for a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating HTTP transport");
        Self {
            client: Client::new(),
            base_url,
            headers: Vec::new(),
        }
    }

    /// Use an existing reqwest client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add an `Authorization: Bearer` header.
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_header("Authorization", value)
    }

    /// Full URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Request<HttpRequest, RawResponse> for HttpTransport {
    #[instrument(skip(self), fields(path = %request.path()))]
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, ApplicationError> {
        let url = self.url_for(request.path());
        debug!(url = %url, "Sending request");

        let mut builder = self.client.get(&url).query(request.query());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "Request failed");
            ApplicationError::transport(
                e.status().map(|s| s.as_u16()).unwrap_or(0),
                format!("Request failed: {}", e),
            )
        })?;

        debug!(status = %response.status(), "Received response");
        Ok(RawResponse::from_reqwest(response))
    }
}
