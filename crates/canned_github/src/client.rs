//! GitHub REST client assembled from the fetch pipeline.

use crate::{
    GithubConfig, SearchUsersDto, UserProfile, UserProfileDto, user_profile_from_dto,
    user_profiles_from_search,
};
use canned_core::QueryContext;
use canned_error::ApplicationError;
use canned_http::{FetchClient, HttpRequest, HttpTransport, RawResponse};
use canned_interface::Request;
use canned_query::{QueryFunction, ResponseMapperSpec};
use derive_getters::Getters;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Query key for a single user lookup.
pub const GET_USER_KEY: &str = "users.getByUsername";

/// Query key for user search.
pub const SEARCH_USERS_KEY: &str = "search-users";

/// Builds query functions against the GitHub REST API.
///
/// The transport is shared by every query the client hands out.
///
/// # Examples
///
/// ```no_run
/// use canned_github::{CannedConfig, GithubClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CannedConfig::load()?;
/// let client = GithubClient::new(config.github().clone());
/// let user = client.get_user("octocat").await?;
/// println!("{}", user);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Getters)]
pub struct GithubClient {
    #[getter(skip)]
    transport: Arc<dyn Request<HttpRequest, RawResponse>>,
    config: GithubConfig,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Create a client with a reqwest transport configured from `config`.
    ///
    /// A bearer token is attached when the configured token variable is set.
    pub fn new(config: GithubConfig) -> Self {
        let mut transport = HttpTransport::new(config.base_url())
            .with_header("Accept", config.accept())
            .with_header("User-Agent", config.user_agent());

        match config.token() {
            Some(token) => {
                debug!("Using bearer token from environment");
                transport = transport.with_bearer_token(token);
            }
            None => debug!("No token configured, sending unauthenticated requests"),
        }

        Self::with_transport(config, transport)
    }

    /// Create a client over any raw transport.
    pub fn with_transport(
        config: GithubConfig,
        transport: impl Request<HttpRequest, RawResponse> + 'static,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    fn fetch<P, T>(
        &self,
        to_request: impl Fn(P) -> HttpRequest + Send + Sync + 'static,
    ) -> FetchClient<P, T>
    where
        P: Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        FetchClient::new(move |params: P| {
            let transport = Arc::clone(&transport);
            let request = to_request(params);
            async move { transport.send(request).await }
        })
    }

    /// `GET /users/{username}` mapped to a [`UserProfile`], without recovery.
    pub fn get_user_query(&self) -> QueryFunction<String, UserProfileDto, UserProfile> {
        self.get_user_query_with(ResponseMapperSpec::new(user_profile_from_dto))
    }

    /// `GET /users/{username}` with a caller-supplied mapping.
    pub fn get_user_query_with<M>(
        &self,
        spec: ResponseMapperSpec<UserProfileDto, M>,
    ) -> QueryFunction<String, UserProfileDto, M> {
        let fetch = self.fetch(|username: String| HttpRequest::get(format!("/users/{}", username)));
        QueryFunction::new(fetch, spec)
    }

    /// `GET /search/users?q=` mapped to profiles, without recovery.
    pub fn search_users_query(&self) -> QueryFunction<String, SearchUsersDto, Vec<UserProfile>> {
        self.search_users_query_with(ResponseMapperSpec::new(user_profiles_from_search))
    }

    /// `GET /search/users?q=` with a caller-supplied mapping.
    pub fn search_users_query_with<M>(
        &self,
        spec: ResponseMapperSpec<SearchUsersDto, M>,
    ) -> QueryFunction<String, SearchUsersDto, M> {
        let per_page = *self.config.search_per_page();
        let fetch = self.fetch(move |query: String| {
            HttpRequest::get("/search/users")
                .with_query("q", query)
                .with_query("per_page", per_page)
        });
        QueryFunction::new(fetch, spec)
    }

    /// Look up one user.
    ///
    /// # Errors
    ///
    /// Returns the transport, decode or validation error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<UserProfile, ApplicationError> {
        info!("Fetching user profile");
        self.get_user_query()
            .call(QueryContext::new(GET_USER_KEY, username.to_string()))
            .await
    }

    /// Search users.
    ///
    /// # Errors
    ///
    /// Returns the transport, decode or validation error.
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>, ApplicationError> {
        info!("Searching users");
        self.search_users_query()
            .call(QueryContext::new(SEARCH_USERS_KEY, query.to_string()))
            .await
    }
}
