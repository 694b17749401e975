//! `canned search` handler.

use canned::{
    CannedQuery, CollectionQuery, ErrorHandlerState, GithubClient, QueryContext, ResponseMapperSpec,
    SEARCH_USERS_KEY, success, user_profiles_from_search,
};
use tracing::{instrument, warn};

/// Search users and print one line per hit.
#[instrument(skip(client, errors))]
pub async fn search_users(
    client: &GithubClient,
    errors: &ErrorHandlerState,
    query: &str,
    fallback: bool,
) {
    let mut spec = ResponseMapperSpec::new(user_profiles_from_search);
    if fallback {
        spec = spec.with_map_error(|error| {
            warn!(error = %error, "Falling back to an empty result");
            success(Vec::new())
        });
    }

    let search = CollectionQuery::new(CannedQuery::new(
        client.search_users_query_with(spec),
        errors.clone(),
    ));

    let (users, _) = search
        .run(QueryContext::new(SEARCH_USERS_KEY, query.to_string()))
        .await;

    if users.is_empty() {
        println!("No users found for {:?}", query);
    }
    for user in &users {
        println!("{}", user);
    }
}
