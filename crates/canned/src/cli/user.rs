//! `canned user` handler.

use canned::{
    CannedQuery, ErrorHandlerState, GET_USER_KEY, GithubClient, QueryContext, ResponseMapperSpec,
    UserProfileDto, success, user_profile_from_dto,
};
use tracing::{info, instrument, warn};

/// Fetch and print one profile.
///
/// Unrecovered errors go to `errors`; with `fallback` the failure is logged
/// and replaced by a "not available" line.
#[instrument(skip(client, errors))]
pub async fn show_user(
    client: &GithubClient,
    errors: &ErrorHandlerState,
    username: &str,
    fallback: bool,
) {
    let mut spec =
        ResponseMapperSpec::new(|dto: UserProfileDto| user_profile_from_dto(dto).map(Some));
    if fallback {
        spec = spec.with_map_error(|error| {
            warn!(error = %error, "Falling back to an empty profile");
            success(None)
        });
    }

    let query = CannedQuery::new(client.get_user_query_with(spec), errors.clone());

    match query
        .run(QueryContext::new(GET_USER_KEY, username.to_string()))
        .await
    {
        Ok(Some(profile)) => {
            info!(login = %profile.login(), "Fetched profile");
            println!("{}", profile);
            println!("  avatar: {}", profile.avatar_url());
        }
        Ok(None) => println!("Profile for {} is not available", username),
        Err(_) => {}
    }
}
