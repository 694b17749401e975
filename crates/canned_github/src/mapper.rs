//! DTO to model mapping.

use crate::{SearchUsersDto, UserProfile, UserProfileDto};
use canned_core::{Outcome, failure, success};
use canned_error::ApplicationError;
use tracing::debug;

/// Error name used when a required DTO field is missing.
pub const MISSING_FIELD_ERROR: &str = "TypeError";

#[track_caller]
fn required(value: Option<&String>, key: &str) -> Result<String, ApplicationError> {
    value.cloned().ok_or_else(|| {
        ApplicationError::custom(
            MISSING_FIELD_ERROR,
            format!("value for key {} is not defined in dto", key),
        )
    })
}

fn profile(dto: &UserProfileDto) -> Result<UserProfile, ApplicationError> {
    let login = required(dto.login.as_ref(), "login")?;
    let avatar_url = required(dto.avatar_url.as_ref(), "avatar_url")?;
    let html_url = required(dto.html_url.as_ref(), "html_url")?;
    Ok(UserProfile::new(login, avatar_url, html_url, dto.name.clone()))
}

/// Map a user DTO to a [`UserProfile`].
///
/// `login`, `avatar_url` and `html_url` are required; `name` is carried over
/// as is.
///
/// # Examples
///
/// ```
/// use canned_github::{user_profile_from_dto, UserProfileDto};
///
/// let dto = UserProfileDto {
///     login: Some("octocat".into()),
///     avatar_url: Some("https://avatars.githubusercontent.com/u/583231".into()),
///     html_url: Some("https://github.com/octocat".into()),
///     ..Default::default()
/// };
/// let profile = user_profile_from_dto(dto).unwrap_or_propagate().unwrap();
/// assert_eq!(profile.login(), "octocat");
///
/// let missing = user_profile_from_dto(UserProfileDto::default());
/// assert!(missing.is_failure());
/// ```
pub fn user_profile_from_dto(dto: UserProfileDto) -> Outcome<UserProfile, ApplicationError> {
    match profile(&dto) {
        Ok(model) => success(model),
        Err(error) => {
            debug!(message = %error.message(), "User DTO failed validation");
            failure(error)
        }
    }
}

/// Map every search hit to a [`UserProfile`].
///
/// The first invalid hit fails the whole page.
pub fn user_profiles_from_search(
    dto: SearchUsersDto,
) -> Outcome<Vec<UserProfile>, ApplicationError> {
    dto.items
        .iter()
        .map(profile)
        .collect::<Result<Vec<_>, _>>()
        .into()
}
