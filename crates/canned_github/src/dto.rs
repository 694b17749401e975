//! Wire shapes returned by the GitHub REST API.
//!
//! Every field is optional. The API omits or nulls fields depending on the
//! endpoint and the caller's scopes, and validation belongs to the mappers.

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users/{username}` and inside search results.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserProfileDto {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub site_admin: Option<bool>,
    pub score: Option<f64>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Response of `GET /search/users`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchUsersDto {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<UserProfileDto>,
}
