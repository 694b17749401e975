//! GitHub user queries built on the Canned data-fetching pipeline.
//!
//! [`GithubClient`] hands out [`QueryFunction`](canned_query::QueryFunction)s
//! whose request step is a [`FetchClient`](canned_http::FetchClient) over the
//! configured transport, and whose mapping validates the DTOs into
//! [`UserProfile`]s.

#![forbid(unsafe_code)]

mod client;
mod config;
mod dto;
mod mapper;
mod model;

pub use client::{GET_USER_KEY, GithubClient, SEARCH_USERS_KEY};
pub use config::{CannedConfig, GithubConfig};
pub use dto::{SearchUsersDto, UserProfileDto};
pub use mapper::{MISSING_FIELD_ERROR, user_profile_from_dto, user_profiles_from_search};
pub use model::UserProfile;
