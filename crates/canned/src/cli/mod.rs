//! Command-line interface module.

mod commands;
mod errors;
mod search;
mod user;

pub use commands::{Cli, Commands};
pub use errors::drain_error_queue;
pub use search::search_users;
pub use user::show_user;
