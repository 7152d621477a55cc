//! Wire protocol: challenge-response authentication and command decoding.

pub mod auth;
pub mod command;

pub use auth::{client_response, random_secret, AuthError, Challenge};
pub use command::{decode_command, normalize_line_endings, Command, CommandError};
