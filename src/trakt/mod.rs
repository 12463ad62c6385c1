//! Trakt.tv API client.
//!
//! `client` holds the transport layer: it builds authenticated or anonymous
//! requests against the fixed API base URL and hands back raw responses.
//! The sibling modules implement the typed operations on top of it: the
//! device authorization flow (`auth`), watch history (`history`), user
//! settings (`users`) and search (`search`). Status-code checks and JSON
//! decoding happen in the operations, never in the transport.

pub mod auth;
mod client;
mod history;
mod search;
mod users;

pub use client::{RequestParams, TRAKT_API_URL, TraktClient, decode_json};
pub use history::get_user_history;
pub use search::search;
pub use users::get_user_settings;
