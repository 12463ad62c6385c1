//! # CLI Module
//!
//! User-facing command implementations. Each function here wires one
//! subcommand to the API layer: it loads credentials, constructs the
//! client, shows spinner feedback while requests are in flight, and
//! renders the result as a terminal table. All functions return
//! `Res<()>`; the dispatcher in `main` is the only place that turns an
//! error into an exit code.
//!
//! - [`auth`] - OAuth device-code authorization, persists credentials
//! - [`history`] - one page of the watch history
//! - [`search`] - movie/show search
//! - [`whoami`] - profile of the authenticated user

mod auth;
mod history;
mod search;
mod whoami;

pub use auth::auth;
pub use history::history;
pub use search::search;
pub use whoami::whoami;
