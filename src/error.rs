use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by API operations, the auth flow, and credential storage.
///
/// Nothing in the crate retries or swallows these; they bubble up unchanged
/// to the dispatcher in `main`, which prints the message and exits nonzero.
#[derive(Debug, Error)]
pub enum TraktError {
    /// No credential file exists yet
    #[error("no credentials found at {}, please run `trakt auth` first", .0.display())]
    ConfigMissing(PathBuf),

    /// The credential file exists but is not valid YAML
    #[error("failed to read credentials from {}, please run `trakt auth` again: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing the credential file failed
    #[error("failed to write credentials to {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Credentials are present but carry no access token
    #[error("no access token stored, please run `trakt auth` first")]
    NotAuthenticated,

    /// Transport-level failure (connect, timeout, TLS, reading the body)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{context} failed: {status}")]
    Status {
        context: &'static str,
        status: reqwest::StatusCode,
    },

    /// The API answered 200 but the body was not the expected JSON
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The device code expired before the user approved it
    #[error("authorization timed out, the device code has expired")]
    AuthTimeout,

    /// The user interrupted the poll loop (Ctrl-C)
    #[error("authorization cancelled")]
    AuthCancelled,
}
