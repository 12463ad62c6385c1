//! Trakt.tv CLI Library
//!
//! This library provides functionality for interacting with the Trakt.tv API
//! from the command line. It includes modules for the API client, the OAuth
//! device-code authorization flow, credential management, and the CLI command
//! implementations.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Credential file management
//! - `error` - Error types shared across the crate
//! - `trakt` - Trakt.tv API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use traktcli::{config, trakt};
//!
//! #[tokio::main]
//! async fn main() -> traktcli::Res<()> {
//!     let creds = config::CredentialsManager::load().await?;
//!     let client = trakt::TraktClient::new(creds.credentials().clone())?;
//!     // Use API operations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod trakt;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate returns this alias so errors
/// propagate unchanged up to the single top-level handler in `main`.
pub type Res<T> = std::result::Result<T, error::TraktError>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the top-level command dispatcher should invoke this macro; everything
/// below it propagates `TraktError` instead of terminating the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice without the program terminating.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
