//! Live Radio station storage library
//!
//! This library keeps favorite and recent internet radio stations either on
//! this device or on a Live Radio backend service, depending on whether the
//! user is signed in. It also contains the backend service itself and the
//! pieces the command-line client is built from.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the backend service
//! - `auth` - Authentication probe consulted on every storage call
//! - `cli` - Command-line interface implementations
//! - `client` - Shared HTTP client for the backend service
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by all storage backends
//! - `management` - JSON-file managers for collections and sessions
//! - `server` - Backend service state and router
//! - `storage` - Storage facade with its local and remote backends
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use liveradio::{auth::SessionProbe, client::ApiClient, config, management::SessionManager};
//! use liveradio::storage::{AppStorage, LocalStorage, RemoteStorage, LOCAL_STORAGE_NAMESPACE};
//!
//! #[tokio::main]
//! async fn main() -> liveradio::Res<()> {
//!     config::load_env().await?;
//!     let sessions = SessionManager::new()?;
//!     let storage = AppStorage::new(
//!         Arc::new(LocalStorage::new(LOCAL_STORAGE_NAMESPACE)?),
//!         Arc::new(RemoteStorage::new(ApiClient::new(config::api_url(), sessions.clone())?)),
//!         Arc::new(SessionProbe::new(sessions)),
//!     );
//!     let favorites = storage.get_favorite_stations().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod storage;
pub mod types;
pub mod utils;

/// Result for binary-level plumbing (server start-up, configuration) where
/// any error is only reported, never matched on.
///
/// Storage operations use [`error::Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} favorites", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completed action prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a fatal error prefixed with a red `!` and exits with status 1.
///
/// Only for the command-line front end; library code returns
/// [`error::StorageError`] instead.
///
/// ```
/// error!("Cannot open local storage. Err: {}", err);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a recoverable problem prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
