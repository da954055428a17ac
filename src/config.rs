//! Configuration management for Live Radio.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Both the command-line client and the backend
//! service read their settings from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::error::{Result, StorageError};

/// Name of the application directory inside the platform data directory.
pub const APP_DIR: &str = "liveradio";

/// User agent sent with every request to the backend service.
pub const USER_AGENT: &str = "Live Radio";

pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:7878";
const DEFAULT_API_URL: &str = "http://127.0.0.1:7878";
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Returns the application directory inside the platform local data directory.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/liveradio`
/// - macOS: `~/Library/Application Support/liveradio`
/// - Windows: `%LOCALAPPDATA%/liveradio`
///
/// # Errors
///
/// Fails with [`StorageError::Config`] when the platform has no local data
/// directory (typically `HOME` is unset).
pub fn app_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR))
        .ok_or_else(|| {
            StorageError::Config(
                "Could not determine local data directory. HOME may not be set.".to_string(),
            )
        })
}

/// Loads environment variables from a `.env` file in the application directory.
///
/// Creates the application directory if it doesn't exist. A missing `.env`
/// file is not an error; variables already present in the environment win
/// over values from the file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
///
/// # Example
///
/// ```
/// use liveradio::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> std::result::Result<(), String> {
    let dir = app_data_dir().map_err(|e| e.to_string())?;
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the address the backend service binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:7878`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the base URL of the backend service used by the remote backend.
///
/// Reads `LIVERADIO_API_URL`, defaulting to `http://127.0.0.1:7878`. A trailing
/// slash is stripped.
pub fn api_url() -> String {
    env::var("LIVERADIO_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the access key the service accepts at sign-in.
///
/// Reads `LIVERADIO_ACCESS_KEY`. When unset the service refuses every
/// sign-in attempt.
pub fn access_key() -> Option<String> {
    env::var("LIVERADIO_ACCESS_KEY")
        .ok()
        .filter(|k| !k.is_empty())
}

/// Returns the directory the service keeps user collections and sessions in.
///
/// Reads `LIVERADIO_SERVER_DATA_DIR`, defaulting to `<app data dir>/server`.
pub fn server_data_dir() -> Result<PathBuf> {
    match env::var("LIVERADIO_SERVER_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Ok(app_data_dir()?.join("server")),
    }
}

/// Returns how long an issued session stays valid, in seconds.
///
/// Reads `LIVERADIO_SESSION_TTL`, defaulting to one week. Unparsable values
/// fall back to the default.
pub fn session_ttl() -> u64 {
    env::var("LIVERADIO_SESSION_TTL")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_SECS)
}
