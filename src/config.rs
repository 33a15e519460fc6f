//! Configuration management for the Spotify Discography Explorer.
//!
//! Configuration values come from environment variables and an optional
//! `.env` file. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::{Res, discography::DEFAULT_MAX_PAGES, error::ConfigError};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `sporlweb/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/sporlweb/.env`
/// - macOS: `~/Library/Application Support/sporlweb/.env`
/// - Windows: `%LOCALAPPDATA%/sporlweb/.env`
///
/// A missing file is not an error, since every value can also come from the
/// process environment. Variables already set in the environment win.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file exists but cannot be
/// parsed.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlweb/.env");
    path
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `SPOTIFY_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_CLIENT_SECRET`
    pub client_secret: String,
    /// `SPOTIFY_API_URL`, e.g. `https://api.spotify.com/v1`
    pub api_url: String,
    /// `SPOTIFY_API_TOKEN_URL`, e.g. `https://accounts.spotify.com/api/token`
    pub token_url: String,
    /// `SPOTIFY_MARKET`, the country filter for catalog and top-track requests
    pub market: String,
    /// `SERVER_ADDRESS`, e.g. `127.0.0.1:5000`
    pub server_addr: SocketAddr,
    /// `SPORLWEB_REQUEST_TIMEOUT_SECS`
    pub request_timeout: Duration,
    /// `SPORLWEB_MAX_PAGES`, cap on catalog pages per artist
    pub max_pages: usize,
}

impl Settings {
    /// Reads all settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the Spotify credentials are not
    /// set and [`ConfigError::Invalid`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            market: optional("SPOTIFY_MARKET", DEFAULT_MARKET),
            server_addr: parsed("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)?,
            request_timeout: Duration::from_secs(parsed(
                "SPORLWEB_REQUEST_TIMEOUT_SECS",
                &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )?),
            max_pages: parsed("SPORLWEB_MAX_PAGES", &DEFAULT_MAX_PAGES.to_string())?,
        })
    }

    /// Settings pointing at a custom API host, used by tests and local fakes.
    pub fn for_api(api_url: &str, token_url: &str) -> Self {
        Self {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url: token_url.to_string(),
            market: DEFAULT_MARKET.to_string(),
            server_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(key: &'static str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = optional(key, default);
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
