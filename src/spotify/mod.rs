//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the application uses.
//! All requests authenticate with a client-credentials token that is cached
//! in a [`TokenManager`] and refreshed shortly before it expires.
//!
//! ```text
//! Route handlers / CLI
//!          ↓
//! SpotifyClient
//!     ├── auth      (client-credentials token)
//!     ├── artists   (search, details, top tracks, trending, related)
//!     └── releases  (catalog pages for the discography aggregator)
//!          ↓
//! reqwest → Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials grant
//! - `GET /search` - artist search and genre search for trending artists
//! - `GET /artists/{id}` - artist details
//! - `GET /artists/{id}/top-tracks` - top tracks for a market
//! - `GET /artists/{id}/albums` - paginated albums and singles
//! - `GET /artists/{id}/related-artists` - recommendations
//!
//! ## Error Handling
//!
//! Every call returns [`SpotifyError`]. Requests are sent once, with the
//! timeout from [`Settings::request_timeout`]; there is no retry or rate
//! limit handling in this layer.

pub mod artists;
pub mod auth;
pub mod releases;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{config::Settings, error::SpotifyError, management::TokenManager};

pub use artists::Region;

/// Shared Spotify API client. Cheap to share behind an `Arc`.
pub struct SpotifyClient {
    http: Client,
    settings: Settings,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    /// Builds the HTTP client with the configured timeout. No request is sent.
    pub fn new(settings: &Settings) -> Result<Self, SpotifyError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            settings: settings.clone(),
            tokens: Mutex::new(TokenManager::default()),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn market(&self) -> &str {
        &self.settings.market
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_url, path)
    }

    async fn access_token(&self) -> Result<String, SpotifyError> {
        let mut tokens = self.tokens.lock().await;
        tokens.get_valid_token(&self.http, &self.settings).await
    }

    /// Sends an authenticated GET and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SpotifyError> {
        let token = self.access_token().await?;
        debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpotifyError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}
