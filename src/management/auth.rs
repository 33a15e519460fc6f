use chrono::Utc;
use reqwest::Client;

use crate::{config::Settings, error::SpotifyError, spotify, types::Token};

/// Seconds before expiry at which a token is considered stale.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Holds the client-credentials token for the lifetime of the process.
///
/// The token is requested on first use and again whenever it is about to
/// expire. It is never written to disk.
#[derive(Debug, Default)]
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(token: Option<Token>) -> Self {
        TokenManager { token }
    }

    pub async fn get_valid_token(
        &mut self,
        http: &Client,
        settings: &Settings,
    ) -> Result<String, SpotifyError> {
        match &self.token {
            Some(token) if !Self::is_expired(token) => Ok(token.access_token.clone()),
            _ => {
                let token = spotify::auth::request_token(http, settings).await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }

    pub fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_BUFFER_SECS >= token.obtained_at + token.expires_in
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
