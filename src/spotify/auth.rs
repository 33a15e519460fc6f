use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Settings,
    error::SpotifyError,
    types::{Token, TokenResponse},
};

/// Builds the `Authorization: Basic` value for the client-credentials grant.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Requests an app-only access token with the client-credentials grant.
///
/// The token grants access to public catalog data only, which is all the
/// application needs. It is not tied to the signed-in user.
///
/// # Errors
///
/// Network failures surface as [`SpotifyError::Request`]; a rejected grant
/// (wrong id or secret) surfaces as [`SpotifyError::Token`] with the status
/// and response body.
pub async fn request_token(http: &Client, settings: &Settings) -> Result<Token, SpotifyError> {
    let response = http
        .post(&settings.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_auth_header(&settings.client_id, &settings.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::Token(format!("{status}: {body}")));
    }

    let json = response.json::<TokenResponse>().await?;
    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
