use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::warn;

use crate::{
    error::OverviewError,
    server::AppState,
    spotify::Region,
    trending::{DEFAULT_MIN_FOLLOWERS, DEFAULT_RECOMMENDATIONS_PER_ARTIST, DEFAULT_TRENDING_LIMIT},
    views::{self, IndexPage},
};

use super::CurrentUser;

pub const DISCOGRAPHY_UNAVAILABLE: &str = "Could not load discography, try again.";
pub const SPOTIFY_UNAVAILABLE: &str = "Could not reach Spotify, try again.";

/// Fields posted by the search form on `/index`.
///
/// Empty inputs are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct IndexForm {
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub artist1_id: Option<String>,
    #[serde(default)]
    pub artist2_id: Option<String>,
    #[serde(default)]
    pub artist3_id: Option<String>,
}

impl IndexForm {
    pub fn artist_name(&self) -> Option<&str> {
        non_empty(&self.artist_name)
    }

    /// Extra recommendation seeds, in form order.
    pub fn seed_ids(&self) -> Vec<String> {
        [&self.artist1_id, &self.artist2_id, &self.artist3_id]
            .into_iter()
            .filter_map(non_empty)
            .map(str::to_string)
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn index_page(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> Html<String> {
    let page = build_index(&state, user, None).await;
    views::index(&page)
}

pub async fn index_search(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<IndexForm>,
) -> Html<String> {
    let page = build_index(&state, user, Some(form)).await;
    views::index(&page)
}

async fn build_index(state: &AppState, user: String, form: Option<IndexForm>) -> IndexPage {
    let mut page = IndexPage {
        user,
        ..IndexPage::default()
    };
    let mut seeds: Vec<String> = Vec::new();

    if let Some(form) = form {
        if let Some(name) = form.artist_name() {
            match state.spotify.search_artist(name).await {
                Ok(Some(artist)) => {
                    seeds.push(artist.id.clone());
                    match state
                        .spotify
                        .artist_overview(&artist.id, state.shutdown.child_token())
                        .await
                    {
                        Ok(overview) => page.overview = Some(overview),
                        Err(OverviewError::Discography(e)) => {
                            warn!(error = %e, "discography unavailable");
                            page.messages.push(DISCOGRAPHY_UNAVAILABLE.to_string());
                        }
                        Err(OverviewError::Lookup(e)) => {
                            warn!(error = %e, artist_id = %artist.id, "artist lookup failed");
                            page.messages.push(SPOTIFY_UNAVAILABLE.to_string());
                        }
                    }
                }
                Ok(None) => page.messages.push(format!("No artist found for \"{name}\".")),
                Err(e) => {
                    warn!(error = %e, "artist search failed");
                    page.messages.push(SPOTIFY_UNAVAILABLE.to_string());
                }
            }
        }
        seeds.extend(form.seed_ids());
    }

    match state
        .spotify
        .trending_artists(
            Region::International,
            DEFAULT_MIN_FOLLOWERS,
            DEFAULT_TRENDING_LIMIT,
        )
        .await
    {
        Ok(trending) => page.trending = trending,
        Err(e) => {
            warn!(error = %e, "trending artists unavailable");
            page.messages.push("Could not load trending artists.".to_string());
        }
    }

    if !seeds.is_empty() {
        match state
            .spotify
            .recommendations(&seeds, DEFAULT_RECOMMENDATIONS_PER_ARTIST)
            .await
        {
            Ok(recommendations) => page.recommendations = recommendations,
            Err(e) => {
                warn!(error = %e, "recommendations unavailable");
                page.messages.push("Could not load recommendations.".to_string());
            }
        }
    }

    page
}
