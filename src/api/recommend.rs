use axum::{extract::State, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;
use tracing::warn;

use crate::{
    server::AppState,
    views::{self, RecommendPage},
};

use super::CurrentUser;

/// Related artists taken per seed on the recommendation page.
pub const RECOMMEND_PAGE_PER_ARTIST: usize = 10;

/// Repeated `seed_artist` fields, one per selected artist.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub seed_artist: Vec<String>,
}

pub async fn recommend_page(CurrentUser(user): CurrentUser) -> Html<String> {
    views::recommend(&RecommendPage {
        user,
        ..RecommendPage::default()
    })
}

pub async fn recommend(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<RecommendForm>,
) -> Html<String> {
    let seeds: Vec<String> = form
        .seed_artist
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    let mut page = RecommendPage {
        user,
        ..RecommendPage::default()
    };

    if !seeds.is_empty() {
        match state
            .spotify
            .recommendations(&seeds, RECOMMEND_PAGE_PER_ARTIST)
            .await
        {
            Ok(recommendations) => page.recommendations = recommendations,
            Err(e) => {
                warn!(error = %e, "recommendations unavailable");
                page.messages.push("Could not load recommendations.".to_string());
            }
        }
    }
    page.seeds = seeds;

    views::recommend(&page)
}
