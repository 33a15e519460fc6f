use std::{fmt, str::FromStr};

use clap::ValueEnum;
use tokio_util::sync::CancellationToken;

use crate::{
    discography::{DiscographyAggregator, classify},
    error::{OverviewError, SpotifyError},
    trending,
    types::{
        Artist, ArtistOverview, ArtistSearchResponse, RelatedArtistsResponse, TopTracksResponse,
        Track,
    },
};

use super::SpotifyClient;

/// Number of top tracks shown for an artist.
pub const TOP_TRACKS_SHOWN: usize = 5;
/// Candidates fetched for the trending heuristic.
const TRENDING_CANDIDATES: &str = "50";

/// Region used to approximate trending artists through a genre search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Region {
    #[default]
    International,
    Us,
    Uk,
    India,
}

impl Region {
    /// The search query standing in for "popular in this region".
    pub fn genre_query(&self) -> &'static str {
        match self {
            Region::International => "genre:pop",
            Region::Us => "genre:hip-hop",
            Region::Uk => "genre:rock",
            Region::India => "genre:bollywood",
        }
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    /// Unknown regions fall back to [`Region::International`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "us" => Region::Us,
            "uk" => Region::Uk,
            "india" => Region::India,
            _ => Region::International,
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::International => "international",
            Region::Us => "us",
            Region::Uk => "uk",
            Region::India => "india",
        };
        write!(f, "{name}")
    }
}

impl SpotifyClient {
    /// Returns the best match for `name`, or `None` when nothing matches.
    pub async fn search_artist(&self, name: &str) -> Result<Option<Artist>, SpotifyError> {
        let url = self.api_url("/search");
        let res: ArtistSearchResponse = self
            .get_json(&url, &[("q", name), ("type", "artist"), ("limit", "1")])
            .await?;

        Ok(res.artists.items.into_iter().next())
    }

    pub async fn artist_details(&self, artist_id: &str) -> Result<Artist, SpotifyError> {
        let url = self.api_url(&format!("/artists/{artist_id}"));
        self.get_json(&url, &[]).await
    }

    pub async fn top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, SpotifyError> {
        let url = self.api_url(&format!("/artists/{artist_id}/top-tracks"));
        let res: TopTracksResponse = self.get_json(&url, &[("market", self.market())]).await?;
        Ok(res.tracks)
    }

    pub async fn related_artists(&self, artist_id: &str) -> Result<Vec<Artist>, SpotifyError> {
        let url = self.api_url(&format!("/artists/{artist_id}/related-artists"));
        let res: RelatedArtistsResponse = self.get_json(&url, &[]).await?;
        Ok(res.artists)
    }

    /// Artists with at least `min_followers` from the region's genre search,
    /// most followed first.
    pub async fn trending_artists(
        &self,
        region: Region,
        min_followers: u64,
        limit: usize,
    ) -> Result<Vec<Artist>, SpotifyError> {
        let url = self.api_url("/search");
        let res: ArtistSearchResponse = self
            .get_json(
                &url,
                &[
                    ("q", region.genre_query()),
                    ("type", "artist"),
                    ("limit", TRENDING_CANDIDATES),
                ],
            )
            .await?;

        Ok(trending::select_trending(
            res.artists.items,
            min_followers,
            limit,
        ))
    }

    /// Related artists of every seed, `limit_per_artist` each, without duplicates.
    pub async fn recommendations(
        &self,
        artist_ids: &[String],
        limit_per_artist: usize,
    ) -> Result<Vec<Artist>, SpotifyError> {
        let mut recommended = Vec::new();
        for artist_id in artist_ids {
            let related = self.related_artists(artist_id).await?;
            recommended.extend(related.into_iter().take(limit_per_artist));
        }

        Ok(trending::dedupe_artists(recommended))
    }

    /// Details, top tracks and the classified discography of one artist.
    pub async fn artist_overview(
        &self,
        artist_id: &str,
        cancel: CancellationToken,
    ) -> Result<ArtistOverview, OverviewError> {
        let artist = self.artist_details(artist_id).await?;
        let mut top_tracks = self.top_tracks(artist_id).await?;
        top_tracks.truncate(TOP_TRACKS_SHOWN);

        let releases = DiscographyAggregator::new(self)
            .with_max_pages(self.settings().max_pages)
            .with_cancellation(cancel)
            .aggregate_all(artist_id)
            .await?;
        let split = classify(releases);

        Ok(ArtistOverview {
            artist,
            top_tracks,
            albums: split.albums,
            singles: split.singles,
        })
    }
}
