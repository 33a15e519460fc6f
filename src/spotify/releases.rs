use async_trait::async_trait;

use crate::{
    discography::{CatalogPageFetcher, PageCursor},
    error::SpotifyError,
    types::AlbumPage,
};

use super::SpotifyClient;

/// Release groups requested for a discography.
pub const INCLUDE_GROUPS: &str = "album,single";
/// Largest page size `/artists/{id}/albums` accepts.
pub const PAGE_LIMIT: &str = "50";

#[async_trait]
impl CatalogPageFetcher for SpotifyClient {
    /// Fetches one page of `/artists/{id}/albums`.
    ///
    /// The first page is built from the artist id with fixed filters; later
    /// pages use the `next` link verbatim since it already carries offset,
    /// limit and filters.
    async fn fetch_page(
        &self,
        artist_id: &str,
        cursor: &PageCursor,
    ) -> Result<AlbumPage, SpotifyError> {
        match cursor {
            PageCursor::First => {
                let url = self.api_url(&format!("/artists/{artist_id}/albums"));
                self.get_json(
                    &url,
                    &[
                        ("include_groups", INCLUDE_GROUPS),
                        ("limit", PAGE_LIMIT),
                        ("market", self.market()),
                    ],
                )
                .await
            }
            PageCursor::Next(url) => self.get_json(url, &[]).await,
        }
    }
}
