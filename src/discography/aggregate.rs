use std::{cmp::Reverse, collections::HashSet, fmt};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    error::{FetchFailure, FetchFailureKind, SpotifyError},
    types::{Album, AlbumPage},
};

/// Upper bound on pages fetched for one artist. At 50 releases per page this
/// is far beyond any real catalog.
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Position in an artist's paginated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageCursor {
    /// The well-known first page (albums and singles, fixed page size and market).
    First,
    /// An opaque `next` link handed out by the previous page.
    Next(String),
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCursor::First => write!(f, "first page"),
            PageCursor::Next(url) => write!(f, "{url}"),
        }
    }
}

/// Source of catalog pages.
///
/// Implementations perform exactly one request per call and surface failures
/// synchronously; retrying is not their job.
#[async_trait]
pub trait CatalogPageFetcher: Send + Sync {
    async fn fetch_page(&self, artist_id: &str, cursor: &PageCursor)
    -> Result<AlbumPage, SpotifyError>;
}

/// Collects an artist's complete discography across all pages.
///
/// The result contains every release id once, ordered by normalized release
/// date with the newest first. Releases with the same date keep the order in
/// which they were first seen.
///
/// # Example
///
/// ```
/// let releases = DiscographyAggregator::new(&client)
///     .with_cancellation(token.child_token())
///     .aggregate_all("4NHQUGzhtTLFvgF5SZesLK")
///     .await?;
/// ```
pub struct DiscographyAggregator<'a, F: CatalogPageFetcher + ?Sized> {
    fetcher: &'a F,
    max_pages: usize,
    cancel: Option<CancellationToken>,
}

impl<'a, F: CatalogPageFetcher + ?Sized> DiscographyAggregator<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            max_pages: DEFAULT_MAX_PAGES,
            cancel: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Checked before every page request; a cancelled token aborts the run.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Fetches, deduplicates and orders the whole catalog of `artist_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchFailure`] naming the failing cursor when a page
    /// request fails, when a `next` cursor repeats, when more than
    /// `max_pages` pages are offered, or when the run is cancelled. Nothing
    /// fetched so far is returned in that case.
    pub async fn aggregate_all(&self, artist_id: &str) -> Result<Vec<Album>, FetchFailure> {
        let mut releases: Vec<Album> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut seen_cursors: HashSet<PageCursor> = HashSet::new();
        let mut cursor = Some(PageCursor::First);
        let mut pages = 0;

        while let Some(current) = cursor.take() {
            if self.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
                return Err(FetchFailure::new(artist_id, &current, FetchFailureKind::Cancelled));
            }
            if pages == self.max_pages {
                return Err(FetchFailure::new(
                    artist_id,
                    &current,
                    FetchFailureKind::PaginationLimit(self.max_pages),
                ));
            }
            if !seen_cursors.insert(current.clone()) {
                return Err(FetchFailure::new(artist_id, &current, FetchFailureKind::CursorCycle));
            }

            let page = self
                .fetcher
                .fetch_page(artist_id, &current)
                .await
                .map_err(|e| FetchFailure::new(artist_id, &current, e))?;
            pages += 1;

            let offered = page.items.len();
            releases.extend(
                page.items
                    .into_iter()
                    .filter(|album| seen_ids.insert(album.id.clone())),
            );
            debug!(artist_id, page = pages, offered, total = releases.len(), "fetched catalog page");

            cursor = page.next.map(PageCursor::Next);
        }

        // stable: equal dates keep first-seen order
        releases.sort_by_cached_key(|album| Reverse(album.normalized_release_date()));

        info!(artist_id, pages, releases = releases.len(), "aggregated discography");
        Ok(releases)
    }
}
