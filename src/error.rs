//! Error types shared across the crate.

use thiserror::Error;

use crate::discography::PageCursor;

/// Errors raised by the Spotify Web API client.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Network failure, timeout or an undecodable response body.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Spotify API returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The client-credentials token could not be obtained.
    #[error("token request failed: {0}")]
    Token(String),
}

impl SpotifyError {
    /// Returns the upstream status code if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Token(_) => None,
        }
    }
}

/// Why an aggregation run was aborted.
#[derive(Debug, Error)]
pub enum FetchFailureKind {
    /// The page request itself failed.
    #[error(transparent)]
    Upstream(#[from] SpotifyError),

    /// The upstream kept handing out `next` cursors past the page cap.
    #[error("pagination limit of {0} pages exceeded")]
    PaginationLimit(usize),

    /// A `next` cursor pointed back at a page that was already fetched.
    #[error("pagination cursor was already visited")]
    CursorCycle,

    /// The surrounding request was cancelled between two page fetches.
    #[error("aggregation was cancelled")]
    Cancelled,
}

/// A discography could not be fetched completely.
///
/// Carries the artist and the cursor of the page that failed. Partial
/// results are never returned alongside this error.
#[derive(Debug, Error)]
#[error("could not fetch discography of artist {artist_id} at {cursor}: {kind}")]
pub struct FetchFailure {
    pub artist_id: String,
    pub cursor: PageCursor,
    #[source]
    pub kind: FetchFailureKind,
}

impl FetchFailure {
    pub fn new(artist_id: &str, cursor: &PageCursor, kind: impl Into<FetchFailureKind>) -> Self {
        Self {
            artist_id: artist_id.to_string(),
            cursor: cursor.clone(),
            kind: kind.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, FetchFailureKind::Cancelled)
    }
}

/// Failure while assembling an [`crate::types::ArtistOverview`].
#[derive(Debug, Error)]
pub enum OverviewError {
    #[error(transparent)]
    Lookup(#[from] SpotifyError),

    #[error(transparent)]
    Discography(#[from] FetchFailure),
}

/// Errors raised by a [`crate::management::UserStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("user {0} already exists")]
    AlreadyExists(String),

    #[error("username and password must not be empty")]
    InvalidInput,
}

/// Missing or malformed configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}
