//! # Discography Module
//!
//! Turns an artist's paginated catalog into one complete, deduplicated and
//! recency-ordered list of releases, and splits that list into albums and
//! singles.
//!
//! ```text
//! CatalogPageFetcher (Spotify /artists/{id}/albums + next cursors)
//!          ↓
//! DiscographyAggregator (dedupe by id, bounded pagination)
//!          ↓
//! normalize_release_date (sort key, newest first)
//!          ↓
//! classify (albums / singles)
//! ```
//!
//! Nothing here is cached between calls. Every aggregation owns its seen-id
//! set and result list, so concurrent requests never share state.

mod aggregate;
mod classify;
mod date;

pub use aggregate::{CatalogPageFetcher, DEFAULT_MAX_PAGES, DiscographyAggregator, PageCursor};
pub use classify::{Discography, classify, classify_refs};
pub use date::{SENTINEL_MIN_DATE, normalize_release_date};
