//! Trending-artist selection and recommendation dedupe.

use std::{cmp::Reverse, collections::HashSet};

use crate::types::Artist;

pub const DEFAULT_MIN_FOLLOWERS: u64 = 5_000_000;
pub const DEFAULT_TRENDING_LIMIT: usize = 10;
pub const DEFAULT_RECOMMENDATIONS_PER_ARTIST: usize = 5;

/// Keeps artists with at least `min_followers`, most followed first, at most `limit`.
///
/// Artists with equal follower counts keep their search order.
pub fn select_trending(mut artists: Vec<Artist>, min_followers: u64, limit: usize) -> Vec<Artist> {
    artists.retain(|a| a.followers.total >= min_followers);
    artists.sort_by_key(|a| Reverse(a.followers.total));
    artists.truncate(limit);
    artists
}

/// Removes later occurrences of an artist id, keeping the first one.
pub fn dedupe_artists(mut artists: Vec<Artist>) -> Vec<Artist> {
    let mut seen_ids = HashSet::new();
    artists.retain(|artist| seen_ids.insert(artist.id.clone()));
    artists
}
