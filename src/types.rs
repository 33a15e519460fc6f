use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

use crate::discography::normalize_release_date;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistsContainer {
    #[serde(default)]
    pub items: Vec<Artist>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Granularity of an upstream release date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    #[default]
    Day,
    Month,
    Year,
    /// Any precision the API may add later; dates are then taken as given.
    #[serde(other)]
    Unknown,
}

/// One release as returned by `/artists/{id}/albums`.
///
/// Only `id`, the release date pair and the group/type tags are interpreted.
/// Every other upstream field is kept verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_release_date", deserialize_with = "lenient_release_date")]
    pub release_date: String,
    #[serde(default, deserialize_with = "lenient_precision")]
    pub release_date_precision: ReleaseDatePrecision,
    pub album_group: Option<String>,
    pub album_type: Option<String>,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_release_date() -> String {
    "0000-00-00".to_string()
}

/// `null` or a non-string date decodes as the unparseable default.
fn lenient_release_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(date) => date,
        _ => default_release_date(),
    })
}

/// `null` or a non-string precision decodes as [`ReleaseDatePrecision::Unknown`].
fn lenient_precision<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ReleaseDatePrecision, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::String(_) => {
            serde_json::from_value(value).unwrap_or(ReleaseDatePrecision::Unknown)
        }
        _ => ReleaseDatePrecision::Unknown,
    })
}

impl Album {
    /// The classification tag: `album_group` when present, `album_type` otherwise.
    pub fn group_or_type(&self) -> Option<&str> {
        self.album_group
            .as_deref()
            .filter(|g| !g.is_empty())
            .or(self.album_type.as_deref())
    }

    pub fn normalized_release_date(&self) -> NaiveDate {
        normalize_release_date(&self.release_date, self.release_date_precision)
    }

    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

/// One page of an artist's catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub items: Vec<Album>,
    pub next: Option<String>,
}

/// Everything shown on the index page for one artist.
#[derive(Debug, Clone)]
pub struct ArtistOverview {
    pub artist: Artist,
    pub top_tracks: Vec<Track>,
    pub albums: Vec<Album>,
    pub singles: Vec<Album>,
}

#[derive(Tabled)]
pub struct ReleaseTableRow {
    pub date: String,
    pub kind: String,
    pub name: String,
    pub artists: String,
    pub tracks: u32,
}

impl From<&Album> for ReleaseTableRow {
    fn from(album: &Album) -> Self {
        Self {
            date: album.release_date.clone(),
            kind: album.group_or_type().unwrap_or_default().to_string(),
            name: album.name.clone(),
            artists: album.artist_names(),
            tracks: album.total_tracks,
        }
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub followers: u64,
    pub popularity: u32,
    pub genres: String,
}

impl From<&Artist> for ArtistTableRow {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            followers: artist.followers.total,
            popularity: artist.popularity,
            genres: artist
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub popularity: u32,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        Self {
            name: track.name.clone(),
            popularity: track.popularity,
        }
    }
}
