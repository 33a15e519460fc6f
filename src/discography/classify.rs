use crate::types::Album;

/// An aggregated catalog split by release group.
#[derive(Debug, Clone)]
pub struct Discography<T = Album> {
    pub albums: Vec<T>,
    pub singles: Vec<T>,
}

impl<T> Default for Discography<T> {
    fn default() -> Self {
        Self {
            albums: Vec::new(),
            singles: Vec::new(),
        }
    }
}

impl<T> Discography<T> {
    /// The list a release belongs in, or `None` for unrecognized tags.
    fn bucket_for(&mut self, album: &Album) -> Option<&mut Vec<T>> {
        match album.group_or_type() {
            Some("album") => Some(&mut self.albums),
            Some("single") => Some(&mut self.singles),
            _ => None,
        }
    }
}

/// Splits releases into albums and singles, keeping their order.
///
/// Only the `album` and `single` tags are recognized. Everything else
/// (`compilation`, `appears_on`, missing tags) ends up in neither bucket.
pub fn classify(entries: Vec<Album>) -> Discography {
    let mut split = Discography::default();
    for album in entries {
        if let Some(bucket) = split.bucket_for(&album) {
            bucket.push(album);
        }
    }
    split
}

/// Borrowing variant of [`classify`].
pub fn classify_refs(entries: &[Album]) -> Discography<&Album> {
    let mut split = Discography::default();
    for album in entries {
        if let Some(bucket) = split.bucket_for(album) {
            bucket.push(album);
        }
    }
    split
}
