use tabled::Table;

use crate::{
    config::Settings,
    error, info,
    spotify::{Region, SpotifyClient},
    types::ArtistTableRow,
    warning,
};

use super::spinner;

pub async fn trending(settings: &Settings, region: Region, min_followers: u64, limit: usize) {
    let client = match SpotifyClient::new(settings) {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    let pb = spinner(&format!("Fetching trending artists ({region})..."));
    let artists = match client.trending_artists(region, min_followers, limit).await {
        Ok(artists) => artists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch trending artists: {}", e);
        }
    };
    pb.finish_and_clear();

    if artists.is_empty() {
        warning!("No artist in {} has at least {} followers.", region, min_followers);
        return;
    }

    info!("Trending artists in {}:", region);
    let rows: Vec<ArtistTableRow> = artists.iter().map(ArtistTableRow::from).collect();
    println!("{}", Table::new(rows));
}
