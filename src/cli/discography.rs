use clap::ValueEnum;
use tabled::Table;
use tokio_util::sync::CancellationToken;

use crate::{
    config::Settings,
    discography::{DiscographyAggregator, classify_refs},
    error, info,
    spotify::SpotifyClient,
    success,
    types::{Album, ReleaseTableRow, TrackTableRow},
    warning,
};

use super::spinner;

/// Which part of the discography to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReleaseKind {
    Album,
    Single,
    #[default]
    All,
}

pub async fn discography(settings: &Settings, artist_name: &str, kind: ReleaseKind) {
    let client = match SpotifyClient::new(settings) {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    let artist = match client.search_artist(artist_name).await {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            warning!("No artist with the name {} exists.", artist_name);
            return;
        }
        Err(e) => error!("Artist search failed: {}", e),
    };

    let top_tracks = match client.top_tracks(&artist.id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Failed to fetch top tracks: {}", e);
            Vec::new()
        }
    };

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let pb = spinner(&format!("Fetching discography of {}...", artist.name));
    let releases = match DiscographyAggregator::new(&client)
        .with_max_pages(settings.max_pages)
        .with_cancellation(cancel)
        .aggregate_all(&artist.id)
        .await
    {
        Ok(releases) => releases,
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not load discography: {}", e);
        }
    };
    pb.finish_and_clear();

    success!("Fetched {} releases of {}!", releases.len(), artist.name);
    info!(
        "Followers: {}, popularity: {}, genres: {}",
        artist.followers.total,
        artist.popularity,
        artist.genres.join(", ")
    );

    if !top_tracks.is_empty() {
        let rows: Vec<TrackTableRow> = top_tracks.iter().take(5).map(TrackTableRow::from).collect();
        println!("Top tracks\n{}\n", Table::new(rows));
    }

    let split = classify_refs(&releases);
    if kind != ReleaseKind::Single {
        print_releases("Albums", &split.albums);
    }
    if kind != ReleaseKind::Album {
        print_releases("Singles", &split.singles);
    }
}

fn print_releases(heading: &str, releases: &[&Album]) {
    if releases.is_empty() {
        info!("No {} found.", heading.to_lowercase());
        return;
    }

    let rows: Vec<ReleaseTableRow> = releases.iter().map(|a| ReleaseTableRow::from(*a)).collect();
    println!("{heading} ({})\n{}\n", releases.len(), Table::new(rows));
}
