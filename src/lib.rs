//! Spotify Discography Explorer Library
//!
//! This library powers `sporlweb`, a small web application on top of the
//! Spotify Web API. Users sign up, search for an artist and get the artist's
//! top tracks, the complete discography split into albums and singles, a list
//! of trending artists and related-artist recommendations.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers for the web application
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `discography` - Paginated catalog aggregation, date normalization and classification
//! - `error` - Error types shared across the crate
//! - `management` - In-memory users, sessions and the client token
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client implementation
//! - `trending` - Trending-artist selection and recommendation dedupe
//! - `types` - Data structures and type definitions
//! - `views` - HTML rendering for the web pages
//!
//! # Example
//!
//! ```
//! use sporlweb::{config, discography};
//!
//! #[tokio::main]
//! async fn main() -> sporlweb::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let client = sporlweb::spotify::SpotifyClient::new(&settings)?;
//!     let releases = discography::DiscographyAggregator::new(&client)
//!         .aggregate_all("4NHQUGzhtTLFvgF5SZesLK")
//!         .await?;
//!     let split = discography::classify(releases);
//!     println!("{} albums, {} singles", split.albums.len(), split.singles.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod discography;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod trending;
pub mod types;
pub mod views;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the application glue (configuration, server startup, CLI) where
/// the concrete error type does not matter to the caller. The core modules
/// return their own typed errors from [`error`].
///
/// # Example
///
/// ```
/// use sporlweb::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} releases", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the binary's top level, where there is nothing left to
/// recover. Library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No artist found for {}", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
