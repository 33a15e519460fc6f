//! # CLI Module
//!
//! Command implementations for the `sporlweb` binary.
//!
//! - [`serve`] - Runs the web application
//! - [`discography`] - Prints an artist's albums and singles as tables
//! - [`trending`] - Prints trending artists for a region
//!
//! Commands report progress with the crate's console macros and exit through
//! `error!` on unrecoverable failures, the same way at every call site.
//!
//! ## Usage
//!
//! ```bash
//! sporlweb serve --open
//! sporlweb discography "Tove Lo" --type single
//! sporlweb trending --region uk --limit 5
//! ```

mod discography;
mod serve;
mod trending;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use discography::{ReleaseKind, discography};
pub use serve::serve;
pub use trending::trending;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
