use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sporlweb::{
    cli, config, error,
    spotify::Region,
    trending::{DEFAULT_MIN_FOLLOWERS, DEFAULT_TRENDING_LIMIT},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web application
    Serve(ServeOptions),

    /// Print the albums and singles of an artist
    Discography(DiscographyOptions),

    /// Print trending artists for a region
    Trending(TrendingOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the application in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DiscographyOptions {
    /// Artist name to search for
    pub artist: String,

    /// Release type to print
    #[clap(long = "type", value_enum, default_value_t = cli::ReleaseKind::All)]
    pub kind: cli::ReleaseKind,
}

#[derive(Parser, Debug, Clone)]
pub struct TrendingOptions {
    /// Region used for the genre heuristic
    #[clap(long, value_enum, default_value_t = Region::International)]
    pub region: Region,

    /// Minimum follower count
    #[clap(long, default_value_t = DEFAULT_MIN_FOLLOWERS)]
    pub min_followers: u64,

    /// Number of artists to print
    #[clap(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sporlweb=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }
    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Serve(opt) => {
            init_tracing();
            cli::serve(&settings, opt.open).await
        }
        Command::Discography(opt) => cli::discography(&settings, &opt.artist, opt.kind).await,
        Command::Trending(opt) => {
            cli::trending(&settings, opt.region, opt.min_followers, opt.limit).await
        }
        Command::Completions(_) => {}
    }
}
