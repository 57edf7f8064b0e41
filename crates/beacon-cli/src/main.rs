mod render;

use anyhow::Context;
use beacon_core::{AppConfig, Coordinates};
use beacon_directory::DirectoryClient;
use beacon_view::{
    DirectoryStatus, GeolocationProvider, PositionOptions, StaticPosition, UserInput, ViewRuntime,
    ViewState,
};
use clap::{Args, Parser, Subcommand};
use futures::stream::{self, Stream};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "beacon")]
#[command(about = "Pick your school: a directory ranked by proximity")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the directory once and print the ranked, filtered list.
    List {
        /// Case-insensitive substring of the school name.
        #[arg(long, default_value = "")]
        query: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Read queries line by line from stdin; `:locate` re-requests the position.
    Search {
        #[command(flatten)]
        location: LocationArgs,
    },
}

#[derive(Debug, Args)]
struct LocationArgs {
    /// Latitude of the current position.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude of the current position.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
    /// Behave as if location permission was denied.
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    no_location: bool,
    /// Maximum number of schools to print.
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = beacon_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::List { query, location } => list(&config, &location, query).await,
        Commands::Search { location } => search(&config, &location).await,
    }
}

async fn list(config: &AppConfig, args: &LocationArgs, query: String) -> anyhow::Result<()> {
    let runtime = build_runtime(config, args)?;
    let input = stream::iter((!query.is_empty()).then_some(UserInput::QueryChanged(query)));

    let state = runtime.run(input, |_| {}).await;
    report_status(&state);
    print!("{}", render::render_list(state.visible_list(), args.limit));
    Ok(())
}

async fn search(config: &AppConfig, args: &LocationArgs) -> anyhow::Result<()> {
    let runtime = build_runtime(config, args)?;
    let mut last_frame = String::new();

    let state = runtime
        .run(stdin_input(), |state| {
            let frame = render::render_frame(state, args.limit);
            if frame != last_frame {
                println!("{frame}");
                last_frame = frame;
            }
        })
        .await;
    report_status(&state);
    Ok(())
}

fn build_runtime(
    config: &AppConfig,
    args: &LocationArgs,
) -> anyhow::Result<ViewRuntime<DirectoryClient, StaticPosition>> {
    let directory =
        DirectoryClient::from_config(config).context("failed to build directory client")?;
    let source = position_source(config, args)?;
    let geolocation = GeolocationProvider::new(source, PositionOptions::from_config(config));
    Ok(ViewRuntime::new(directory, geolocation))
}

/// Picks the position capability: explicit flags first, then configuration.
/// `None` means no capability at all.
fn position_source(
    config: &AppConfig,
    args: &LocationArgs,
) -> anyhow::Result<Option<StaticPosition>> {
    if args.no_location {
        return Ok(Some(StaticPosition::Denied));
    }
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let coords = Coordinates::new(lat, lng)
            .with_context(|| format!("coordinates out of range: {lat},{lng}"))?;
        return Ok(Some(StaticPosition::Fixed(coords)));
    }
    Ok(config.position.map(StaticPosition::Fixed))
}

fn stdin_input() -> impl Stream<Item = UserInput> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((parse_input(&line), lines)),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stdin");
                None
            }
        }
    })
}

fn parse_input(line: &str) -> UserInput {
    if line.trim() == ":locate" {
        UserInput::SearchBoxActivated
    } else {
        UserInput::QueryChanged(line.to_string())
    }
}

fn report_status(state: &ViewState) {
    if let DirectoryStatus::Failed(message) = state.directory_status() {
        eprintln!("directory unavailable: {message}");
    }
}

#[cfg(test)]
mod tests;
