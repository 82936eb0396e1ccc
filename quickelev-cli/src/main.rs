use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Location search and elevation lookup CLI
#[derive(Parser)]
#[command(name = "quickelev")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TomTom API key used by the geocoding endpoints
    #[arg(short = 'k', long, env = "TOMTOM_API_KEY", global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for places matching a free-text query
    Search {
        /// Free-text place query (e.g. "New York")
        query: String,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Look up the elevation at a coordinate
    Elevation {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Detect the current position and report its elevation
    Locate {
        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, json } => commands::search::run(cli.api_key, &query, json).await,
        Commands::Elevation { lat, lon, json } => commands::elevation::run(lat, lon, json).await,
        Commands::Locate { json } => commands::locate::run(cli.api_key, json).await,
    }
}
