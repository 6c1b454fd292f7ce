use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mta_arrivals::feed::{DEFAULT_ROUTES, FeedClient, FeedConfig};
use mta_arrivals::stations::StationDirectory;
use mta_arrivals::watch::{DEFAULT_REFRESH_SECS, RunConfig, Scheduler};

/// Real-time arrival board for NYC Subway lines 1, 2 and 3.
#[derive(Debug, Parser)]
#[command(name = "mta-arrivals", version, about)]
struct Cli {
    /// Station name or stop ID to filter by
    /// (e.g. "116 St-Columbia University" or 116N)
    station: Option<String>,

    /// Continuously refresh instead of fetching once
    #[arg(short, long)]
    watch: bool,

    /// Path to the GTFS stops table
    #[arg(long, default_value = "gtfs_subway/stops.csv")]
    stops: PathBuf,

    /// Seconds between watch-mode refreshes
    #[arg(long, default_value_t = DEFAULT_REFRESH_SECS)]
    refresh_secs: u64,

    /// Routes to include
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ROUTES.iter().map(|route| route.to_string()))]
    routes: Vec<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let directory = match StationDirectory::load(&cli.stops) {
        Ok(directory) => directory,
        Err(err) => {
            eprintln!("Warning: could not load stop names: {err}");
            eprintln!("Will display stop IDs only.");
            StationDirectory::empty()
        }
    };

    let client = match FeedClient::new(FeedConfig::default()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: failed to create feed client: {err}");
            process::exit(1);
        }
    };

    let config = RunConfig {
        station: cli.station,
        watch: cli.watch,
        refresh: Duration::from_secs(cli.refresh_secs),
    };

    let scheduler = Scheduler::new(client, directory, cli.routes, config);
    if let Err(err) = scheduler.run().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
