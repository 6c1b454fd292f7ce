//! One-shot and watch-mode execution.
//!
//! Drives the fetch → extract → resolve → render sequence, either exactly
//! once or repeatedly on a fixed cadence. Ticks are independent: a failed
//! fetch is reported inline and the next tick starts from scratch. Only
//! the read-only directory and the query string live across ticks.

use std::time::Duration;

use chrono::{Local, TimeZone, Utc};
use tracing::debug;

use crate::domain::Arrival;
use crate::feed::{FeedClient, FeedError, extract_arrivals};
use crate::render::render_table;
use crate::stations::{StationDirectory, resolve};

/// Default refresh cadence for watch mode, in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Errors from a scheduler run or a single tick.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Watch mode was requested without a station query
    #[error("watch mode requires a station name or stop ID")]
    Usage,

    /// Feed retrieval or decoding failed
    #[error("error fetching feed: {0}")]
    Feed(#[from] FeedError),

    /// The station query matched no live arrivals
    #[error("no arrivals found for station: {query}")]
    NoMatch { query: String },
}

/// Immutable run configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Station name or stop ID to filter by, if any
    pub station: Option<String>,
    /// Repeat on the refresh cadence instead of running once
    pub watch: bool,
    /// Watch-mode refresh interval
    pub refresh: Duration,
}

impl RunConfig {
    /// Validate the configuration.
    ///
    /// Watch mode without a non-empty station query is rejected here,
    /// before any network activity.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.watch && self.station.as_deref().unwrap_or("").is_empty() {
            return Err(RunError::Usage);
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            station: None,
            watch: false,
            refresh: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

/// Drives one-shot or repeated fetch-and-render passes.
///
/// Holds only read-only state; every tick rebuilds its arrival snapshot
/// from a fresh fetch.
pub struct Scheduler {
    client: FeedClient,
    directory: StationDirectory,
    routes: Vec<String>,
    config: RunConfig,
}

impl Scheduler {
    /// Create a scheduler over the given client, directory and config.
    pub fn new(
        client: FeedClient,
        directory: StationDirectory,
        routes: Vec<String>,
        config: RunConfig,
    ) -> Self {
        Self {
            client,
            directory,
            routes,
            config,
        }
    }

    /// Run to completion: once, or forever in watch mode.
    ///
    /// In watch mode only the pre-flight usage check can return an error;
    /// tick failures are reported inline and the loop keeps going until
    /// the process is terminated.
    pub async fn run(&self) -> Result<(), RunError> {
        self.config.validate()?;

        if !self.config.watch {
            let report = self.tick().await?;
            println!("{report}");
            return Ok(());
        }

        let mut interval = tokio::time::interval(self.config.refresh);
        interval.tick().await; // first tick fires immediately

        self.draw().await;
        loop {
            interval.tick().await;
            clear_screen();
            self.draw().await;
        }
    }

    /// One watch-mode redraw: tick, report inline, stamp the time.
    async fn draw(&self) {
        match self.tick().await {
            Ok(report) => println!("{report}"),
            Err(err) => eprintln!("{err}"),
        }

        println!();
        println!("Last updated: {}", Local::now().format("%-I:%M:%S %p"));
        println!("Watch mode active. Press Ctrl+C to exit.");
        println!(
            "Refreshing every {} seconds...",
            self.config.refresh.as_secs()
        );
    }

    /// One full fetch → extract → resolve → render pass.
    async fn tick(&self) -> Result<String, RunError> {
        let entities = self.client.fetch().await?;
        let now = Utc::now();
        let arrivals = extract_arrivals(&entities, now, &self.routes);
        debug!(arrivals = arrivals.len(), "extracted snapshot");

        build_report(
            arrivals,
            self.config.station.as_deref(),
            &self.directory,
            &Local,
        )
    }
}

fn clear_screen() {
    print!("\x1b[H\x1b[2J");
}

/// Compose the per-tick report from an extracted snapshot.
///
/// Separated from the fetch so the whole station-filtering and rendering
/// path is testable without a network.
pub fn build_report<Tz>(
    arrivals: Vec<Arrival>,
    station: Option<&str>,
    directory: &StationDirectory,
    tz: &Tz,
) -> Result<String, RunError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if arrivals.is_empty() {
        return Ok("No upcoming arrivals found.".to_string());
    }

    let arrivals = match station {
        Some(query) => {
            let targets = resolve(query, &arrivals, directory);
            let matched: Vec<Arrival> = arrivals
                .into_iter()
                .filter(|arrival| targets.contains(&arrival.stop_id))
                .collect();

            if matched.is_empty() {
                return Err(RunError::NoMatch {
                    query: query.to_string(),
                });
            }
            matched
        }
        None => arrivals,
    };

    Ok(render_table(arrivals, directory, tz))
}
