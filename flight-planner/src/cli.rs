//! Command-line interface.
//!
//! `search` prints every trip between two airports as JSON, cheapest
//! first. `serve` exposes the same search over HTTP.

use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogError};
use crate::domain::AirportCode;
use crate::planner::{SearchConfig, SearchEngine, SearchError, SearchRequest};
use crate::web::{self, AppState, TripResult};

#[derive(Parser)]
#[command(
    name = "flight-planner",
    about = "Find every flight itinerary between two airports, cheapest first",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log more detail to stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all itineraries between two airports as JSON
    Search(SearchArgs),
    /// Serve itinerary search over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// CSV file of scheduled flights
    pub data: PathBuf,

    /// Origin airport code
    #[arg(value_parser = AirportCode::parse_normalized)]
    pub origin: AirportCode,

    /// Destination airport code
    #[arg(value_parser = AirportCode::parse_normalized)]
    pub destination: AirportCode,

    /// Number of bags every leg must carry
    #[arg(long, default_value_t = 0)]
    pub bags: u32,

    #[command(flatten)]
    pub layover: LayoverArgs,
}

#[derive(Args)]
pub struct ServeArgs {
    /// CSV file of scheduled flights
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "FLIGHT_PLANNER_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    #[command(flatten)]
    pub layover: LayoverArgs,
}

#[derive(Args)]
pub struct LayoverArgs {
    /// Shortest acceptable layover
    #[arg(
        long,
        value_name = "MINUTES",
        default_value_t = SearchConfig::default().min_layover_mins
    )]
    pub min_layover: i64,

    /// Longest acceptable layover
    #[arg(
        long,
        value_name = "MINUTES",
        default_value_t = SearchConfig::default().max_layover_mins
    )]
    pub max_layover: i64,
}

impl LayoverArgs {
    pub fn config(&self) -> SearchConfig {
        SearchConfig::new(self.min_layover, self.max_layover)
    }
}

/// Errors surfaced by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn load_engine(data: &Path, layover: &LayoverArgs) -> Result<SearchEngine, CliError> {
    let catalog = Catalog::from_path(data)?;
    if catalog.is_empty() {
        warn!(path = %data.display(), "flight catalog has no flights");
    }
    Ok(SearchEngine::new(catalog, layover.config())?)
}

/// Run `search`, writing pretty-printed JSON to `out`.
///
/// No matching itinerary is not an error: an empty JSON array is written.
pub fn run_search(args: &SearchArgs, out: &mut impl Write) -> Result<(), CliError> {
    let engine = load_engine(&args.data, &args.layover)?;

    let request = SearchRequest::new(args.origin, args.destination, args.bags);
    let trips: Vec<TripResult> = engine
        .plan(&request)
        .iter()
        .map(TripResult::from_summary)
        .collect();

    info!(
        origin = %args.origin,
        destination = %args.destination,
        trips = trips.len(),
        "search finished"
    );

    serde_json::to_writer_pretty(&mut *out, &trips)?;
    writeln!(out)?;
    Ok(())
}

/// Run `serve` until the process is stopped.
pub async fn run_serve(args: &ServeArgs) -> Result<(), CliError> {
    let engine = load_engine(&args.data, &args.layover)?;
    web::serve(AppState::new(engine), args.addr).await?;
    Ok(())
}
