//! Data transfer objects for trip output.
//!
//! These shapes are shared by the HTTP API and the command-line output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Flight;
use crate::planner::{TripSummary, format_travel_time};

/// Timestamp layout used in output, matching the input data files.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Query for trip search.
#[derive(Debug, Deserialize)]
pub struct TripsQuery {
    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Bags to carry (defaults to 0)
    pub bags: Option<u32>,
}

/// One leg of a trip, with its original record fields.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bag_price: Decimal,
    pub bags_allowed: u32,
}

/// A priced trip.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Legs in travel order
    pub flights: Vec<FlightResult>,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Fewest bags any leg accepts
    pub bags_allowed: u32,

    /// Bags requested
    pub bags_count: u32,

    /// Sum of leg base prices
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    /// First departure to last arrival, as `H:MM:SS`
    pub travel_time: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_no: flight.id().to_string(),
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
            departure: flight.departure().format(TIMESTAMP_FORMAT).to_string(),
            arrival: flight.arrival().format(TIMESTAMP_FORMAT).to_string(),
            base_price: flight.base_price(),
            bag_price: flight.bag_price(),
            bags_allowed: flight.bags_allowed(),
        }
    }
}

impl TripResult {
    /// Create from a trip summary.
    pub fn from_summary(trip: &TripSummary) -> Self {
        Self {
            flights: trip.legs().iter().map(FlightResult::from_flight).collect(),
            origin: trip.origin.to_string(),
            destination: trip.destination.to_string(),
            bags_allowed: trip.bags_allowed,
            bags_count: trip.bags_count,
            total_price: trip.total_price,
            travel_time: format_travel_time(trip.travel_time),
        }
    }
}
