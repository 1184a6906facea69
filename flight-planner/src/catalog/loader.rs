//! CSV parsing for flight catalogs.
//!
//! Rows are read into raw string records first and then converted into
//! validated `Flight`s, so that every parse failure can name the line,
//! field and offending value.

use std::io;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::trace;

use crate::domain::{AirportCode, Fare, Flight, FlightId};

use super::error::CatalogError;

/// Columns every catalog file must provide, besides the identifier.
const REQUIRED_COLUMNS: [&str; 7] = [
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// Accepted names for the identifier column, in order of preference.
const ID_COLUMNS: [&str; 2] = ["flight_no", "id"];

/// Accepted timestamp layouts, tried in order.
///
/// `%.f` also matches an absent fractional part.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// One CSV row, before validation.
///
/// The identifier is read separately by column index, so a file carrying
/// both `flight_no` and `id` columns still deserializes.
#[derive(Debug, Deserialize)]
struct FlightRow {
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: String,
    bag_price: String,
    bags_allowed: String,
}

/// Read every flight from CSV input, in file order.
pub(super) fn read_flights<R: io::Read>(reader: R) -> Result<Vec<Flight>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let id_column = check_headers(&headers)?;

    let mut flights = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let id = record.get(id_column).unwrap_or_default();
        let row: FlightRow = record.deserialize(Some(&headers))?;
        let flight = row.into_flight(line, id)?;
        trace!(%flight, line, "parsed flight");
        flights.push(flight);
    }

    Ok(flights)
}

/// Check the header row, returning the index of the identifier column.
fn check_headers(headers: &csv::StringRecord) -> Result<usize, CatalogError> {
    let position = |name: &str| headers.iter().position(|h| h == name);

    let id_column = ID_COLUMNS
        .iter()
        .find_map(|&name| position(name))
        .ok_or(CatalogError::MissingColumn(ID_COLUMNS[0]))?;

    for column in REQUIRED_COLUMNS {
        if position(column).is_none() {
            return Err(CatalogError::MissingColumn(column));
        }
    }

    Ok(id_column)
}

impl FlightRow {
    fn into_flight(self, line: u64, id: &str) -> Result<Flight, CatalogError> {
        let id = FlightId::new(id).ok_or_else(|| CatalogError::InvalidField {
            line,
            field: "flight_no",
            value: id.to_string(),
            reason: "must not be blank".to_string(),
        })?;

        let origin = parse_airport(line, "origin", &self.origin)?;
        let destination = parse_airport(line, "destination", &self.destination)?;
        let departure = parse_timestamp(line, "departure", &self.departure)?;
        let arrival = parse_timestamp(line, "arrival", &self.arrival)?;

        let fare = Fare {
            base_price: parse_price(line, "base_price", &self.base_price)?,
            bag_price: parse_price(line, "bag_price", &self.bag_price)?,
            bags_allowed: self
                .bags_allowed
                .parse()
                .map_err(|e: std::num::ParseIntError| CatalogError::InvalidField {
                    line,
                    field: "bags_allowed",
                    value: self.bags_allowed.clone(),
                    reason: e.to_string(),
                })?,
        };

        Flight::new(id, origin, destination, departure, arrival, fare)
            .map_err(|source| CatalogError::InvalidFlight { line, source })
    }
}

fn parse_airport(
    line: u64,
    field: &'static str,
    value: &str,
) -> Result<AirportCode, CatalogError> {
    AirportCode::parse(value).map_err(|e| CatalogError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_price(line: u64, field: &'static str, value: &str) -> Result<Decimal, CatalogError> {
    Decimal::from_str(value).map_err(|e| CatalogError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a naive ISO-8601 timestamp. No timezone handling is performed.
fn parse_timestamp(
    line: u64,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, CatalogError> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| CatalogError::InvalidField {
            line,
            field,
            value: value.to_string(),
            reason: "expected ISO-8601 date and time".to_string(),
        })
}
