//! Scheduled flight records.

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::{AirportCode, DomainError};

/// Identifier of a scheduled flight (the `flight_no` column).
///
/// Backed by `Arc<str>` so that legs are cheap to clone while the search
/// copies them into candidate itineraries.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId(Arc<str>);

impl FlightId {
    /// Create a flight identifier, trimming surrounding whitespace.
    ///
    /// Returns `None` if the identifier is blank.
    pub fn new(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(Arc::from(id)))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightId({})", self.as_str())
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing and baggage terms of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Ticket price without bags
    pub base_price: Decimal,
    /// Price per checked bag (carried on the record, not charged by the planner)
    pub bag_price: Decimal,
    /// Maximum number of bags allowed on this flight
    pub bags_allowed: u32,
}

/// A single scheduled flight.
///
/// # Invariants
///
/// - `departure < arrival`
/// - Prices are non-negative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    id: FlightId,
    origin: AirportCode,
    destination: AirportCode,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    fare: Fare,
}

impl Flight {
    /// Construct a flight, validating its schedule and fare.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `departure >= arrival`
    /// - Either price is negative
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, Fare, Flight, FlightId};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let dep = NaiveDateTime::parse_from_str("2021-09-01 08:00", "%Y-%m-%d %H:%M").unwrap();
    /// let arr = NaiveDateTime::parse_from_str("2021-09-01 09:30", "%Y-%m-%d %H:%M").unwrap();
    ///
    /// let flight = Flight::new(
    ///     FlightId::new("ZH214").unwrap(),
    ///     AirportCode::parse("WIW").unwrap(),
    ///     AirportCode::parse("RFZ").unwrap(),
    ///     dep,
    ///     arr,
    ///     Fare {
    ///         base_price: Decimal::new(168, 0),
    ///         bag_price: Decimal::new(12, 0),
    ///         bags_allowed: 2,
    ///     },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(flight.duration().num_minutes(), 90);
    ///
    /// // Arriving before departing is rejected
    /// assert!(Flight::new(
    ///     FlightId::new("ZH215").unwrap(),
    ///     AirportCode::parse("RFZ").unwrap(),
    ///     AirportCode::parse("WIW").unwrap(),
    ///     arr,
    ///     dep,
    ///     flight.fare(),
    /// )
    /// .is_err());
    /// ```
    pub fn new(
        id: FlightId,
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        fare: Fare,
    ) -> Result<Self, DomainError> {
        if departure >= arrival {
            return Err(DomainError::InvalidFlight(
                "departure must be before arrival",
            ));
        }

        if fare.base_price < Decimal::ZERO {
            return Err(DomainError::InvalidFlight("base price must not be negative"));
        }

        if fare.bag_price < Decimal::ZERO {
            return Err(DomainError::InvalidFlight("bag price must not be negative"));
        }

        Ok(Self {
            id,
            origin,
            destination,
            departure,
            arrival,
            fare,
        })
    }

    pub fn id(&self) -> &FlightId {
        &self.id
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn base_price(&self) -> Decimal {
        self.fare.base_price
    }

    pub fn bag_price(&self) -> Decimal {
        self.fare.bag_price
    }

    pub fn bags_allowed(&self) -> u32 {
        self.fare.bags_allowed
    }

    /// Time in the air, from departure to arrival.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Gap between `previous` landing and this flight taking off.
    ///
    /// Negative if this flight departs before `previous` arrives.
    pub fn layover_after(&self, previous: &Flight) -> Duration {
        self.departure.signed_duration_since(previous.arrival)
    }

    /// Returns true if this flight can carry `bags` checked bags.
    pub fn carries(&self, bags: u32) -> bool {
        self.fare.bags_allowed >= bags
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}->{} {}",
            self.id,
            self.origin,
            self.destination,
            self.departure.format("%Y-%m-%dT%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, code, flight};

    fn fare() -> Fare {
        Fare {
            base_price: Decimal::new(50, 0),
            bag_price: Decimal::new(9, 0),
            bags_allowed: 1,
        }
    }

    #[test]
    fn flight_id_trims_and_rejects_blank() {
        assert_eq!(FlightId::new(" ZH214 ").unwrap().as_str(), "ZH214");
        assert!(FlightId::new("").is_none());
        assert!(FlightId::new("   ").is_none());
    }

    #[test]
    fn departure_must_precede_arrival() {
        let id = FlightId::new("F1").unwrap();
        let err = Flight::new(
            id.clone(),
            code("AAA"),
            code("BBB"),
            at("10:00"),
            at("10:00"),
            fare(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidFlight("departure must be before arrival")
        );

        assert!(
            Flight::new(id, code("AAA"), code("BBB"), at("11:00"), at("10:00"), fare()).is_err()
        );
    }

    #[test]
    fn negative_prices_rejected() {
        let id = FlightId::new("F1").unwrap();
        let mut bad = fare();
        bad.base_price = Decimal::new(-1, 0);
        assert!(
            Flight::new(id.clone(), code("AAA"), code("BBB"), at("10:00"), at("11:00"), bad)
                .is_err()
        );

        let mut bad = fare();
        bad.bag_price = Decimal::new(-5, 1);
        assert!(
            Flight::new(id.clone(), code("AAA"), code("BBB"), at("10:00"), at("11:00"), bad)
                .is_err()
        );

        let mut free = fare();
        free.base_price = Decimal::ZERO;
        free.bag_price = Decimal::ZERO;
        assert!(Flight::new(id, code("AAA"), code("BBB"), at("10:00"), at("11:00"), free).is_ok());
    }

    #[test]
    fn layover_after_previous_leg() {
        let first = flight("F1", "AAA", "BBB", "08:00", "09:00", 100, 2);
        let second = flight("F2", "BBB", "CCC", "10:30", "11:30", 150, 1);

        assert_eq!(second.layover_after(&first), Duration::minutes(90));
        assert_eq!(first.layover_after(&second), Duration::minutes(-210));
    }

    #[test]
    fn carries_is_inclusive() {
        let f = flight("F1", "AAA", "BBB", "08:00", "09:00", 100, 2);
        assert!(f.carries(0));
        assert!(f.carries(2));
        assert!(!f.carries(3));
    }

    #[test]
    fn display() {
        let f = flight("ZH214", "WIW", "RFZ", "08:00", "09:00", 100, 2);
        assert_eq!(f.to_string(), "ZH214 WIW->RFZ 2021-09-01T08:00");
    }
}
