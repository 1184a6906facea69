//! Flight fixtures shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::domain::{AirportCode, Fare, Flight, FlightId};

/// Day used for fixture times given as "HH:MM".
pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 9, 1).unwrap()
}

/// Parse "HH:MM" on the fixture date, or a full "YYYY-MM-DDTHH:MM".
pub fn at(s: &str) -> NaiveDateTime {
    if s.len() == 5 {
        date().and_time(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
    } else {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }
}

pub fn code(s: &str) -> AirportCode {
    AirportCode::parse(s).unwrap()
}

/// Build a flight with a whole-unit base price and a bag price of 10.
pub fn flight(
    id: &str,
    origin: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    base_price: i64,
    bags_allowed: u32,
) -> Flight {
    Flight::new(
        FlightId::new(id).unwrap(),
        code(origin),
        code(destination),
        at(departure),
        at(arrival),
        Fare {
            base_price: Decimal::new(base_price, 0),
            bag_price: Decimal::new(10, 0),
            bags_allowed,
        },
    )
    .unwrap()
}
