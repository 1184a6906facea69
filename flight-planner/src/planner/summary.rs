//! Trip summaries.
//!
//! A `TripSummary` is the priced, read-only view of one itinerary that is
//! handed to callers and serialized for output.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::domain::{AirportCode, Flight, Itinerary};

/// Priced view of one itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSummary {
    /// Airport the trip starts from
    pub origin: AirportCode,
    /// Airport the trip ends at
    pub destination: AirportCode,
    /// Bottleneck allowance: the fewest bags any leg accepts
    pub bags_allowed: u32,
    /// Bags the traveller asked to carry
    pub bags_count: u32,
    /// Sum of leg base prices (bag fees are not included)
    pub total_price: Decimal,
    /// First departure to last arrival, layovers included
    pub travel_time: Duration,
    /// The underlying legs
    pub itinerary: Itinerary,
}

impl TripSummary {
    pub fn legs(&self) -> &[Flight] {
        self.itinerary.legs()
    }

    /// Airborne time of the final leg alone.
    ///
    /// Older tooling reported this as the trip's travel time; it undercounts
    /// any trip with more than one leg and is kept only for comparison.
    pub fn final_leg_time(&self) -> Duration {
        self.itinerary.last_leg().duration()
    }
}

/// Build the summary of an itinerary for `requested_bags` bags.
///
/// The requested bag count is recorded as-is; it does not change the price,
/// route or bottleneck allowance.
pub fn summarize(itinerary: Itinerary, requested_bags: u32) -> TripSummary {
    let legs = itinerary.legs();

    let total_price: Decimal = legs.iter().map(Flight::base_price).sum();
    let bags_allowed = legs
        .iter()
        .map(Flight::bags_allowed)
        .min()
        .unwrap_or_default();

    TripSummary {
        origin: itinerary.origin(),
        destination: itinerary.destination(),
        bags_allowed,
        bags_count: requested_bags,
        total_price,
        travel_time: itinerary.total_duration(),
        itinerary,
    }
}

/// Render a duration as `H:MM:SS`, prefixed with `N day(s), ` past 24 hours.
///
/// Sub-second precision is dropped.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use flight_planner::planner::format_travel_time;
///
/// assert_eq!(format_travel_time(Duration::minutes(150)), "2:30:00");
/// assert_eq!(format_travel_time(Duration::hours(26)), "1 day, 2:00:00");
/// assert_eq!(format_travel_time(Duration::hours(49)), "2 days, 1:00:00");
/// ```
pub fn format_travel_time(duration: Duration) -> String {
    let total = duration.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{code, flight};

    fn two_legs() -> Itinerary {
        Itinerary::new(vec![
            flight("F1", "AAA", "BBB", "08:00", "09:00", 100, 2),
            flight("F2", "BBB", "CCC", "10:30", "11:30", 150, 1),
        ])
        .unwrap()
    }

    #[test]
    fn summary_of_two_legs() {
        let trip = summarize(two_legs(), 1);

        assert_eq!(trip.origin, code("AAA"));
        assert_eq!(trip.destination, code("CCC"));
        assert_eq!(trip.total_price, Decimal::new(250, 0));
        assert_eq!(trip.bags_allowed, 1);
        assert_eq!(trip.bags_count, 1);
        assert_eq!(trip.legs().len(), 2);
    }

    #[test]
    fn travel_time_spans_whole_trip() {
        let trip = summarize(two_legs(), 0);

        // 08:00 departure to 11:30 arrival, not just the last hour in the air
        assert_eq!(trip.travel_time, Duration::minutes(210));
        assert_eq!(trip.final_leg_time(), Duration::hours(1));
        assert_ne!(trip.travel_time, trip.final_leg_time());
    }

    #[test]
    fn single_leg_travel_time_matches_flight() {
        let itinerary =
            Itinerary::new(vec![flight("F1", "AAA", "BBB", "08:00", "09:45", 80, 3)]).unwrap();
        let trip = summarize(itinerary, 0);

        assert_eq!(trip.travel_time, Duration::minutes(105));
        assert_eq!(trip.travel_time, trip.final_leg_time());
        assert_eq!(trip.bags_allowed, 3);
    }

    #[test]
    fn bottleneck_is_minimum_not_sum() {
        let itinerary = Itinerary::new(vec![
            flight("F1", "AAA", "BBB", "08:00", "09:00", 10, 3),
            flight("F2", "BBB", "CCC", "10:00", "11:00", 10, 1),
            flight("F3", "CCC", "DDD", "12:00", "13:00", 10, 2),
        ])
        .unwrap();

        assert_eq!(summarize(itinerary, 0).bags_allowed, 1);
    }

    #[test]
    fn requested_bags_do_not_change_price_or_route() {
        let none = summarize(two_legs(), 0);
        let one = summarize(two_legs(), 1);

        assert_eq!(none.total_price, one.total_price);
        assert_eq!(none.itinerary, one.itinerary);
        assert_eq!(none.bags_allowed, one.bags_allowed);
        assert_ne!(none.bags_count, one.bags_count);
    }

    #[test]
    fn fractional_prices_sum_exactly() {
        let mut legs = Vec::new();
        for (id, dep, arr, origin, dest) in [
            ("F1", "08:00", "09:00", "AAA", "BBB"),
            ("F2", "10:00", "11:00", "BBB", "CCC"),
        ] {
            let f = flight(id, origin, dest, dep, arr, 0, 1);
            let mut fare = f.fare();
            fare.base_price = Decimal::new(1, 1); // 0.1
            let priced = Flight::new(
                f.id().clone(),
                f.origin(),
                f.destination(),
                f.departure(),
                f.arrival(),
                fare,
            );
            legs.push(priced.unwrap());
        }

        let trip = summarize(Itinerary::new(legs).unwrap(), 0);
        assert_eq!(trip.total_price, Decimal::new(2, 1));
    }

    #[test]
    fn travel_time_formatting() {
        assert_eq!(format_travel_time(Duration::zero()), "0:00:00");
        assert_eq!(format_travel_time(Duration::seconds(59)), "0:00:59");
        assert_eq!(format_travel_time(Duration::minutes(210)), "3:30:00");
        assert_eq!(format_travel_time(Duration::hours(24)), "1 day, 0:00:00");
        assert_eq!(
            format_travel_time(Duration::hours(50) + Duration::minutes(5)),
            "2 days, 2:05:00"
        );
        assert_eq!(format_travel_time(Duration::hours(-1)), "-1 day, 23:00:00");
    }
}
