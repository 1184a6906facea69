//! Trip ranking for search results.

use super::summary::TripSummary;

/// Rank trips by total price, cheapest first.
///
/// The sort is stable: trips with equal prices keep the order the search
/// found them in.
pub fn rank_by_price(mut trips: Vec<TripSummary>) -> Vec<TripSummary> {
    trips.sort_by_key(|trip| trip.total_price);
    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Itinerary;
    use crate::fixtures::flight;
    use crate::planner::summarize;

    fn trip(id: &str, price: i64) -> TripSummary {
        let leg = flight(id, "AAA", "BBB", "08:00", "09:00", price, 1);
        summarize(Itinerary::new(vec![leg]).unwrap(), 0)
    }

    fn ids(trips: &[TripSummary]) -> Vec<&str> {
        trips.iter().map(|t| t.legs()[0].id().as_str()).collect()
    }

    #[test]
    fn rank_by_total_price() {
        let ranked = rank_by_price(vec![trip("MID", 200), trip("HIGH", 300), trip("LOW", 100)]);
        assert_eq!(ids(&ranked), vec!["LOW", "MID", "HIGH"]);
    }

    #[test]
    fn equal_prices_keep_search_order() {
        let ranked = rank_by_price(vec![trip("B", 100), trip("A", 100), trip("C", 50)]);
        assert_eq!(ids(&ranked), vec!["C", "B", "A"]);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(rank_by_price(Vec::new()).is_empty());
    }
}
