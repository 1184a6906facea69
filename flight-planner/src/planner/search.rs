//! Depth-first itinerary search.
//!
//! Finds every chain of connecting flights from an origin to a destination.
//! The catalog is departure-ordered, so a branch only ever looks at flights
//! after the one it just took: a path is a stack of catalog indices plus the
//! index where the next candidate scan starts.

use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::domain::{AirportCode, Flight, Itinerary};

use super::config::SearchConfig;
use super::rank::rank_by_price;
use super::summary::{TripSummary, summarize};

/// Error from itinerary search setup.
///
/// The search itself cannot fail: an empty result is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Search configuration is unusable
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Request for itinerary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Airport the trip starts from.
    pub origin: AirportCode,

    /// Airport the trip must end at.
    pub destination: AirportCode,

    /// Number of bags every leg must be able to carry.
    pub min_bags: u32,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: AirportCode, destination: AirportCode, min_bags: u32) -> Self {
        Self {
            origin,
            destination,
            min_bags,
        }
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every valid itinerary, in discovery order.
    pub itineraries: Vec<Itinerary>,

    /// Number of flights that started a branch.
    pub seeds: usize,

    /// Number of partial paths visited during search.
    pub branches_explored: usize,
}

/// Itinerary search over a fixed catalog.
///
/// Owns its catalog so that several engines with different fixtures can
/// coexist in one process. The catalog is never mutated after construction.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine, validating the configuration.
    pub fn new(catalog: Catalog, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Create an engine with the default 1 to 6 hour layover window.
    pub fn with_default_config(catalog: Catalog) -> Self {
        Self {
            catalog,
            config: SearchConfig::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every valid itinerary for the request.
    ///
    /// Result order is unspecified; use [`SearchEngine::plan`] for
    /// price-ranked summaries.
    pub fn search(&self, request: &SearchRequest) -> Vec<Itinerary> {
        self.search_with_stats(request).itineraries
    }

    /// Find every valid itinerary, also reporting how much work was done.
    pub fn search_with_stats(&self, request: &SearchRequest) -> SearchResult {
        let flights = self.catalog.flights();

        if !self.catalog.serves(request.origin) || !self.catalog.serves(request.destination) {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                "airport not in catalog"
            );
        }

        let mut dfs = Dfs {
            flights,
            config: &self.config,
            request,
            path: Vec::new(),
            itineraries: Vec::new(),
            branches_explored: 0,
        };

        let mut seeds = 0;
        for (idx, flight) in flights.iter().enumerate() {
            if flight.origin() == request.origin && flight.carries(request.min_bags) {
                seeds += 1;
                dfs.path.push(idx);
                dfs.extend(idx + 1);
                dfs.path.pop();
            }
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            bags = request.min_bags,
            seeds,
            branches = dfs.branches_explored,
            found = dfs.itineraries.len(),
            "itinerary search complete"
        );

        SearchResult {
            itineraries: dfs.itineraries,
            seeds,
            branches_explored: dfs.branches_explored,
        }
    }

    /// Search, summarize and rank by total price, cheapest first.
    pub fn plan(&self, request: &SearchRequest) -> Vec<TripSummary> {
        let trips = self
            .search(request)
            .into_iter()
            .map(|itinerary| summarize(itinerary, request.min_bags))
            .collect();
        rank_by_price(trips)
    }
}

/// Depth-first search state shared by every branch of one search.
struct Dfs<'a> {
    flights: &'a [Flight],
    config: &'a SearchConfig,
    request: &'a SearchRequest,
    /// Catalog indices of the legs chosen so far (never empty while extending).
    path: Vec<usize>,
    itineraries: Vec<Itinerary>,
    branches_explored: usize,
}

impl Dfs<'_> {
    /// Extend the current path with flights from `next` onwards.
    fn extend(&mut self, next: usize) {
        self.branches_explored += 1;

        let flights = self.flights;
        let Some(&last_idx) = self.path.last() else {
            return;
        };
        let last = &flights[last_idx];

        if last.destination() == self.request.destination {
            self.emit();
            return;
        }

        for idx in next..flights.len() {
            let candidate = &flights[idx];

            // Departure-ordered: once past the layover window, nothing later fits
            if candidate.layover_after(last) > self.config.max_layover() {
                break;
            }

            if self.can_follow(last, candidate) {
                self.path.push(idx);
                self.extend(idx + 1);
                self.path.pop();
            }
        }
    }

    /// Check whether `candidate` may be taken straight after `last`.
    fn can_follow(&self, last: &Flight, candidate: &Flight) -> bool {
        candidate.origin() == last.destination()
            && self.config.accepts_layover(candidate.layover_after(last))
            && !self.visited(candidate.destination())
            && candidate.carries(self.request.min_bags)
    }

    /// Returns true if `airport` is an origin or destination of any leg so far.
    fn visited(&self, airport: AirportCode) -> bool {
        self.path.iter().any(|&idx| {
            let leg = &self.flights[idx];
            leg.origin() == airport || leg.destination() == airport
        })
    }

    fn emit(&mut self) {
        let legs = self.path.iter().map(|&idx| self.flights[idx].clone()).collect();
        match Itinerary::new(legs) {
            Ok(itinerary) => {
                trace!(
                    route = %route(&itinerary),
                    legs = itinerary.leg_count(),
                    departure = %itinerary.departure_time(),
                    "found itinerary"
                );
                self.itineraries.push(itinerary);
            }
            // Paths only ever grow by connecting legs
            Err(e) => warn!(error = %e, "discarding malformed path"),
        }
    }
}

/// Airports of an itinerary joined as `AAA-BBB-CCC`.
fn route(itinerary: &Itinerary) -> String {
    itinerary
        .airports()
        .iter()
        .map(AirportCode::as_str)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::flight;

    #[test]
    fn route_lists_airports_in_order() {
        let itinerary = Itinerary::new(vec![
            flight("AB", "AAA", "BBB", "08:00", "09:00", 100, 2),
            flight("BC", "BBB", "CCC", "10:30", "11:30", 150, 1),
        ])
        .unwrap();

        assert_eq!(route(&itinerary), "AAA-BBB-CCC");
    }
}
