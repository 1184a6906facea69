//! Itinerary types.
//!
//! An `Itinerary` represents a complete trip from origin to destination,
//! made of one or more connecting flights.

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, Flight};

/// A complete trip from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of next)
///
/// Layover windows, baggage capacity and airport revisits are search
/// rules; they are enforced by the planner, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Flight>,
}

impl Itinerary {
    /// Constructs an itinerary from an ordered list of legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The legs list is empty
    /// - Legs don't connect (destination != next origin)
    pub fn new(legs: Vec<Flight>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let arrives_at = window[0].destination();
            let departs_from = window[1].origin();
            if arrives_at != departs_from {
                return Err(DomainError::LegsNotConnected(arrives_at, departs_from));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Flight] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Flight {
        // Non-empty by construction
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Flight {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the airport the trip starts from.
    pub fn origin(&self) -> AirportCode {
        self.first_leg().origin()
    }

    /// Returns the airport the trip ends at.
    pub fn destination(&self) -> AirportCode {
        self.last_leg().destination()
    }

    /// Returns the departure time of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.first_leg().departure()
    }

    /// Returns the arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.last_leg().arrival()
    }

    /// Returns the time from first departure to last arrival,
    /// layovers included.
    pub fn total_duration(&self) -> Duration {
        self.arrival_time().signed_duration_since(self.departure_time())
    }

    /// Returns the layover before each connecting leg, in order.
    pub fn layovers(&self) -> Vec<Duration> {
        self.legs
            .windows(2)
            .map(|w| w[1].layover_after(&w[0]))
            .collect()
    }

    /// Returns the airports visited, in order of first appearance.
    pub fn airports(&self) -> Vec<AirportCode> {
        let mut airports = vec![self.origin()];
        for leg in &self.legs {
            if !airports.contains(&leg.destination()) {
                airports.push(leg.destination());
            }
        }
        airports
    }
}
