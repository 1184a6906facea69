//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from file and argument errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Flight fields violate a record invariant
    #[error("invalid flight: {0}")]
    InvalidFlight(&'static str),

    /// Consecutive legs don't share an airport
    #[error("legs do not connect: arrives at {0}, next departs from {1}")]
    LegsNotConnected(AirportCode, AirportCode),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,
}
