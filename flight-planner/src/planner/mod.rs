//! Itinerary planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which chains of flights take me from here to there with my bags?"
//!
//! The search enumerates every valid chain over a departure-ordered
//! catalog, then each chain is summarized and ranked by price.

mod config;
mod rank;
mod search;
mod summary;


pub use config::SearchConfig;
pub use rank::rank_by_price;
pub use search::{SearchEngine, SearchError, SearchRequest, SearchResult};
pub use summary::{TripSummary, format_travel_time, summarize};
