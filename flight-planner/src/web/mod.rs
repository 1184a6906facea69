//! Web layer for the flight planner.
//!
//! Provides an HTTP endpoint for planning trips over a loaded catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{create_router, plan_trips, serve};
pub use state::AppState;
