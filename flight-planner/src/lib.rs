//! Flight itinerary planner.
//!
//! Answers: "Which chains of scheduled flights take me from this airport
//! to that one, and what does each cost?"

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod planner;
pub mod web;

#[cfg(test)]
mod fixtures;
