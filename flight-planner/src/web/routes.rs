//! HTTP route handlers.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};

use crate::domain::AirportCode;
use crate::planner::SearchRequest;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trips", get(search_trips))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, flights = state.engine.catalog().len(), "flight planner listening");
    axum::serve(listener, create_router(state)).await
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan trips between two airports, cheapest first.
async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<TripsQuery>,
) -> Result<Json<Vec<TripResult>>, AppError> {
    plan_trips(&state, &query).map(Json)
}

/// Run a trip search for an HTTP query.
///
/// Airport codes are case-insensitive. Codes that are well-formed but not
/// served by the catalog simply produce no trips.
pub fn plan_trips(state: &AppState, query: &TripsQuery) -> Result<Vec<TripResult>, AppError> {
    let origin = AirportCode::parse_normalized(&query.origin).map_err(|e| AppError::BadRequest {
        message: format!("origin: {e}"),
    })?;
    let destination =
        AirportCode::parse_normalized(&query.destination).map_err(|e| AppError::BadRequest {
            message: format!("destination: {e}"),
        })?;

    let request = SearchRequest::new(origin, destination, query.bags.unwrap_or(0));
    let trips = state.engine.plan(&request);

    Ok(trips.iter().map(TripResult::from_summary).collect())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
