//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::Iata;
use crate::planner::{
    Comparison, SearchConfig, SearchError, SearchMode, SearchRequest, plan_with_graph,
};
use crate::report::render_comparison;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/airports", get(list_airports))
        .route("/search", get(search))
        .route("/search/report", get(search_report))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every airport that appears in the catalog, sorted.
async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    Json(AirportsResponse {
        airports: state.catalog.airports().into_iter().collect(),
    })
}

/// Search and return both strategies' answers as JSON.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let (request, comparison) = run_search(&state, &params).await?;
    Ok(Json(SearchResponse::from_comparison(
        request.date,
        &comparison,
        &state.carriers,
    )))
}

/// Search and return the plain-text comparison report.
async fn search_report(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let (_, comparison) = run_search(&state, &params).await?;
    let text = render_comparison(&comparison, &state.carriers).map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response())
}

/// Parse the request, apply config overrides and run the planner.
async fn run_search(
    state: &AppState,
    params: &SearchParams,
) -> Result<(SearchRequest, Comparison), AppError> {
    let request = parse_request(params)?;
    let config = effective_config(&state.config, params);

    for airport in [request.origin, request.destination] {
        if !state.catalog.contains_airport(&airport) {
            return Err(AppError::NotFound {
                message: format!("Unknown airport: {airport}"),
            });
        }
    }

    let graph = state.graphs.graph_for(&state.catalog, request.date).await;
    let comparison = plan_with_graph(&graph, &request, &config)?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        date = %request.date,
        mode = %request.mode,
        found = comparison.uninformed.len(),
        states_explored = comparison.states_explored,
        "Search served"
    );

    Ok((request, comparison))
}

fn parse_request(params: &SearchParams) -> Result<SearchRequest, AppError> {
    let origin = Iata::parse_normalized(&params.from).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin IATA code: {}", params.from),
    })?;

    let destination = Iata::parse_normalized(&params.to).map_err(|_| AppError::BadRequest {
        message: format!("Invalid destination IATA code: {}", params.to),
    })?;

    let date = NaiveDate::parse_from_str(params.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!("Invalid date (expected YYYY-MM-DD): {}", params.date),
        }
    })?;

    let mode = params
        .mode
        .as_deref()
        .map(str::parse::<SearchMode>)
        .transpose()?
        .unwrap_or(SearchMode::Connected);

    Ok(SearchRequest::new(origin, destination, date, mode))
}

/// The server's defaults with any per-request overrides applied.
fn effective_config(defaults: &SearchConfig, params: &SearchParams) -> SearchConfig {
    SearchConfig {
        max_legs: params.max_legs.unwrap_or(defaults.max_legs),
        min_connection_mins: params
            .min_connection_mins
            .unwrap_or(defaults.min_connection_mins),
        max_connection_mins: params
            .max_connection_mins
            .unwrap_or(defaults.max_connection_mins),
        max_results: params.max_results.unwrap_or(defaults.max_results),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
