//! HTTP route handlers.

use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::StationKey;
use crate::planner::{Planner, RouteOutcome};
use crate::scoring::{
    CandidateError, RouteCandidate, RouteScore, Scorer, rank_by_felt_time, rank_candidates,
};
use crate::status::{NORMAL_PHRASES, annotate_delays};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/network-stations", get(network_stations))
        .route("/api/network-lines", get(network_lines))
        .route("/api/routes", get(find_routes))
        .route("/score-route", post(score_route))
        .route("/compare", post(compare))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every station, sorted by display name.
async fn network_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let mut seen = HashSet::new();
    let stations = state
        .network
        .all_stations()
        .into_iter()
        .filter_map(|name| {
            let key = StationKey::normalize(&name).ok()?;
            // Spelling variants of one station collapse to the first
            seen.insert(key.clone()).then(|| StationSummary {
                id: key.as_str().to_string(),
                name,
            })
        })
        .collect();

    Json(StationsResponse { stations })
}

/// Every line, sorted by display name.
async fn network_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .network
        .all_lines()
        .into_iter()
        .map(LineSummary::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Find routes between two stations, best felt time first.
async fn find_routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let origin = query.origin.trim();
    let destination = query.destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Both origin and destination are required".to_string(),
        });
    }

    let mut planner = Planner::new(&state.network, &state.search);
    if let Some(fallback) = &state.fallback {
        planner = planner.with_fallback(fallback.as_ref());
    }

    let mut routes = match planner.find_routes(origin, destination) {
        RouteOutcome::Found(routes) | RouteOutcome::Fallback(routes) => routes,
        RouteOutcome::NoPath => Vec::new(),
        RouteOutcome::UnknownOrigin => {
            return Err(AppError::NotFound {
                message: format!("Station not found: {origin}"),
            });
        }
        RouteOutcome::UnknownDestination => {
            return Err(AppError::NotFound {
                message: format!("Station not found: {destination}"),
            });
        }
        RouteOutcome::SameStation(_) => {
            return Err(AppError::BadRequest {
                message: "Origin and destination are the same station".to_string(),
            });
        }
    };

    annotate_delays(&mut routes, state.status.as_ref(), &NORMAL_PHRASES);

    let scorer = Scorer::new(&state.scoring, &state.transfers);
    let scored = routes
        .into_iter()
        .map(|route| {
            let score = scorer.score_route(route.segments());
            (route, score)
        })
        .collect();

    let routes: Vec<ScoredRoute> = rank_by_felt_time(scored)
        .into_iter()
        .map(|(route, score)| ScoredRoute::from_route(&route, score))
        .collect();

    info!(origin, destination, routes = routes.len(), "served routes");
    Ok(Json(RoutesResponse { routes }))
}

/// Score one candidate route.
async fn score_route(
    State(state): State<AppState>,
    Json(candidate): Json<RouteCandidate>,
) -> Result<Json<RouteScore>, AppError> {
    let segments = candidate.to_segments()?;
    let scorer = Scorer::new(&state.scoring, &state.transfers);
    Ok(Json(scorer.score_route(&segments)))
}

/// Score several candidates and order them by felt time.
async fn compare(
    State(state): State<AppState>,
    Json(candidates): Json<Vec<RouteCandidate>>,
) -> Result<Json<Vec<ComparedCandidate>>, AppError> {
    let scorer = Scorer::new(&state.scoring, &state.transfers);
    let ranked = rank_candidates(&scorer, candidates)?
        .into_iter()
        .map(|(candidate, score)| ComparedCandidate { candidate, score })
        .collect();

    Ok(Json(ranked))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<CandidateError> for AppError {
    fn from(e: CandidateError) -> Self {
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
        };

        warn!(%status, message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
