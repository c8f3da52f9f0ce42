//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Route};
use crate::scoring::{CandidateSegment, RouteCandidate, RouteScore};

/// Colour for lines the dataset gives none.
pub const DEFAULT_LINE_COLOR: &str = "#666666";

/// Query for `/api/routes`.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesQuery {
    /// Origin station, as typed
    #[serde(default)]
    pub origin: String,

    /// Destination station, as typed
    #[serde(default)]
    pub destination: String,
}

/// A station in the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    /// Canonical station key
    pub id: String,

    /// Display name
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationSummary>,
}

/// A line in the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    pub id: String,

    /// English display name
    pub name: String,

    /// Localized display name, when known
    pub name_ja: Option<String>,

    /// Hex colour for rendering
    pub color: String,

    pub operator: String,
}

impl LineSummary {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            name_ja: line.name_ja.clone(),
            color: line
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_LINE_COLOR.to_string()),
            operator: line.operator.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
}

/// A found route with its felt-time score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRoute {
    /// Route name (e.g., "Via Ikebukuro")
    pub name: String,

    /// Segments in travel order, in candidate form
    pub segments: Vec<CandidateSegment>,

    /// Felt-time breakdown
    pub score: RouteScore,

    /// Felt time, in minutes to one decimal place
    pub total_minutes: f64,

    /// Time actually spent on trains, in minutes to one decimal place
    pub actual_ride_minutes: f64,
}

impl ScoredRoute {
    pub fn from_route(route: &Route, score: RouteScore) -> Self {
        Self {
            name: route.name.clone(),
            segments: route.segments().iter().map(CandidateSegment::from).collect(),
            total_minutes: round_minutes(score.total_seconds),
            actual_ride_minutes: round_minutes(route.ride_seconds()),
            score,
        }
    }
}

/// Seconds to minutes, rounded to one decimal place.
fn round_minutes(seconds: f64) -> f64 {
    (seconds / 6.0).round() / 10.0
}

#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<ScoredRoute>,
}

/// One entry of a `/compare` response.
#[derive(Debug, Clone, Serialize)]
pub struct ComparedCandidate {
    /// The candidate as submitted
    pub candidate: RouteCandidate,

    /// Its felt-time score
    pub score: RouteScore,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
