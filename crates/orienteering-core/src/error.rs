//! Error types for map mutation, queries and map loading.

use thiserror::Error;

/// Why a `connect` call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("waypoint {name} does not exist")]
    UnknownWaypoint { name: String },
    #[error("attempt to connect {from} to {to} in route {route} out of sequence (route ends at {last})")]
    OutOfSequence {
        from: String,
        to: String,
        route: String,
        last: String,
    },
}

/// Outcomes of a query that carry no numeric result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("route named {0} can't be found")]
    RouteNotFound(String),
    #[error("point named {0} can't be found")]
    WaypointNotFound(String),
    #[error("route {route} must have at least two points to calculate length (has {points})")]
    InsufficientLength { route: String, points: usize },
}

/// Failures while reading a map definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed map definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("waypoint {name} has marker {marker:?}, expected exactly one character")]
    InvalidMarker { name: String, marker: String },
}
