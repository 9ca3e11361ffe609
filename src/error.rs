//! Error types returned by the router.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type RouterResult<T> = Result<T, RouterError>;

/// Everything that can go wrong when building or querying a
/// [`RouteGraph`](crate::RouteGraph).
///
/// Floating-point edge cases are not errors: out-of-range coordinates
/// passed straight to [`haversine::distance`](crate::haversine::distance)
/// produce NaN instead.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Two input locations share the same id. The graph cannot be
    /// built; fix the input data and construct a new one.
    #[error("duplicate location id: {0}")]
    DuplicateLocation(String),

    /// A query referenced an id that is not in the graph.
    #[error("unknown location id: {0}")]
    UnknownLocation(String),

    /// A coordinate is not finite or falls outside lat [-90, 90],
    /// lon [-180, 180].
    #[error("invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Location data could not be parsed.
    #[error("invalid location data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
