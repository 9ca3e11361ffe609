//! Value types handed back to the presentation layer.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::accuracy::GpsAccuracy;
use crate::location::{Location, UserPosition};

/// Estimated time to walk a distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WalkingTime {
    pub seconds: i64,
    pub minutes: i64,

    /// Label shown in the route panel, e.g. `"4 min"`.
    pub label: String,
}

impl WalkingTime {
    /// Builds the estimate for a whole number of seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        let minutes = (seconds as f64 / 60.0).round() as i64;
        WalkingTime {
            seconds,
            minutes,
            label: format!("{} min", minutes),
        }
    }

    /// Saturates at [`Duration::MAX`] for unreachable targets.
    pub fn as_duration(&self) -> Duration {
        Duration::try_seconds(self.seconds).unwrap_or(Duration::MAX)
    }

    /// Expected arrival when leaving at `departure`, or [`None`] if it
    /// is beyond the representable range.
    pub fn arrival_at(&self, departure: DateTime<Utc>) -> Option<DateTime<Utc>> {
        departure.checked_add_signed(self.as_duration())
    }
}

impl fmt::Display for WalkingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The answer to a [`RouteGraph::shortest_path`](crate::RouteGraph::shortest_path)
/// query.
///
/// `found` is true exactly when `path` is non-empty and starts at the
/// requested start location. When it is false, `path` holds whatever
/// chain the predecessor walk produced and `distance` is infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Locations from start to end, both inclusive.
    pub path: Vec<Location>,

    /// Total length in meters.
    pub distance: f64,

    pub time: WalkingTime,

    pub found: bool,
}

impl PathResult {
    /// Ids along the path, in walking order.
    pub fn ids(&self) -> Vec<&str> {
        self.path.iter().map(|location| location.id.as_str()).collect()
    }
}

/// A straight-line route from a live position to a location.
///
/// The position is not a graph vertex, so no search is involved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRoute {
    pub from: UserPosition,
    pub to: Location,

    /// Meters.
    pub distance: f64,

    pub time: WalkingTime,

    /// Initial compass bearing towards `to`, degrees in [0, 360).
    pub bearing: f64,

    pub accuracy: GpsAccuracy,
}
