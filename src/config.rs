//! Router configuration.
//!
//! The defaults describe the campus the bundled building data was
//! collected on. Callers serving a different campus deserialize their
//! own [`RouterConfig`] and pass it to
//! [`RouteGraph::with_config`](crate::RouteGraph::with_config).

use serde::Deserialize;

use crate::location::Coordinate;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Average adult walking pace.
pub const WALKING_SPEED_MPS: f64 = 1.4;

/// Centre of the default campus.
pub const CAMPUS_CENTER: Coordinate = Coordinate {
    latitude: 6.8905,
    longitude: 3.7200,
};

/// A live position further than this from the campus centre is
/// considered off campus.
pub const CAMPUS_RADIUS_METERS: f64 = 3000.0;

/// Tunables for a [`RouteGraph`](crate::RouteGraph).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Speed used to turn distances into walking times.
    pub walking_speed_mps: f64,

    /// Reference point for [`RouteGraph::is_near_campus`](crate::RouteGraph::is_near_campus),
    /// written as `[lat, lng]` like location coordinates.
    #[serde(with = "crate::types::location::lat_lng_pair")]
    pub campus_center: Coordinate,

    /// Radius around `campus_center`, in meters.
    pub campus_radius_m: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            walking_speed_mps: WALKING_SPEED_MPS,
            campus_center: CAMPUS_CENTER,
            campus_radius_m: CAMPUS_RADIUS_METERS,
        }
    }
}
