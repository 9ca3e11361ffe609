//! Campus Routing Library.
//! Finds shortest walking paths between named campus locations.
//!
//! A [`RouteGraph`] is built once from a list of [`Location`]s and then
//! answers repeated shortest-path, search and lookup queries. The
//! distance and walking-time helpers in [`haversine`] and [`walking`]
//! are exposed on their own so a caller holding a live device position
//! can use them without going through the graph.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

mod types {
    pub mod edge;
    pub mod location;
    pub mod path;
    pub mod router;
}

mod utils {
    pub mod accuracy;
    pub mod generator;
    pub mod graph;
    pub mod haversine;
    pub mod walking;
}

pub use types::*;
pub use utils::*;

pub use config::RouterConfig;
pub use error::{RouterError, RouterResult};
pub use types::edge::Edge;
pub use types::location::{AsCoordinate, Coordinate, Location, UserPosition};
pub use types::path::{PathResult, PositionRoute, WalkingTime};
pub use types::router::engine::RouteGraph;
pub use utils::accuracy::GpsAccuracy;
