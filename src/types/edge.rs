//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// A directed connection between two locations.
/// The cost is the great-circle distance in meters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Id of the location the edge leaves.
    pub from: String,

    /// Id of the location the edge enters.
    pub to: String,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}
