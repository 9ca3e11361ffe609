//! Helper functons for working with graphs.

use ordered_float::OrderedFloat;

use crate::haversine;
use crate::location::Location;

/// Build the edges of the complete graph over `locations`.
///
/// Every ordered pair of distinct locations is connected. The distance
/// for a pair is always computed with the lower-positioned location as
/// the first argument, so both directions carry bit-identical weights.
///
/// # Returns
/// A vector of edges in the format of (from_position, to_position,
/// weight), grouped by `from` in input order.
///
/// # Time Complexity
/// *O*(*n^2*) in time and space. Campus data sets hold tens to low
/// hundreds of locations, well within that bound.
pub fn build_edges(locations: &[Location]) -> Vec<(usize, usize, OrderedFloat<f64>)> {
    let n = locations.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, from) in locations.iter().enumerate() {
        for (j, to) in locations.iter().enumerate() {
            if i == j {
                continue;
            }
            let cost = if i < j {
                haversine::distance(from, to)
            } else {
                haversine::distance(to, from)
            };
            edges.push((i, j, OrderedFloat(cost)));
        }
    }
    edges
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use crate::location::Coordinate;

    #[test]
    fn test_complete_graph_edge_count() {
        let locations: Vec<Location> = (0..5)
            .map(|i| Location::new(i.to_string(), Coordinate::new(6.89, 3.72 + i as f64 * 0.001)))
            .collect();
        let edges = build_edges(&locations);
        assert_eq!(edges.len(), 5 * 4);
        assert!(edges.iter().all(|(from, to, _)| from != to));
        assert_eq!((edges[0].0, edges[0].1), (0, 1));
        assert_eq!((edges[4].0, edges[4].1), (1, 0));
    }

    #[test]
    fn test_symmetric_weights() {
        let locations = vec![
            Location::new("a", Coordinate::new(37.777843, -122.468207)),
            Location::new("b", Coordinate::new(37.778339, -122.460395)),
            Location::new("c", Coordinate::new(37.780596, -122.434904)),
        ];
        let edges = build_edges(&locations);
        for (from, to, cost) in &edges {
            let reverse = edges
                .iter()
                .find(|(f, t, _)| f == to && t == from)
                .map(|(_, _, c)| *c);
            assert_eq!(reverse, Some(*cost));
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert!(build_edges(&[]).is_empty());
        assert!(build_edges(&[Location::new("a", Coordinate::new(0.0, 0.0))]).is_empty());
    }
}
