//! The core of the router library.
//!
//! The engine module builds a complete graph over a set of locations.
//! A shortest-path search is provided to find the walking route
//! between two of them, along with search and lookup over the location
//! metadata.

/// The router engine module.
pub mod engine {
    use std::cmp::Ordering;
    use std::collections::hash_map::Entry;
    use std::collections::{BinaryHeap, HashMap};

    use once_cell::sync::OnceCell;
    use ordered_float::OrderedFloat;
    use petgraph::{
        graph::NodeIndex,
        stable_graph::StableDiGraph,
        visit::{EdgeRef, IntoEdgeReferences},
    };
    use serde::Deserialize;

    use crate::{
        accuracy::GpsAccuracy,
        config::RouterConfig,
        edge::Edge,
        error::{RouterError, RouterResult},
        graph::build_edges,
        haversine,
        location::{AsCoordinate, Location, UserPosition},
        path::{PathResult, PositionRoute},
        walking::estimate_walking_time_at,
    };

    /// A RouteGraph holds the locations, the complete graph built over
    /// them, and a map from location id to its index in the graph.
    ///
    /// Graph nodes carry the position of their location in
    /// `locations`, which is also the tie-breaking order of the search.
    /// The type is immutable once built and can be shared across
    /// threads for concurrent queries.
    #[derive(Debug)]
    pub struct RouteGraph {
        locations: Vec<Location>,
        graph: StableDiGraph<usize, OrderedFloat<f64>>,
        node_indices: HashMap<String, NodeIndex>,
        config: RouterConfig,

        /// Lowercased name, category and description per location,
        /// built on the first search.
        search_index: OnceCell<Vec<[String; 3]>>,
    }

    /// Shape of the bundled campus data file.
    #[derive(Debug, Deserialize)]
    struct LocationData {
        buildings: Vec<Location>,
    }

    /// Frontier entry of the shortest-path search.
    #[derive(Copy, Clone, Eq, PartialEq)]
    struct State {
        cost: OrderedFloat<f64>,
        position: usize,
        node: NodeIndex,
    }

    // Min-heap by cost, then by insertion position.
    impl Ord for State {
        fn cmp(&self, other: &Self) -> Ordering {
            other
                .cost
                .cmp(&self.cost)
                .then_with(|| other.position.cmp(&self.position))
        }
    }

    impl PartialOrd for State {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl RouteGraph {
        /// Creates a new graph with the default [`RouterConfig`].
        ///
        /// Coordinates are not validated here; see
        /// [`Location::validate`].
        ///
        /// # Errors
        /// [`RouterError::DuplicateLocation`] if two locations share an
        /// id.
        pub fn new(locations: Vec<Location>) -> RouterResult<RouteGraph> {
            Self::with_config(locations, RouterConfig::default())
        }

        /// Creates a new graph with an explicit configuration.
        ///
        /// # Time Complexity
        /// *O*(*n^2*) time and space: every ordered pair of locations
        /// gets a precomputed edge.
        pub fn with_config(
            locations: Vec<Location>,
            config: RouterConfig,
        ) -> RouterResult<RouteGraph> {
            info!("[1/3] Indexing {} locations...", locations.len());
            let n = locations.len();
            let mut graph = StableDiGraph::with_capacity(n, n * n.saturating_sub(1));
            let mut node_indices = HashMap::with_capacity(n);
            for (position, location) in locations.iter().enumerate() {
                match node_indices.entry(location.id.clone()) {
                    Entry::Occupied(_) => {
                        warn!("Duplicate location id: {}", location.id);
                        return Err(RouterError::DuplicateLocation(location.id.clone()));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(graph.add_node(position));
                    }
                }
            }

            info!("[2/3] Building edges...");
            let mut indices = Vec::with_capacity(n);
            indices.extend(graph.node_indices());
            for (from, to, cost) in build_edges(&locations) {
                graph.add_edge(indices[from], indices[to], cost);
            }

            info!(
                "[3/3] Route graph ready: {} nodes, {} edges.",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(RouteGraph {
                locations,
                graph,
                node_indices,
                config,
                search_index: OnceCell::new(),
            })
        }

        /// Parses the campus data bundle and builds a graph with the
        /// default configuration.
        ///
        /// The expected shape is
        /// `{"buildings": [{"id", "name", "coordinates": [lat, lng], "department", "description", "hours"}]}`.
        /// Unlike [`RouteGraph::new`], every coordinate is validated.
        pub fn from_json(data: &str) -> RouterResult<RouteGraph> {
            Self::from_json_with_config(data, RouterConfig::default())
        }

        /// See [`RouteGraph::from_json`].
        pub fn from_json_with_config(data: &str, config: RouterConfig) -> RouterResult<RouteGraph> {
            let data: LocationData = serde_json::from_str(data)?;
            for location in &data.buildings {
                location.validate()?;
            }
            Self::with_config(data.buildings, config)
        }

        /// Returns the location with the given id.
        pub fn lookup(&self, id: &str) -> RouterResult<&Location> {
            let index = self.node_index(id)?;
            Ok(&self.locations[self.graph[index]])
        }

        /// Find the shortest walking path between two locations.
        ///
        /// Runs Dijkstra's algorithm from `start_id` and stops as soon
        /// as `end_id` is settled. Among equally distant frontier
        /// nodes the one that came first in the input is settled
        /// first, so results are reproducible.
        ///
        /// # Returns
        /// A [`PathResult`]. When `start_id == end_id` the path holds
        /// that single location with distance 0. If the end cannot be
        /// reached (only possible when a weight is NaN because of an
        /// out-of-range coordinate), `found` is false, `distance` is
        /// infinite and `path` holds the dangling chain that ends at
        /// `end_id`.
        ///
        /// # Errors
        /// [`RouterError::UnknownLocation`] if either id is absent.
        pub fn shortest_path(&self, start_id: &str, end_id: &str) -> RouterResult<PathResult> {
            let start = self.node_index(start_id)?;
            let end = self.node_index(end_id)?;
            debug!("Shortest path from {} to {}", start_id, end_id);

            let (dist, previous) = self.dijkstra(start, end);

            let target = self.graph[end];
            let mut path = Vec::new();
            let mut current = Some(target);
            while let Some(position) = current {
                path.push(self.locations[position].clone());
                current = previous[position];
            }
            path.reverse();

            let found = path.first().map_or(false, |location| location.id == start_id);
            if !found {
                warn!("No path from {} to {}", start_id, end_id);
            }
            let distance = dist[target];
            info!(
                "Route {} -> {}: {:.1} m over {} hops",
                start_id,
                end_id,
                distance,
                path.len().saturating_sub(1)
            );

            Ok(PathResult {
                path,
                distance,
                time: estimate_walking_time_at(distance, self.config.walking_speed_mps),
                found,
            })
        }

        /// Searches name, category and description, case-insensitively.
        ///
        /// Matches keep the input order. An empty or whitespace-only
        /// query matches nothing. Other queries are matched as given,
        /// including any surrounding whitespace.
        pub fn search(&self, query: &str) -> Vec<&Location> {
            if query.trim().is_empty() {
                return Vec::new();
            }
            let query = query.to_lowercase();
            let index = self.search_index.get_or_init(|| {
                debug!("Building search index");
                self.locations
                    .iter()
                    .map(|location| {
                        [
                            location.name.to_lowercase(),
                            location.category.to_lowercase(),
                            location.description.to_lowercase(),
                        ]
                    })
                    .collect()
            });

            self.locations
                .iter()
                .zip(index)
                .filter(|(_, fields)| fields.iter().any(|field| field.contains(&query)))
                .map(|(location, _)| location)
                .collect()
        }

        /// First location, in input order, whose name contains `name`
        /// case-insensitively.
        pub fn find_by_name(&self, name: &str) -> Option<&Location> {
            let name = name.to_lowercase();
            self.locations
                .iter()
                .find(|location| location.name.to_lowercase().contains(&name))
        }

        /// Straight-line route from a live position to a location.
        ///
        /// The position is not part of the graph, so this measures the
        /// direct distance instead of searching.
        pub fn route_from_position(
            &self,
            position: &UserPosition,
            destination_id: &str,
        ) -> RouterResult<PositionRoute> {
            let destination = self.lookup(destination_id)?;
            let distance = haversine::distance(position, destination);
            debug!(
                "Route from ({}, {}) to {}: {} m",
                position.latitude, position.longitude, destination_id, distance
            );

            Ok(PositionRoute {
                from: *position,
                to: destination.clone(),
                distance,
                time: estimate_walking_time_at(distance, self.config.walking_speed_mps),
                bearing: haversine::bearing(position, destination),
                accuracy: GpsAccuracy::from_meters(position.accuracy_m),
            })
        }

        /// True if `position` is within the configured campus radius.
        pub fn is_near_campus(&self, position: &impl AsCoordinate) -> bool {
            haversine::distance(position, &self.config.campus_center) < self.config.campus_radius_m
        }

        /// All locations in input order.
        pub fn locations(&self) -> &[Location] {
            &self.locations
        }

        /// Get the number of locations in the graph.
        pub fn len(&self) -> usize {
            self.locations.len()
        }

        /// True if the graph holds no locations.
        pub fn is_empty(&self) -> bool {
            self.locations.is_empty()
        }

        /// Return the number of edges in the graph.
        pub fn edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Weight of the edge `from -> to`, or [`None`] when the ids are
        /// equal.
        pub fn edge_weight(&self, from: &str, to: &str) -> RouterResult<Option<f64>> {
            let from = self.node_index(from)?;
            let to = self.node_index(to)?;
            Ok(self
                .graph
                .find_edge(from, to)
                .and_then(|edge| self.graph.edge_weight(edge))
                .map(|cost| cost.into_inner()))
        }

        /// Get all the edges in the graph.
        pub fn edges(&self) -> Vec<Edge> {
            self.graph
                .edge_references()
                .map(|edge| Edge {
                    from: self.locations[self.graph[edge.source()]].id.clone(),
                    to: self.locations[self.graph[edge.target()]].id.clone(),
                    cost: *edge.weight(),
                })
                .collect()
        }

        /// The configuration the graph was built with.
        pub fn config(&self) -> &RouterConfig {
            &self.config
        }

        fn node_index(&self, id: &str) -> RouterResult<NodeIndex> {
            self.node_indices
                .get(id)
                .copied()
                .ok_or_else(|| RouterError::UnknownLocation(id.to_string()))
        }

        /// Tentative distances and predecessors, by location position.
        fn dijkstra(&self, start: NodeIndex, end: NodeIndex) -> (Vec<f64>, Vec<Option<usize>>) {
            let n = self.locations.len();
            let mut dist = vec![f64::INFINITY; n];
            let mut previous: Vec<Option<usize>> = vec![None; n];
            let mut visited = vec![false; n];

            let source = self.graph[start];
            let target = self.graph[end];
            dist[source] = 0.0;

            let mut queue = BinaryHeap::new();
            queue.push(State {
                cost: OrderedFloat(0.0),
                position: source,
                node: start,
            });

            while let Some(State {
                cost,
                position,
                node,
            }) = queue.pop()
            {
                if visited[position] {
                    continue;
                }
                visited[position] = true;
                if position == target {
                    break;
                }

                for edge in self.graph.edges(node) {
                    let next = self.graph[edge.target()];
                    if visited[next] {
                        continue;
                    }
                    // NaN never compares less, so NaN edges are never taken.
                    let candidate = cost.into_inner() + edge.weight().into_inner();
                    if candidate < dist[next] {
                        dist[next] = candidate;
                        previous[next] = Some(position);
                        queue.push(State {
                            cost: OrderedFloat(candidate),
                            position: next,
                            node: edge.target(),
                        });
                    }
                }
            }

            (dist, previous)
        }
    }
}
