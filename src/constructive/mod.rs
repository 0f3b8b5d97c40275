//! Constructive heuristics for building initial delivery tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor ordering of a sequence, O(n²)
//! - [`greedy_route`] — Nearest-neighbor tour of a route's addresses from its depot

mod nearest_neighbor;

pub use nearest_neighbor::{greedy_route, nearest_neighbor_tour};
