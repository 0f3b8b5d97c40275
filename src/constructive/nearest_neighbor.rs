//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the first member, always move to
//! the nearest member not yet visited. Ties go to the member that appears
//! first in the remaining pool.
//!
//! # Complexity
//!
//! O(n²) where n = number of addresses.

use tracing::trace;

use crate::error::{Result, RouteError};
use crate::models::{nearest_index, Coordinate, Route, Sequence};

/// Orders the members of `sequence` by the nearest-neighbor heuristic,
/// starting from its first member.
///
/// The result is a permutation of the input: same members, same length,
/// first member unchanged. The input is not modified.
///
/// # Errors
///
/// [`RouteError::EmptySequence`] if `sequence` has no members.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Sequence};
/// use u_delivery::constructive::nearest_neighbor_tour;
///
/// let seq: Sequence = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(10.0, 0.0),
///     Coordinate::new(1.0, 0.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let tour = nearest_neighbor_tour(&seq).unwrap();
/// assert_eq!(
///     tour.as_slice(),
///     &[
///         Coordinate::new(0.0, 0.0),
///         Coordinate::new(1.0, 0.0),
///         Coordinate::new(10.0, 0.0),
///     ]
/// );
/// ```
pub fn nearest_neighbor_tour(sequence: &Sequence) -> Result<Sequence> {
    let (&start, rest) = sequence
        .as_slice()
        .split_first()
        .ok_or(RouteError::EmptySequence)?;
    let tour = tour_from(start, rest.to_vec());
    Ok(Sequence::from_raw(tour, sequence.tolerance()))
}

/// Builds a new route visiting `route`'s addresses in nearest-neighbor
/// order from the depot, returning to the depot at the end.
///
/// The source route is left untouched.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Route};
/// use u_delivery::constructive::greedy_route;
///
/// let mut route = Route::new();
/// let _ = route.add(Coordinate::new(0.0, 5.0));
/// let _ = route.add(Coordinate::new(5.0, 0.0));
/// let _ = route.add(Coordinate::new(5.0, 5.0));
///
/// let tour = greedy_route(&route);
/// assert_eq!(tour.size(), 5);
/// assert!((tour.length() - 20.0).abs() < 1e-10);
/// ```
pub fn greedy_route(route: &Route) -> Route {
    let depot = route.depot();
    let mut tour = tour_from(depot, route.interior().to_vec());
    tour.push(depot);
    Route::from_tour(depot, Sequence::from_raw(tour, route.tolerance()))
}

fn tour_from(start: Coordinate, mut remaining: Vec<Coordinate>) -> Vec<Coordinate> {
    let mut tour = Vec::with_capacity(remaining.len() + 1);
    tour.push(start);
    let mut here = start;
    while let Some(next) = nearest_index(&remaining, &here) {
        here = remaining.remove(next);
        trace!(next = %here, left = remaining.len(), "nearest neighbor");
        tour.push(here);
    }
    tour
}
