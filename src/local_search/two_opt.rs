//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! One sweep over every interior segment `[m, n]` with `1 ≤ m < n ≤ size-2`,
//! `n` in the outer loop. Each segment is reversed tentatively; the
//! reversal is kept when the route length drops strictly below the best
//! length seen so far and undone otherwise (first-improvement strategy).
//! Depot entries never move.
//!
//! # Complexity
//!
//! O(n³) per sweep: O(n²) segments, each scored by an O(n) length walk.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, instrument};

use super::SearchSummary;
use crate::config::LocalSearchConfig;
use crate::models::Route;

/// Runs one 2-opt sweep over `route` in place.
///
/// Returns `true` if at least one reversal was kept. The route length
/// never increases.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Route};
/// use u_delivery::local_search::two_opt_improve;
///
/// let mut route = Route::new();
/// for (i, j) in [(1.0, 1.0), (1.0, -1.0), (2.0, 0.0)] {
///     let _ = route.add(Coordinate::new(i, j));
/// }
/// let before = route.length();
/// assert!(two_opt_improve(&mut route));
/// assert!(route.length() < before);
/// ```
#[instrument(level = "debug", skip_all, fields(stops = route.num_stops()))]
pub fn two_opt_improve(route: &mut Route) -> bool {
    let mut best = route.length();
    let mut improved = false;

    for n in 1..route.last_index() {
        for m in 1..n {
            route.reverse_unchecked(m, n);
            let candidate = route.length();
            if candidate < best {
                debug!(m, n, length = candidate, "2-opt reversal accepted");
                best = candidate;
                improved = true;
            } else {
                route.reverse_unchecked(m, n);
            }
        }
    }

    improved
}

/// Repeats [`two_opt_improve`] until a sweep keeps no reversal or
/// `config.max_passes` sweeps have run.
///
/// # Examples
///
/// ```
/// use u_delivery::config::LocalSearchConfig;
/// use u_delivery::models::{Coordinate, Route};
/// use u_delivery::local_search::two_opt_until_stable;
///
/// let mut route = Route::new();
/// for (i, j) in [(0.0, 10.0), (10.0, 0.0), (0.0, 5.0), (10.0, 10.0)] {
///     let _ = route.add(Coordinate::new(i, j));
/// }
/// let summary = two_opt_until_stable(&mut route, &LocalSearchConfig::default());
/// assert!(summary.final_length <= summary.initial_length);
/// assert_eq!(summary.final_length, route.length());
/// ```
pub fn two_opt_until_stable(route: &mut Route, config: &LocalSearchConfig) -> SearchSummary {
    let initial_length = route.length();
    let mut passes = 0;
    let mut moves = 0;

    while passes < config.max_passes {
        passes += 1;
        if !two_opt_improve(route) {
            break;
        }
        moves += 1;
    }

    SearchSummary {
        passes,
        moves,
        initial_length,
        final_length: route.length(),
    }
}
