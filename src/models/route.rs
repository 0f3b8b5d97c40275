//! Depot-anchored delivery routes.

use std::fmt;

use serde::Serialize;

use super::sequence::path_length;
use super::{Coordinate, Insertion, Sequence};
use crate::config::RouteConfig;
use crate::error::{Result, RouteError};

/// An ordered tour that starts and ends at a depot.
///
/// The depot is stored at index 0 and at the last index, so a route always
/// holds at least two entries. Addresses added later land between the two
/// depot entries, and no public operation moves or removes either of them.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Route};
///
/// let mut route = Route::new();
/// let _ = route.add(Coordinate::new(0.0, 5.0));
/// let _ = route.add(Coordinate::new(5.0, 5.0));
/// assert_eq!(route.size(), 4);
/// assert_eq!(route.num_stops(), 2);
/// assert_eq!(route.get(0), Some(&Coordinate::ORIGIN));
/// assert_eq!(route.get(3), Some(&Coordinate::ORIGIN));
/// assert!((route.length() - (5.0 + 5.0 + 50.0_f64.sqrt())).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Route {
    stops: Sequence,
    #[serde(skip)]
    depot: Coordinate,
}

impl Route {
    /// Creates an empty route anchored at the origin.
    pub fn new() -> Self {
        Self::empty(Coordinate::ORIGIN, 0.0)
    }

    /// Creates an empty route from a validated configuration.
    pub fn with_config(config: &RouteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config.depot, config.tolerance))
    }

    /// Creates a route and adds each of `stops` in order.
    ///
    /// Returns the route together with the number of stops rejected as
    /// duplicates.
    pub fn from_stops<I>(config: &RouteConfig, stops: I) -> Result<(Self, usize)>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut route = Self::with_config(config)?;
        let rejected = stops
            .into_iter()
            .filter(|&c| !route.add(c).is_added())
            .count();
        Ok((route, rejected))
    }

    fn empty(depot: Coordinate, tolerance: f64) -> Self {
        Self {
            stops: Sequence::from_raw(vec![depot, depot], tolerance),
            depot,
        }
    }

    /// Wraps a full tour whose first and last entries are already the
    /// depot.
    pub(crate) fn from_tour(depot: Coordinate, tour: Sequence) -> Self {
        debug_assert!(tour.len() >= 2);
        Self { stops: tour, depot }
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<Coordinate> {
        self.stops.points_mut()
    }

    /// The depot coordinate.
    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Coincidence tolerance used for deduplication and membership.
    pub fn tolerance(&self) -> f64 {
        self.stops.tolerance()
    }

    /// Number of entries including both depot entries.
    pub fn size(&self) -> usize {
        self.stops.len()
    }

    /// Number of addresses between the depot entries.
    pub fn num_stops(&self) -> usize {
        self.stops.len() - 2
    }

    /// Index of the trailing depot entry.
    pub fn last_index(&self) -> usize {
        self.stops.len() - 1
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.stops.get(index)
    }

    /// All entries, depot first and last.
    pub fn as_slice(&self) -> &[Coordinate] {
        self.stops.as_slice()
    }

    /// The addresses between the depot entries.
    pub fn interior(&self) -> &[Coordinate] {
        let points = self.stops.as_slice();
        &points[1..points.len() - 1]
    }

    /// Read-only view of the underlying sequence.
    pub fn as_sequence(&self) -> &Sequence {
        &self.stops
    }

    /// Iterates over all entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.stops.iter()
    }

    /// Returns `true` if an entry coincides with `c`.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.stops.contains(c)
    }

    /// Adds an address just before the trailing depot.
    ///
    /// Addresses coinciding with an existing entry, the depot included,
    /// are rejected.
    pub fn add(&mut self, c: Coordinate) -> Insertion {
        self.stops.points_mut().pop();
        let outcome = self.stops.add(c);
        self.stops.points_mut().push(self.depot);
        outcome
    }

    /// Removes every address, leaving only the two depot entries.
    pub fn clear(&mut self) {
        let points = self.stops.points_mut();
        points.clear();
        points.push(self.depot);
        points.push(self.depot);
    }

    /// Total length from the depot through every address and back.
    pub fn length(&self) -> f64 {
        path_length(self.stops.as_slice())
    }

    /// Nearest-neighbor reordering of this route's addresses.
    ///
    /// See [`greedy_route`](crate::constructive::greedy_route).
    pub fn greedy_tour(&self) -> Route {
        crate::constructive::greedy_route(self)
    }

    /// Reverses the inclusive interior range `[i, j]` in place.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidRange`] if `i > j`, and
    /// [`RouteError::DepotPosition`] or [`RouteError::IndexOutOfBounds`]
    /// if either bound is not an interior index.
    pub fn reverse_segment(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_segment(i, j)?;
        self.reverse_unchecked(i, j);
        Ok(())
    }

    pub(crate) fn reverse_unchecked(&mut self, i: usize, j: usize) {
        self.stops.points_mut()[i..=j].reverse();
    }

    /// Checks that `[start, end]` is a non-empty range of interior
    /// indices.
    pub(crate) fn check_segment(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(RouteError::InvalidRange { start, end });
        }
        self.check_interior(start)?;
        self.check_interior(end)
    }

    fn check_interior(&self, index: usize) -> Result<()> {
        let len = self.stops.len();
        if index >= len {
            return Err(RouteError::IndexOutOfBounds { index, len });
        }
        if index == 0 || index == len - 1 {
            return Err(RouteError::DepotPosition { index });
        }
        Ok(())
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.stops, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(i: f64, j: f64) -> Coordinate {
        Coordinate::new(i, j)
    }

    fn square_route() -> Route {
        let mut r = Route::new();
        for p in [c(0.0, 5.0), c(5.0, 0.0), c(5.0, 5.0)] {
            assert!(r.add(p).is_added());
        }
        r
    }

    fn assert_depots(r: &Route) {
        assert!(r.size() >= 2);
        assert_eq!(r.as_slice()[0], r.depot());
        assert_eq!(r.as_slice()[r.last_index()], r.depot());
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert_eq!(r.size(), 2);
        assert_eq!(r.num_stops(), 0);
        assert!(r.interior().is_empty());
        assert_eq!(r.length(), 0.0);
        assert_depots(&r);
    }

    #[test]
    fn test_route_add_lands_before_depot() {
        let r = square_route();
        assert_eq!(r.size(), 5);
        assert_eq!(r.interior(), &[c(0.0, 5.0), c(5.0, 0.0), c(5.0, 5.0)]);
        assert_depots(&r);
    }

    #[test]
    fn test_route_add_rejects_duplicates_and_depot() {
        let mut r = square_route();
        assert_eq!(r.add(c(5.0, 0.0)), Insertion::Rejected { existing: 2 });
        assert_eq!(r.add(Coordinate::ORIGIN), Insertion::Rejected { existing: 0 });
        assert_eq!(r.size(), 5);
        assert_depots(&r);
    }

    #[test]
    fn test_route_length() {
        let r = square_route();
        let expected = 10.0 + 2.0 * 50.0_f64.sqrt();
        assert!((r.length() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_route_clear() {
        let mut r = square_route();
        r.clear();
        assert_eq!(r.size(), 2);
        assert_depots(&r);
        assert!(r.add(c(1.0, 1.0)).is_added());
        assert_eq!(r.size(), 3);
    }

    #[test]
    fn test_route_custom_depot() {
        let config = RouteConfig::default().with_depot(c(10.0, 10.0));
        let mut r = Route::with_config(&config).expect("valid config");
        assert!(r.add(c(10.0, 13.0)).is_added());
        assert_eq!(r.depot(), c(10.0, 10.0));
        assert_depots(&r);
        assert!((r.length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_with_invalid_config() {
        let config = RouteConfig::default().with_tolerance(-1.0);
        assert_eq!(
            Route::with_config(&config),
            Err(RouteError::InvalidTolerance(-1.0))
        );
    }

    #[test]
    fn test_route_from_stops_counts_rejections() {
        let stops = [c(1.0, 0.0), c(2.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)];
        let (r, rejected) = Route::from_stops(&RouteConfig::default(), stops).expect("valid");
        assert_eq!(rejected, 2);
        assert_eq!(r.interior(), &[c(1.0, 0.0), c(2.0, 0.0)]);
    }

    #[test]
    fn test_reverse_segment() {
        let mut r = square_route();
        r.reverse_segment(1, 3).expect("interior");
        assert_eq!(r.interior(), &[c(5.0, 5.0), c(5.0, 0.0), c(0.0, 5.0)]);
        r.reverse_segment(2, 2).expect("interior");
        assert_eq!(r.interior(), &[c(5.0, 5.0), c(5.0, 0.0), c(0.0, 5.0)]);
        assert_depots(&r);
    }

    #[test]
    fn test_reverse_segment_rejects_depot_and_bad_ranges() {
        let mut r = square_route();
        assert_eq!(r.reverse_segment(0, 2), Err(RouteError::DepotPosition { index: 0 }));
        assert_eq!(r.reverse_segment(1, 4), Err(RouteError::DepotPosition { index: 4 }));
        assert_eq!(
            r.reverse_segment(1, 7),
            Err(RouteError::IndexOutOfBounds { index: 7, len: 5 })
        );
        assert_eq!(
            r.reverse_segment(3, 1),
            Err(RouteError::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(r, square_route());
    }

    #[test]
    fn test_route_display() {
        let mut r = Route::new();
        let _ = r.add(c(0.0, 5.0));
        assert_eq!(
            r.to_string(),
            "(0.000000,0.000000)(0.000000,5.000000)(0.000000,0.000000)"
        );
    }

    #[test]
    fn test_route_serialize() {
        let mut r = Route::new();
        let _ = r.add(c(1.0, 2.0));
        let json = serde_json::to_string(&r).expect("serialize");
        assert_eq!(
            json,
            r#"[{"i":0.0,"j":0.0},{"i":1.0,"j":2.0},{"i":0.0,"j":0.0}]"#
        );
    }
}
