//! Deduplicated ordered address lists.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use super::Coordinate;
use crate::config::check_tolerance;
use crate::error::{Result, RouteError};

/// Outcome of adding a coordinate to a [`Sequence`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The coordinate was stored at the given index.
    Added(usize),
    /// The coordinate coincides with the member at `existing`; nothing
    /// changed.
    Rejected {
        /// Index of the coinciding member.
        existing: usize,
    },
}

impl Insertion {
    /// Returns `true` if the coordinate was stored.
    pub fn is_added(&self) -> bool {
        matches!(self, Insertion::Added(_))
    }
}

/// An ordered list of coordinates in which no two members coincide.
///
/// Insertion order is the visiting order: [`Sequence::length`] walks the
/// members front to back.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Insertion, Sequence};
///
/// let mut seq = Sequence::new();
/// assert_eq!(seq.add(Coordinate::new(5.0, 5.0)), Insertion::Added(0));
/// assert_eq!(seq.add(Coordinate::new(0.0, 5.0)), Insertion::Added(1));
/// assert_eq!(
///     seq.add(Coordinate::new(5.0, 5.0)),
///     Insertion::Rejected { existing: 0 }
/// );
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.closest_to(&Coordinate::new(5.0, 0.0)).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    points: Vec<Coordinate>,
    #[serde(skip)]
    tolerance: f64,
}

impl Sequence {
    /// Creates an empty sequence using exact coincidence.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            tolerance: 0.0,
        }
    }

    /// Creates an empty sequence with the given coincidence tolerance.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        check_tolerance(tolerance)?;
        Ok(Self {
            points: Vec::new(),
            tolerance,
        })
    }

    /// Wraps points that are already known to be acceptable, skipping the
    /// duplicate check.
    pub(crate) fn from_raw(points: Vec<Coordinate>, tolerance: f64) -> Self {
        Self { points, tolerance }
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<Coordinate> {
        &mut self.points
    }

    /// Coincidence tolerance used for deduplication and membership.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the sequence has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the member at `index`.
    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.points.get(index)
    }

    /// Members in order.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterates over members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }

    /// Index of the first member coinciding with `c`.
    pub fn position_of(&self, c: &Coordinate) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.coincides(c, self.tolerance))
    }

    /// Returns `true` if some member coincides with `c`.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.position_of(c).is_some()
    }

    /// Appends `c` unless it coincides with an existing member.
    pub fn add(&mut self, c: Coordinate) -> Insertion {
        if let Some(existing) = self.position_of(&c) {
            debug!(
                address = %c,
                member = %self.points[existing],
                "address not added; identical to current member"
            );
            return Insertion::Rejected { existing };
        }
        self.points.push(c);
        Insertion::Added(self.points.len() - 1)
    }

    /// Inserts `c` before position `pos` unless it coincides with an
    /// existing member.
    pub fn insert_at(&mut self, c: Coordinate, pos: usize) -> Result<Insertion> {
        if pos > self.points.len() {
            return Err(RouteError::IndexOutOfBounds {
                index: pos,
                len: self.points.len(),
            });
        }
        if let Some(existing) = self.position_of(&c) {
            debug!(address = %c, existing, "address not inserted; identical to current member");
            return Ok(Insertion::Rejected { existing });
        }
        self.points.insert(pos, c);
        Ok(Insertion::Added(pos))
    }

    /// Removes and returns the member at `pos`.
    pub fn erase_at(&mut self, pos: usize) -> Result<Coordinate> {
        self.check_index(pos)?;
        Ok(self.points.remove(pos))
    }

    /// Removes the inclusive range `[start, end]` and returns it in order.
    pub fn erase_range(&mut self, start: usize, end: usize) -> Result<Vec<Coordinate>> {
        self.check_range(start, end)?;
        Ok(self.points.drain(start..=end).collect())
    }

    /// Total length travelling the members in order.
    ///
    /// A single member has length zero.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptySequence`] if there are no members.
    pub fn length(&self) -> Result<f64> {
        if self.points.is_empty() {
            return Err(RouteError::EmptySequence);
        }
        Ok(path_length(&self.points))
    }

    /// Index of the member nearest to `target`.
    ///
    /// Ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptySequence`] if there are no members, and
    /// [`RouteError::CoincidentTarget`] if `target` coincides with a member.
    pub fn closest_to(&self, target: &Coordinate) -> Result<usize> {
        if let Some(index) = self.position_of(target) {
            return Err(RouteError::CoincidentTarget { index });
        }
        let index = nearest_index(&self.points, target).ok_or(RouteError::EmptySequence)?;
        trace!(target = %target, closest = %self.points[index], index, "closest member");
        Ok(index)
    }

    /// Greedy nearest-neighbor ordering starting from the first member.
    ///
    /// See [`nearest_neighbor_tour`](crate::constructive::nearest_neighbor_tour).
    pub fn nearest_neighbor_tour(&self) -> Result<Sequence> {
        crate::constructive::nearest_neighbor_tour(self)
    }

    /// Picks a member uniformly at random.
    ///
    /// Returns `None` if the sequence is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Coordinate> {
        self.points.choose(rng)
    }

    /// Returns `true` if any member coincides with any coordinate of
    /// `subset`.
    pub fn contains_any_of(&self, subset: &[Coordinate]) -> bool {
        matches_any(&self.points, subset, self.tolerance)
    }

    /// Returns `true` if any member in the inclusive range `[start, end]`
    /// coincides with any coordinate of `subset`.
    pub fn any_in_range_matches(
        &self,
        subset: &[Coordinate],
        start: usize,
        end: usize,
    ) -> Result<bool> {
        self.check_range(start, end)?;
        Ok(matches_any(&self.points[start..=end], subset, self.tolerance))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(RouteError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(RouteError::InvalidRange { start, end });
        }
        self.check_index(end)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Coordinate> for Sequence {
    /// Collects with exact coincidence, dropping duplicates.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        for c in iter {
            let _ = seq.add(c);
        }
        seq
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.points {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Sum of consecutive distances along `points`.
pub(crate) fn path_length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Index of the member nearest to `target`, or `None` when `points` is
/// empty. Strict less-than, so the first minimal index wins.
pub(crate) fn nearest_index(points: &[Coordinate], target: &Coordinate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, p) in points.iter().enumerate() {
        let d = target.distance_to(p);
        if best.is_none_or(|(_, min)| d < min) {
            best = Some((index, d));
        }
    }
    best.map(|(index, _)| index)
}

fn matches_any(points: &[Coordinate], subset: &[Coordinate], tolerance: f64) -> bool {
    points
        .iter()
        .any(|p| subset.iter().any(|s| p.coincides(s, tolerance)))
}
