//! Inter-route segment exchange (cross-exchange).
//!
//! # Algorithm
//!
//! Swaps an interior segment of one route with an interior segment of
//! another, optionally reversing either segment on the way:
//!
//! ```text
//! BEFORE:
//!    A: depot ... (a) -> [m ... n] -> (b) ... depot
//!    B: depot ... (x) -> [j ... i] -> (y) ... depot
//!
//! AFTER:
//!    A: depot ... (a) -> [j ... i] -> (b) ... depot
//!    B: depot ... (x) -> [m ... n] -> (y) ... depot
//! ```
//!
//! [`cross_exchange`] scores every pair of segments of length two or more
//! under all four reversal combinations by applying the exchange, measuring
//! the combined length and undoing it. The single best strictly improving
//! candidate is committed. Segments that contain a protected address are
//! never moved.
//!
//! # Complexity
//!
//! O(n₁² × n₂² × (n₁ + n₂)) per step.
//!
//! # Reference
//!
//! Taillard, É., Badeau, P., Gendreau, M., Guertin, F. & Potvin, J.-Y.
//! (1997). "A Tabu Search Heuristic for the Vehicle Routing Problem with
//! Soft Time Windows", *Transportation Science* 31(2), 170-186.

use tracing::{debug, instrument};

use super::SearchSummary;
use crate::config::LocalSearchConfig;
use crate::error::Result;
use crate::models::{Coordinate, Route};

/// Parameters of a segment exchange between two routes.
///
/// `my_*` bounds refer to the receiver, `other_*` bounds to the second
/// route. Both ranges are inclusive and must lie strictly between the
/// depot entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentExchange {
    /// First index of the receiver's segment.
    pub my_start: usize,
    /// Last index of the receiver's segment.
    pub my_end: usize,
    /// First index of the other route's segment.
    pub other_start: usize,
    /// Last index of the other route's segment.
    pub other_end: usize,
    /// Reverse the receiver's segment before it is inserted into the
    /// other route.
    pub reverse_mine: bool,
    /// Reverse the other route's segment before it is inserted into the
    /// receiver.
    pub reverse_other: bool,
}

impl SegmentExchange {
    /// Plain exchange of `[my_start, my_end]` with
    /// `[other_start, other_end]`, no reversal.
    pub fn new(my_start: usize, my_end: usize, other_start: usize, other_end: usize) -> Self {
        Self {
            my_start,
            my_end,
            other_start,
            other_end,
            reverse_mine: false,
            reverse_other: false,
        }
    }

    /// Sets both reversal flags.
    pub fn with_reversal(mut self, reverse_mine: bool, reverse_other: bool) -> Self {
        self.reverse_mine = reverse_mine;
        self.reverse_other = reverse_other;
        self
    }

    /// The exchange that undoes this one.
    ///
    /// After the exchange the receiver holds the other segment at
    /// `[my_start, my_start + (other_end - other_start)]` and vice versa,
    /// so the end indices are shifted by the segment lengths and the
    /// reversal flags trade places.
    pub fn inverse(&self) -> Self {
        Self {
            my_start: self.my_start,
            my_end: self.my_start + (self.other_end - self.other_start),
            other_start: self.other_start,
            other_end: self.other_start + (self.my_end - self.my_start),
            reverse_mine: self.reverse_other,
            reverse_other: self.reverse_mine,
        }
    }
}

/// An exchange committed by [`cross_exchange`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeImprovement {
    /// The applied exchange, relative to the routes before the call.
    pub exchange: SegmentExchange,
    /// Combined length of both routes before the exchange.
    pub before: f64,
    /// Combined length of both routes after the exchange.
    pub after: f64,
}

impl Route {
    /// Swaps a segment of this route with a segment of `other`.
    ///
    /// The receiver's segment is inserted into `other` at
    /// `mv.other_start` and `other`'s segment into the receiver at
    /// `mv.my_start`, each reversed first when its flag is set.
    ///
    /// # Errors
    ///
    /// Fails without modifying either route if a range is reversed or any
    /// bound is a depot position or out of bounds. Moved addresses are not
    /// checked for duplicates: both routes are expected to share a depot
    /// and tolerance and to hold disjoint addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_delivery::local_search::SegmentExchange;
    /// use u_delivery::models::{Coordinate, Route};
    ///
    /// let mut a = Route::new();
    /// let mut b = Route::new();
    /// for k in 1..=3 {
    ///     let _ = a.add(Coordinate::new(k as f64, 0.0));
    ///     let _ = b.add(Coordinate::new(0.0, k as f64));
    /// }
    ///
    /// let mv = SegmentExchange::new(1, 2, 3, 3).with_reversal(true, false);
    /// a.exchange_segments(&mut b, &mv).unwrap();
    /// assert_eq!(a.interior(), &[Coordinate::new(0.0, 3.0), Coordinate::new(3.0, 0.0)]);
    /// assert_eq!(
    ///     b.interior(),
    ///     &[
    ///         Coordinate::new(0.0, 1.0),
    ///         Coordinate::new(0.0, 2.0),
    ///         Coordinate::new(2.0, 0.0),
    ///         Coordinate::new(1.0, 0.0),
    ///     ]
    /// );
    ///
    /// a.invert_exchange(&mut b, &mv).unwrap();
    /// assert_eq!(a.num_stops(), 3);
    /// assert_eq!(b.num_stops(), 3);
    /// ```
    pub fn exchange_segments(&mut self, other: &mut Route, mv: &SegmentExchange) -> Result<()> {
        self.check_segment(mv.my_start, mv.my_end)?;
        other.check_segment(mv.other_start, mv.other_end)?;

        let mut mine: Vec<Coordinate> = self.points_mut().drain(mv.my_start..=mv.my_end).collect();
        let mut theirs: Vec<Coordinate> = other
            .points_mut()
            .drain(mv.other_start..=mv.other_end)
            .collect();
        if mv.reverse_mine {
            mine.reverse();
        }
        if mv.reverse_other {
            theirs.reverse();
        }

        self.points_mut().splice(mv.my_start..mv.my_start, theirs);
        other.points_mut().splice(mv.other_start..mv.other_start, mine);
        Ok(())
    }

    /// Undoes a previous [`exchange_segments`](Route::exchange_segments)
    /// called with the same parameters.
    pub fn invert_exchange(&mut self, other: &mut Route, mv: &SegmentExchange) -> Result<()> {
        self.exchange_segments(other, &mv.inverse())
    }

    /// Combined length of both routes if `mv` were applied.
    ///
    /// The exchange is applied, measured and undone, so both routes end in
    /// exactly the order they started in.
    pub fn evaluate_exchange(&mut self, other: &mut Route, mv: &SegmentExchange) -> Result<f64> {
        self.exchange_segments(other, mv)?;
        let combined = self.length() + other.length();
        self.invert_exchange(other, mv)?;
        Ok(combined)
    }
}

/// Runs one cross-exchange step between `first` and `second`.
///
/// Scores every segment pair `[m, n]` of `first` and `[j, i]` of `second`
/// with `m < n` and `j < i`, under the four reversal combinations, and
/// commits the candidate with the lowest combined length if it is strictly
/// below the current combined length. Candidates whose segment contains a
/// coordinate of `protected` are skipped, so protected addresses stay on
/// their route.
///
/// Returns the committed exchange, or `None` when both routes are left
/// unchanged. At most one exchange is committed per call.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Route};
/// use u_delivery::local_search::cross_exchange;
///
/// // Each route serves one far-east and one far-west pair.
/// let mut a = Route::new();
/// let mut b = Route::new();
/// for (i, j) in [(10.0, 1.0), (11.0, 1.0), (-10.0, 1.0), (-11.0, 1.0)] {
///     let _ = a.add(Coordinate::new(i, j));
/// }
/// for (i, j) in [(-10.0, -1.0), (-11.0, -1.0), (10.0, -1.0), (11.0, -1.0)] {
///     let _ = b.add(Coordinate::new(i, j));
/// }
///
/// let before = a.length() + b.length();
/// let applied = cross_exchange(&mut a, &mut b, &[]).unwrap();
/// assert!(applied.is_some());
/// assert!(a.length() + b.length() < before);
/// ```
#[instrument(
    level = "debug",
    skip_all,
    fields(first = first.num_stops(), second = second.num_stops(), protected = protected.len())
)]
pub fn cross_exchange(
    first: &mut Route,
    second: &mut Route,
    protected: &[Coordinate],
) -> Result<Option<ExchangeImprovement>> {
    let before = first.length() + second.length();
    let mut best_length = before;
    let mut best: Option<SegmentExchange> = None;

    let first_last = first.last_index();
    let second_last = second.last_index();

    for m in 1..first_last {
        for n in (m + 1)..first_last {
            if first.as_sequence().any_in_range_matches(protected, m, n)? {
                continue;
            }
            for j in 1..second_last {
                for i in (j + 1)..second_last {
                    if second.as_sequence().any_in_range_matches(protected, j, i)? {
                        continue;
                    }
                    for reverse_mine in [false, true] {
                        for reverse_other in [false, true] {
                            let mv = SegmentExchange::new(m, n, j, i)
                                .with_reversal(reverse_mine, reverse_other);
                            let combined = first.evaluate_exchange(second, &mv)?;
                            if combined < best_length {
                                best_length = combined;
                                best = Some(mv);
                            }
                        }
                    }
                }
            }
        }
    }

    let Some(exchange) = best else {
        return Ok(None);
    };
    first.exchange_segments(second, &exchange)?;
    let after = first.length() + second.length();
    debug!(?exchange, before, after, "cross exchange committed");

    Ok(Some(ExchangeImprovement {
        exchange,
        before,
        after,
    }))
}

/// Repeats [`cross_exchange`] until a step commits nothing or
/// `config.max_passes` steps have run.
pub fn cross_exchange_until_stable(
    first: &mut Route,
    second: &mut Route,
    protected: &[Coordinate],
    config: &LocalSearchConfig,
) -> Result<SearchSummary> {
    let initial_length = first.length() + second.length();
    let mut passes = 0;
    let mut moves = 0;

    while passes < config.max_passes {
        passes += 1;
        if cross_exchange(first, second, protected)?.is_none() {
            break;
        }
        moves += 1;
    }

    Ok(SearchSummary {
        passes,
        moves,
        initial_length,
        final_length: first.length() + second.length(),
    })
}
