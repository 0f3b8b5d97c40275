//! Delivery address coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable point in the plane.
///
/// Two coordinates denote the same address when their Euclidean distance
/// is within a tolerance; see [`Coordinate::coincides`].
///
/// # Examples
///
/// ```
/// use u_delivery::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.to_string(), "(3.000000,4.000000)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    i: f64,
    j: f64,
}

impl Coordinate {
    /// The origin, the canonical depot location.
    pub const ORIGIN: Coordinate = Coordinate { i: 0.0, j: 0.0 };

    /// Creates a coordinate.
    pub const fn new(i: f64, j: f64) -> Self {
        Self { i, j }
    }

    /// First component.
    pub fn i(&self) -> f64 {
        self.i
    }

    /// Second component.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let di = self.i - other.i;
        let dj = self.j - other.j;
        (di * di + dj * dj).sqrt()
    }

    /// Returns `true` if `other` is within `tolerance` of this coordinate.
    ///
    /// With a tolerance of `0.0` this is exact equality of both components.
    pub fn coincides(&self, other: &Coordinate, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((i, j): (f64, f64)) -> Self {
        Self::new(i, j)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6},{:.6})", self.i, self.j)
    }
}
