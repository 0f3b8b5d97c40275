//! Route and search configuration.

use crate::error::{Result, RouteError};
use crate::models::Coordinate;

/// Construction parameters shared by a route and every sequence derived
/// from it.
///
/// # Examples
///
/// ```
/// use u_delivery::config::RouteConfig;
/// use u_delivery::models::Coordinate;
///
/// let config = RouteConfig::default()
///     .with_depot(Coordinate::new(2.0, 3.0))
///     .with_tolerance(1e-9);
/// assert_eq!(config.depot, Coordinate::new(2.0, 3.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    /// Coordinate pinned to both ends of every route.
    pub depot: Coordinate,
    /// Two coordinates closer than or equal to this distance are treated
    /// as the same address. `0.0` means exact equality.
    pub tolerance: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            depot: Coordinate::ORIGIN,
            tolerance: 0.0,
        }
    }
}

impl RouteConfig {
    /// Sets the depot coordinate.
    pub fn with_depot(mut self, depot: Coordinate) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the coincidence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.tolerance)
    }
}

/// A coincidence tolerance must be finite and non-negative.
pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(RouteError::InvalidTolerance(tolerance));
    }
    Ok(())
}

/// Bounds for the repeated-application helpers in
/// [`local_search`](crate::local_search).
///
/// # Examples
///
/// ```
/// use u_delivery::config::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_max_passes(5);
/// assert_eq!(config.max_passes, 5);
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearchConfig {
    /// Maximum number of single-step applications before giving up on
    /// convergence.
    pub max_passes: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self { max_passes: 100 }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }
}
