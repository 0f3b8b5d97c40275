//! # u-delivery
//!
//! Delivery tour construction and local search over planar addresses,
//! for one route or a pair of routes sharing a depot.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Sequence, Route)
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt and cross-route segment exchange with protected addresses
//! - [`config`] — Route and search configuration
//! - [`error`] — Error type shared by all operations
//!
//! ## Example
//!
//! ```
//! use u_delivery::models::{Coordinate, Route};
//! use u_delivery::local_search::{cross_exchange, two_opt_improve};
//!
//! let mut north = Route::new();
//! let mut south = Route::new();
//! for (i, j) in [(1.0, 4.0), (-3.0, -2.0), (2.0, 5.0)] {
//!     let _ = north.add(Coordinate::new(i, j));
//! }
//! for (i, j) in [(4.0, -4.0), (-2.0, 3.0), (5.0, -5.0)] {
//!     let _ = south.add(Coordinate::new(i, j));
//! }
//!
//! let mut north = north.greedy_tour();
//! let mut south = south.greedy_tour();
//! two_opt_improve(&mut north);
//! two_opt_improve(&mut south);
//!
//! let before = north.length() + south.length();
//! cross_exchange(&mut north, &mut south, &[Coordinate::new(1.0, 4.0)]).unwrap();
//! assert!(north.length() + south.length() <= before);
//! ```

pub mod config;
pub mod constructive;
pub mod error;
pub mod local_search;
pub mod models;

pub use error::{Result, RouteError};
