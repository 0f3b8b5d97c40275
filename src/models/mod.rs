//! Domain model types for delivery routing.
//!
//! Provides coordinates with Euclidean distance, deduplicated address
//! sequences, and depot-anchored routes built on top of them.

mod coordinate;
mod route;
mod sequence;

pub use coordinate::Coordinate;
pub use route::Route;
pub use sequence::{Insertion, Sequence};

pub(crate) use sequence::nearest_index;
