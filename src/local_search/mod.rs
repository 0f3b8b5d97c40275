//! Local search operators for improving delivery routes.
//!
//! - [`two_opt`](two_opt_improve) — Intra-route segment reversal
//! - [`cross_exchange`] — Inter-route segment exchange with optional
//!   reversal and protected addresses
//!
//! Each operator performs a single step. The `*_until_stable` helpers
//! repeat a step until it stops improving or a pass limit is reached.

mod exchange;
mod two_opt;

pub use exchange::{cross_exchange, cross_exchange_until_stable, ExchangeImprovement, SegmentExchange};
pub use two_opt::{two_opt_improve, two_opt_until_stable};

/// Outcome of repeatedly applying a local search step.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSummary {
    /// Steps executed, including the final non-improving one.
    pub passes: usize,
    /// Steps that improved the objective.
    pub moves: usize,
    /// Objective before the first step.
    pub initial_length: f64,
    /// Objective after the last step.
    pub final_length: f64,
}

impl SearchSummary {
    /// Total length saved.
    pub fn improvement(&self) -> f64 {
        self.initial_length - self.final_length
    }
}
