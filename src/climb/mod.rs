//! Hill climbing: one restart driven to a local optimum.
//!
//! # Algorithm
//!
//! Each step, in fixed priority order:
//!
//! 1. Attempt segment reversal (2-opt). On improvement, adopt the candidate
//!    and start the next step — reversal is retried first again.
//! 2. Only if reversal found nothing, attempt reinsertion. On improvement,
//!    adopt and start the next step (which again tries reversal first).
//! 3. If neither operator improved in the same step, the tour is a local
//!    optimum and the climb stops.
//!
//! This is priority-ordered local search, not steepest descent over the
//! union neighborhood. Termination is guaranteed: every accepted move
//! strictly decreases the integer tour length, which is bounded below.
//!
//! # References
//!
//! Johnson, D. S. & McGeoch, L. A. (1997). "The traveling salesman problem:
//! A case study in local optimization", in *Local Search in Combinatorial
//! Optimization*, 215-310.

mod config;
mod runner;

pub use config::{ClimbConfig, SearchMode};
pub use runner::{ClimbResult, ClimbRunner};
