//! Neighborhood operators for tour local search.
//!
//! Two operator families, each offering an exhaustive best-improvement scan
//! and a randomized bounded-trial first-improvement scan:
//!
//! - [`SegmentReversal`]: 2-opt edge reversal — reverses a contiguous
//!   segment of the tour.
//! - [`CityReinsertion`]: removes a single city and reinserts it at a
//!   different position.
//!
//! Every candidate is a fresh owned sequence; the original tour is never
//! mutated, so callers can always compare candidate against original.

mod reinsertion;
mod reversal;
mod types;

pub use reinsertion::CityReinsertion;
pub use reversal::SegmentReversal;
pub use types::{NeighborhoodOperator, ScanOutcome};
