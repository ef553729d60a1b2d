//! Operator trait shared by the neighborhood families.

use rand::Rng;

use crate::instance::{CityId, Tour, TspInstance};

/// Outcome of one neighborhood scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The adopted tour: the improving candidate, or a copy of the original
    /// when no improvement was found.
    pub tour: Tour,
    /// Full cyclic length of `tour`.
    pub length: u64,
    /// Whether `tour` strictly improves on the scanned tour.
    pub improved: bool,
}

impl ScanOutcome {
    pub(crate) fn unchanged(tour: &[CityId], length: u64) -> Self {
        Self {
            tour: tour.to_vec(),
            length,
            improved: false,
        }
    }
}

/// A tour neighborhood with two scan strategies.
///
/// `length` must always be the full cyclic length of `tour` under the
/// instance's distance model; scans compare candidates against it and return
/// an outcome whose `length` field keeps that contract.
pub trait NeighborhoodOperator {
    /// Human-readable operator name, used in progress events and logs.
    fn name(&self) -> &'static str;

    /// Best-improvement scan over the full neighborhood.
    ///
    /// Enumerates every valid position pair in ascending order and keeps the
    /// candidate with the strictly smallest length seen so far — ties never
    /// replace the incumbent, so the first-encountered minimum in enumeration
    /// order wins. When no candidate is strictly shorter, the whole
    /// enumeration is proof that this neighborhood cannot improve the tour.
    ///
    /// O(n²) candidates, each evaluated at O(n).
    fn scan_exhaustive(&self, instance: &TspInstance, tour: &[CityId], length: u64)
        -> ScanOutcome;

    /// First-improvement scan over a bounded random sample.
    ///
    /// Draws up to `budget` uniformly random valid position pairs from `rng`
    /// and returns the first candidate strictly shorter than `length`. A draw
    /// that lands on an invalid pair consumes a trial. Budget exhaustion is a
    /// per-call negative result only — it signals that nothing improving was
    /// found *in this sample*, never that the neighborhood is exhausted.
    ///
    /// O(budget × n).
    fn scan_sampled<R: Rng>(
        &self,
        instance: &TspInstance,
        tour: &[CityId],
        length: u64,
        budget: usize,
        rng: &mut R,
    ) -> ScanOutcome;
}
