//! Rounded Euclidean distance and tour length evaluation.

use super::types::{CityId, Point, TspInstance};

/// Euclidean distance between two points, rounded to the nearest integer.
///
/// Ties round to even (banker's rounding), matching `f64::round_ties_even`.
fn euclidean(p: Point, q: Point) -> u64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx.hypot(dy).round_ties_even() as u64
}

impl TspInstance {
    /// Rounded Euclidean distance between two cities.
    ///
    /// The rounding convention is **round-half-to-even**. It is fixed because
    /// it determines exact integer tour lengths; callers comparing lengths
    /// against other implementations must match it.
    pub fn distance(&self, a: CityId, b: CityId) -> u64 {
        euclidean(self.coord(a), self.coord(b))
    }

    /// Total length of a cyclic tour: the sum of [`distance`](Self::distance)
    /// over all n consecutive pairs including the wrap edge (last → first).
    ///
    /// Recomputed in full on every call — O(n), no caching or incremental
    /// deltas. Every candidate evaluation in the search pays this cost, which
    /// makes it the dominant cost driver of the whole solver.
    pub fn tour_length(&self, tour: &[CityId]) -> u64 {
        let n = tour.len();
        (0..n)
            .map(|i| self.distance(tour[i], tour[(i + 1) % n]))
            .sum()
    }
}
