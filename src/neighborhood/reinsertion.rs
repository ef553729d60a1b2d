//! Single-city reinsertion.

use rand::Rng;

use super::types::{NeighborhoodOperator, ScanOutcome};
use crate::instance::{CityId, Tour, TspInstance};

/// Removes the city at position `i` and reinserts it at position `j`,
/// shifting the cities in between. Valid pairs are any `i != j` in
/// `[0, n-1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityReinsertion;

impl CityReinsertion {
    /// Builds the candidate for one `(i, j)` pair: a fresh copy of the tour
    /// with the city at `i` spliced out and reinserted at `j`. O(n).
    pub fn candidate(tour: &[CityId], i: usize, j: usize) -> Tour {
        let mut candidate = tour.to_vec();
        let city = candidate.remove(i);
        candidate.insert(j, city);
        candidate
    }
}

impl NeighborhoodOperator for CityReinsertion {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn scan_exhaustive(
        &self,
        instance: &TspInstance,
        tour: &[CityId],
        length: u64,
    ) -> ScanOutcome {
        let n = tour.len();
        let mut best: Option<Tour> = None;
        let mut best_length = length;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let candidate = Self::candidate(tour, i, j);
                let candidate_length = instance.tour_length(&candidate);
                if candidate_length < best_length {
                    best_length = candidate_length;
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(tour) => ScanOutcome {
                tour,
                length: best_length,
                improved: true,
            },
            None => ScanOutcome::unchanged(tour, length),
        }
    }

    fn scan_sampled<R: Rng>(
        &self,
        instance: &TspInstance,
        tour: &[CityId],
        length: u64,
        budget: usize,
        rng: &mut R,
    ) -> ScanOutcome {
        let n = tour.len();
        if n < 2 {
            return ScanOutcome::unchanged(tour, length);
        }

        for _ in 0..budget {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if i == j {
                continue; // consumes the trial
            }
            let candidate = Self::candidate(tour, i, j);
            let candidate_length = instance.tour_length(&candidate);
            if candidate_length < length {
                return ScanOutcome {
                    tour: candidate,
                    length: candidate_length,
                    improved: true,
                };
            }
        }

        ScanOutcome::unchanged(tour, length)
    }
}
