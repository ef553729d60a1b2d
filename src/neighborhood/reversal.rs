//! Segment reversal (2-opt).
//!
//! # References
//!
//! Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use super::types::{NeighborhoodOperator, ScanOutcome};
use crate::instance::{CityId, Tour, TspInstance};

/// Reverses the tour segment at positions `[i+1, j]`, replacing the two
/// cyclic edges `(i, i+1)` and `(j, j+1)` with `(i, j)` and `(i+1, j+1)`.
///
/// Valid pairs satisfy `0 <= i <= n-3` and `i+2 <= j <= n-1`, except
/// `(0, n-1)`: reversing that segment reproduces the original cyclic tour,
/// so the pair is excluded from both scan strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentReversal;

impl SegmentReversal {
    /// Builds the candidate for one `(i, j)` pair: a fresh copy of the tour
    /// with positions `i+1..=j` reversed in place. O(n).
    pub fn candidate(tour: &[CityId], i: usize, j: usize) -> Tour {
        let mut candidate = tour.to_vec();
        candidate[i + 1..=j].reverse();
        candidate
    }
}

impl NeighborhoodOperator for SegmentReversal {
    fn name(&self) -> &'static str {
        "2-opt"
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

        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
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
        if n < 4 {
            // the only pair a 3-city tour admits is the excluded (0, n-1)
            return ScanOutcome::unchanged(tour, length);
        }

        for _ in 0..budget {
            let i = rng.random_range(0..=n - 3);
            let j = rng.random_range(i + 2..=n - 1);
            if i == 0 && j == n - 1 {
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
