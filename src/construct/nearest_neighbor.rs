//! Greedy nearest-neighbor construction.
//!
//! # References
//!
//! Rosenkrantz, D. J., Stearns, R. E. & Lewis, P. M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem",
//! *SIAM Journal on Computing* 6(3), 563-581.

use crate::instance::{CityId, Tour, TspInstance};

/// Builds a tour by always moving to the nearest unvisited city.
///
/// Distances are the instance's rounded distances. When several unvisited
/// cities are equidistant from the current city, the one with the lowest id
/// wins: cities are scanned in ascending id order with a strict `<`
/// comparison, so the first (lowest-id) candidate at the minimum distance is
/// kept. The tie-break is part of the reproducibility contract.
///
/// Returns a tour starting at `start` and covering every city once. O(n²).
///
/// # Panics
///
/// Panics if `start` is not a city of the instance.
pub fn nearest_neighbor_tour(instance: &TspInstance, start: CityId) -> Tour {
    let ids = instance.ids();
    let n = ids.len();

    let mut visited = vec![false; n];
    visited[instance.position(start)] = true;

    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut nearest: Option<(usize, u64)> = None;
        for (pos, &id) in ids.iter().enumerate() {
            if visited[pos] {
                continue;
            }
            let d = instance.distance(current, id);
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((pos, d));
            }
        }
        let (pos, _) = nearest.expect("an unvisited city remains on every pass");
        visited[pos] = true;
        current = ids[pos];
        tour.push(current);
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_from_origin() {
        let instance = TspInstance::new([
            (0, (0.0, 0.0)),
            (1, (0.0, 1.0)),
            (2, (1.0, 1.0)),
            (3, (1.0, 0.0)),
        ])
        .unwrap();

        // All three neighbors of city 0 sit at rounded distance 1, so the
        // lowest-id tie-break decides the whole tour.
        let tour = nearest_neighbor_tour(&instance, 0);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert_eq!(instance.tour_length(&tour), 4);
    }

    #[test]
    fn test_scaled_square_follows_perimeter() {
        let instance = TspInstance::new([
            (0, (0.0, 0.0)),
            (1, (0.0, 10.0)),
            (2, (10.0, 10.0)),
            (3, (10.0, 0.0)),
        ])
        .unwrap();

        let tour = nearest_neighbor_tour(&instance, 0);
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert_eq!(instance.tour_length(&tour), 40);
    }

    #[test]
    fn test_tie_break_prefers_lowest_id() {
        // Cities 4 and 9 are both at distance 5 from the start.
        let instance = TspInstance::new([
            (2, (0.0, 0.0)),
            (9, (5.0, 0.0)),
            (4, (-5.0, 0.0)),
        ])
        .unwrap();

        let tour = nearest_neighbor_tour(&instance, 2);
        assert_eq!(tour[1], 4);
    }

    #[test]
    fn test_covers_every_city_once() {
        let instance = TspInstance::new([
            (10, (0.0, 0.0)),
            (20, (3.0, 1.0)),
            (30, (-2.0, 4.0)),
            (40, (1.0, -7.0)),
            (50, (6.0, 6.0)),
        ])
        .unwrap();

        let mut tour = nearest_neighbor_tour(&instance, 30);
        assert_eq!(tour[0], 30);
        tour.sort_unstable();
        assert_eq!(tour, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_single_city() {
        let instance = TspInstance::new([(7, (1.0, 1.0))]).unwrap();
        assert_eq!(nearest_neighbor_tour(&instance, 7), vec![7]);
    }
}
