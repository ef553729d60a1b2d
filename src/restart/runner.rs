//! Multi-restart execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::config::{RestartConfig, DEFAULT_SEED};
use crate::climb::ClimbRunner;
use crate::construct::nearest_neighbor_tour;
use crate::error::{Error, Result};
use crate::instance::{Tour, TspInstance};
use crate::progress::{ProgressSink, SearchEvent};

/// Result of a multi-restart search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best tour found across all restarts.
    pub tour: Tour,

    /// Full cyclic length of `tour`.
    pub length: u64,

    /// Restarts driven to convergence.
    pub restarts_completed: usize,

    /// Accepted improving moves summed over all restarts.
    pub steps: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best length after each completed restart. Non-increasing.
    pub length_history: Vec<u64>,
}

/// Executes the multi-restart search.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs the search.
    ///
    /// One generator is seeded once from the configured seed and shared by
    /// the whole run: the start-city draw of every restart and every sampled
    /// trial consume from the same advancing stream. Identical instance,
    /// configuration, and seed therefore reproduce identical start cities,
    /// per-step decisions, and final tour.
    pub fn run(instance: &TspInstance, config: &RestartConfig) -> Result<SearchResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The token is checked between restarts and between climbing steps. A
    /// cancelled run returns the best result found so far with `cancelled:
    /// true`, or [`Error::Cancelled`] when no candidate tour was produced
    /// before the flag was observed.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &RestartConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        Self::run_observed(instance, config, cancel, None)
    }

    /// Runs the search, streaming [`SearchEvent`]s to `sink`.
    ///
    /// Events are observational only; any sink (including none) yields the
    /// same result.
    pub fn run_observed(
        instance: &TspInstance,
        config: &RestartConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut sink: Option<&mut dyn ProgressSink>,
    ) -> Result<SearchResult> {
        config.validate().expect("invalid RestartConfig");

        let n = instance.len();
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let mode = config.climb.mode_for(n);
        let mut rng = Pcg64::seed_from_u64(seed);
        log::info!(
            "search.run: n={n} restarts={} seed={seed} mode={mode:?}",
            config.restarts
        );

        let cancel = cancel.as_deref();
        let mut best: Option<(Tour, u64)> = None;
        let mut length_history = Vec::with_capacity(config.restarts);
        let mut total_steps = 0usize;
        let mut completed = 0usize;
        let mut cancelled = false;

        for restart in 0..config.restarts {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            let start = instance.ids()[rng.random_range(0..n)];
            let tour = nearest_neighbor_tour(instance, start);
            let initial_length = instance.tour_length(&tour);
            log::debug!("search.restart: idx={restart} start={start} len={initial_length}");
            if let Some(s) = sink.as_deref_mut() {
                s.on_event(&SearchEvent::RestartBegun {
                    restart,
                    restarts: config.restarts,
                    start_city: start,
                    initial_length,
                    mode,
                });
            }

            let climb = ClimbRunner::run_observed(
                instance,
                tour,
                &config.climb,
                &mut rng,
                restart,
                cancel,
                sink.as_deref_mut(),
            );
            total_steps += climb.steps;

            if best.as_ref().is_none_or(|(_, len)| climb.length < *len) {
                log::info!("search.best: idx={restart} len={}", climb.length);
                if let Some(s) = sink.as_deref_mut() {
                    s.on_event(&SearchEvent::BestImproved {
                        restart,
                        length: climb.length,
                    });
                }
                best = Some((climb.tour, climb.length));
            }

            if climb.cancelled {
                cancelled = true;
                break;
            }
            completed += 1;
            let (_, best_length) = best.as_ref().expect("best is set once a restart completed");
            length_history.push(*best_length);
        }

        match best {
            Some((tour, length)) => Ok(SearchResult {
                tour,
                length,
                restarts_completed: completed,
                steps: total_steps,
                cancelled,
                length_history,
            }),
            None => Err(Error::Cancelled),
        }
    }

    /// Runs restarts across rayon workers.
    ///
    /// Parallel execution cannot share one sequential random stream, so each
    /// restart seeds its own generator from the configured seed mixed with
    /// the restart index. Results are reproducible for a fixed seed and
    /// restart count but differ from the sequential mode — this is a distinct
    /// determinism contract, which is why it is a separate entry point and
    /// never substituted implicitly. Equal-length tours resolve to the lowest
    /// restart index.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(instance: &TspInstance, config: &RestartConfig) -> Result<SearchResult> {
        use rayon::prelude::*;

        config.validate().expect("invalid RestartConfig");

        let n = instance.len();
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        log::info!(
            "search.run_parallel: n={n} restarts={} seed={seed}",
            config.restarts
        );

        let climbs: Vec<crate::climb::ClimbResult> = (0..config.restarts)
            .into_par_iter()
            .map(|restart| {
                let mut rng = Pcg64::seed_from_u64(restart_stream_seed(seed, restart));
                let start = instance.ids()[rng.random_range(0..n)];
                let tour = nearest_neighbor_tour(instance, start);
                ClimbRunner::run(instance, tour, &config.climb, &mut rng)
            })
            .collect();

        let mut best: Option<(Tour, u64)> = None;
        let mut length_history = Vec::with_capacity(climbs.len());
        let mut total_steps = 0usize;
        for climb in climbs {
            total_steps += climb.steps;
            if best.as_ref().is_none_or(|(_, len)| climb.length < *len) {
                best = Some((climb.tour, climb.length));
            }
            let (_, best_length) = best.as_ref().expect("best is set on the first restart");
            length_history.push(*best_length);
        }

        let (tour, length) = best.expect("restarts >= 1 is validated");
        Ok(SearchResult {
            tour,
            length,
            restarts_completed: config.restarts,
            steps: total_steps,
            cancelled: false,
            length_history,
        })
    }
}

/// Independent per-restart stream: the master seed mixed with the restart
/// index by a splitmix-style odd multiplier.
#[cfg(feature = "parallel")]
fn restart_stream_seed(seed: u64, restart: usize) -> u64 {
    seed.wrapping_add((restart as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climb::ClimbConfig;
    use crate::instance::CityId;

    /// Fixed 8-city instance (a corner of eil51).
    fn eight_cities() -> TspInstance {
        TspInstance::new([
            (1, (37.0, 52.0)),
            (2, (49.0, 49.0)),
            (3, (52.0, 64.0)),
            (4, (20.0, 26.0)),
            (5, (40.0, 30.0)),
            (6, (21.0, 47.0)),
            (7, (17.0, 63.0)),
            (8, (31.0, 62.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_deterministic_across_runs() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(5).with_seed(42);

        let first = RestartRunner::run(&instance, &config).unwrap();
        let second = RestartRunner::run(&instance, &config).unwrap();

        assert_eq!(first.tour, second.tour);
        assert_eq!(first.length, second.length);
        assert_eq!(first.length_history, second.length_history);
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn test_deterministic_start_city_sequence() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(6).with_seed(7);

        let collect_starts = || {
            let mut starts: Vec<CityId> = Vec::new();
            let mut sink = |event: &SearchEvent| {
                if let SearchEvent::RestartBegun { start_city, .. } = event {
                    starts.push(*start_city);
                }
            };
            RestartRunner::run_observed(&instance, &config, None, Some(&mut sink)).unwrap();
            starts
        };

        let first = collect_starts();
        let second = collect_starts();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_none_seed_is_default_seed() {
        let instance = eight_cities();
        let implicit = RestartConfig::default().with_restarts(4);
        let explicit = implicit.clone().with_seed(DEFAULT_SEED);

        let a = RestartRunner::run(&instance, &implicit).unwrap();
        let b = RestartRunner::run(&instance, &explicit).unwrap();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.length, b.length);
    }

    #[test]
    fn test_history_non_increasing() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(8).with_seed(3);

        let result = RestartRunner::run(&instance, &config).unwrap();
        assert_eq!(result.length_history.len(), result.restarts_completed);
        for window in result.length_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length must be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.length, *result.length_history.last().unwrap());
    }

    #[test]
    fn test_result_is_a_permutation() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(3).with_seed(42);

        let result = RestartRunner::run(&instance, &config).unwrap();
        let mut cities = result.tour.clone();
        cities.sort_unstable();
        assert_eq!(cities, instance.ids());
    }

    #[test]
    fn test_best_no_worse_than_any_restart() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(5).with_seed(11);

        let mut finals: Vec<u64> = Vec::new();
        let mut sink = |event: &SearchEvent| {
            if let SearchEvent::Converged { length, .. } = event {
                finals.push(*length);
            }
        };
        let result =
            RestartRunner::run_observed(&instance, &config, None, Some(&mut sink)).unwrap();

        assert_eq!(finals.len(), 5);
        assert_eq!(result.length, *finals.iter().min().unwrap());
    }

    #[test]
    fn test_sampled_mode_deterministic() {
        let instance = eight_cities();
        let config = RestartConfig::default()
            .with_restarts(4)
            .with_seed(9)
            .with_climb(ClimbConfig::default().with_exhaustive_threshold(0));

        let first = RestartRunner::run(&instance, &config).unwrap();
        let second = RestartRunner::run(&instance, &config).unwrap();
        assert_eq!(first.tour, second.tour);
        assert_eq!(first.length, second.length);
    }

    #[test]
    fn test_single_city_trivial_tour() {
        let instance = TspInstance::new([(5, (12.0, -3.0))]).unwrap();
        let config = RestartConfig::default().with_restarts(3).with_seed(42);

        let result = RestartRunner::run(&instance, &config).unwrap();
        assert_eq!(result.tour, vec![5]);
        assert_eq!(result.length, 0);
        assert_eq!(result.restarts_completed, 3);
    }

    #[test]
    fn test_preset_cancel_yields_cancelled_error() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(5).with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = RestartRunner::run_with_cancel(&instance, &config, Some(cancel));
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn test_square_scenario_reaches_perimeter_length() {
        let instance = TspInstance::new([
            (0, (0.0, 0.0)),
            (1, (0.0, 1.0)),
            (2, (1.0, 1.0)),
            (3, (1.0, 0.0)),
        ])
        .unwrap();
        let config = RestartConfig::default().with_restarts(1).with_seed(42);

        let result = RestartRunner::run(&instance, &config).unwrap();
        assert_eq!(result.length, 4);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_mode_reproducible() {
        let instance = eight_cities();
        let config = RestartConfig::default().with_restarts(6).with_seed(42);

        let first = RestartRunner::run_parallel(&instance, &config).unwrap();
        let second = RestartRunner::run_parallel(&instance, &config).unwrap();
        assert_eq!(first.tour, second.tour);
        assert_eq!(first.length, second.length);
        assert_eq!(first.length_history, second.length_history);
    }
}
