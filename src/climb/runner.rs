//! Hill-climbing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::config::{ClimbConfig, SearchMode};
use crate::instance::{CityId, Tour, TspInstance};
use crate::neighborhood::{CityReinsertion, NeighborhoodOperator, ScanOutcome, SegmentReversal};
use crate::progress::{ProgressSink, SearchEvent};

/// Result of one hill-climbing restart.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbResult {
    /// The locally optimal tour (or the current tour when cancelled).
    pub tour: Tour,

    /// Full cyclic length of `tour`.
    pub length: u64,

    /// Number of accepted improving moves.
    pub steps: usize,

    /// Whether the climb was cancelled before reaching a local optimum.
    pub cancelled: bool,
}

/// Drives a single restart to a local optimum.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Climbs from `tour` until neither operator improves it.
    ///
    /// `rng` is only consumed in [`SearchMode::Sampled`]; in exhaustive mode
    /// the climb is fully deterministic given the initial tour.
    pub fn run<R: Rng>(
        instance: &TspInstance,
        tour: Tour,
        config: &ClimbConfig,
        rng: &mut R,
    ) -> ClimbResult {
        Self::run_with_cancel(instance, tour, config, rng, None)
    }

    /// Climbs with an optional cancellation token, checked between steps.
    /// A cancelled climb returns the current tour unchanged.
    pub fn run_with_cancel<R: Rng>(
        instance: &TspInstance,
        tour: Tour,
        config: &ClimbConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ClimbResult {
        Self::run_observed(instance, tour, config, rng, 0, cancel.as_deref(), None)
    }

    pub(crate) fn run_observed<'sink, R: Rng>(
        instance: &TspInstance,
        mut tour: Tour,
        config: &ClimbConfig,
        rng: &mut R,
        restart: usize,
        cancel: Option<&AtomicBool>,
        mut sink: Option<&mut (dyn ProgressSink + 'sink)>,
    ) -> ClimbResult {
        config.validate().expect("invalid ClimbConfig");

        let mode = config.mode_for(instance.len());
        let mut length = instance.tour_length(&tour);
        let mut steps = 0usize;

        let reversal = SegmentReversal;
        let reinsertion = CityReinsertion;

        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::debug!("climb.cancelled: restart={restart} steps={steps} len={length}");
                return ClimbResult {
                    tour,
                    length,
                    steps,
                    cancelled: true,
                };
            }

            // Reversal has priority; reinsertion is only consulted when a
            // reversal scan comes back empty, and any accepted move sends
            // the next step back to reversal first.
            let outcome = Self::attempt(&reversal, mode, instance, &tour, length, config, rng);
            if Self::adopt(outcome, reversal.name(), &mut tour, &mut length, &mut steps) {
                Self::emit_step(&mut sink, restart, steps, reversal.name(), length);
                continue;
            }

            let outcome = Self::attempt(&reinsertion, mode, instance, &tour, length, config, rng);
            if Self::adopt(outcome, reinsertion.name(), &mut tour, &mut length, &mut steps) {
                Self::emit_step(&mut sink, restart, steps, reinsertion.name(), length);
                continue;
            }

            break;
        }

        log::debug!("climb.converged: restart={restart} steps={steps} len={length}");
        if let Some(s) = sink.as_deref_mut() {
            s.on_event(&SearchEvent::Converged {
                restart,
                steps,
                length,
            });
        }

        ClimbResult {
            tour,
            length,
            steps,
            cancelled: false,
        }
    }

    fn attempt<O: NeighborhoodOperator, R: Rng>(
        operator: &O,
        mode: SearchMode,
        instance: &TspInstance,
        tour: &[CityId],
        length: u64,
        config: &ClimbConfig,
        rng: &mut R,
    ) -> ScanOutcome {
        match mode {
            SearchMode::Exhaustive => operator.scan_exhaustive(instance, tour, length),
            SearchMode::Sampled => {
                operator.scan_sampled(instance, tour, length, config.sample_budget, rng)
            }
        }
    }

    fn adopt(
        outcome: ScanOutcome,
        operator: &'static str,
        tour: &mut Tour,
        length: &mut u64,
        steps: &mut usize,
    ) -> bool {
        if !outcome.improved {
            return false;
        }
        debug_assert!(outcome.length < *length, "{operator} must strictly improve");
        *tour = outcome.tour;
        *length = outcome.length;
        *steps += 1;
        true
    }

    fn emit_step(
        sink: &mut Option<&mut (dyn ProgressSink + '_)>,
        restart: usize,
        step: usize,
        operator: &'static str,
        length: u64,
    ) {
        log::debug!("climb.step: restart={restart} step={step} op={operator} len={length}");
        if let Some(s) = sink.as_deref_mut() {
            s.on_event(&SearchEvent::StepImproved {
                restart,
                step,
                operator,
                length,
            });
        }
    }
}
