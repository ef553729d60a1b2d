//! Progress event stream.
//!
//! Events are purely observational: sinks see what the search decided, never
//! influence it. Dropping all events (the default) leaves results bit-exact.

use crate::climb::SearchMode;
use crate::instance::CityId;

/// One observable moment of a search run.
///
/// Restart indices are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A restart drew its start city and built the initial tour.
    RestartBegun {
        restart: usize,
        restarts: usize,
        start_city: CityId,
        initial_length: u64,
        mode: SearchMode,
    },
    /// A hill-climbing step accepted an improving candidate.
    StepImproved {
        restart: usize,
        /// One-based accepted-move count within this restart.
        step: usize,
        /// Operator that produced the candidate (`"2-opt"` or `"insert"`).
        operator: &'static str,
        length: u64,
    },
    /// Neither operator improved the tour; the restart reached a local
    /// optimum.
    Converged {
        restart: usize,
        steps: usize,
        length: u64,
    },
    /// A restart's final tour strictly beat the best record.
    BestImproved { restart: usize, length: u64 },
}

/// Receiver for [`SearchEvent`]s.
///
/// Implemented for any `FnMut(&SearchEvent)`, so a closure is enough:
///
/// ```
/// use u_tsp::progress::{ProgressSink, SearchEvent};
///
/// let mut lengths = Vec::new();
/// let mut sink = |event: &SearchEvent| {
///     if let SearchEvent::Converged { length, .. } = event {
///         lengths.push(*length);
///     }
/// };
/// sink.on_event(&SearchEvent::BestImproved { restart: 0, length: 10 });
/// ```
pub trait ProgressSink {
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F: FnMut(&SearchEvent)> ProgressSink for F {
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}
