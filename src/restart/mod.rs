//! Multi-restart orchestration.
//!
//! Runs the hill climber from multiple randomized start cities and keeps the
//! best tour seen. All restarts of a sequential run draw from one shared
//! seeded generator, so restart k's choices depend on how many draws earlier
//! restarts consumed — a deliberate determinism contract: identical instance,
//! configuration, and seed reproduce the run bit-exactly.

mod config;
mod runner;

pub use config::{RestartConfig, DEFAULT_SEED};
pub use runner::{RestartRunner, SearchResult};
