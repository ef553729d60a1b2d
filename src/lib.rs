//! Multi-restart hill-climbing heuristic for the Euclidean TSP.
//!
//! Trades exactness for runtime: repeated greedy construction plus local
//! search produces a good (not optimal) tour quickly. The pipeline:
//!
//! - **Instance** ([`instance`]): a validated city set with a rounded
//!   Euclidean distance model (round-half-to-even integer distances).
//! - **Construction** ([`construct`]): greedy nearest-neighbor initial tours
//!   with a fixed lowest-id tie-break.
//! - **Neighborhoods** ([`neighborhood`]): 2-opt segment reversal and
//!   single-city reinsertion, each with an exhaustive best-improvement scan
//!   and a budgeted random first-improvement scan.
//! - **Hill climbing** ([`climb`]): priority-ordered descent — reversal
//!   first, reinsertion only when reversal is exhausted — to a local optimum.
//! - **Restarts** ([`restart`]): repeated climbs from random start cities
//!   sharing one seeded generator, keeping the best tour seen.
//!
//! Progress events ([`progress`]) and cooperative cancellation are optional
//! side channels that never affect computed results.
//!
//! # Example
//!
//! ```
//! use u_tsp::instance::TspInstance;
//! use u_tsp::restart::{RestartConfig, RestartRunner};
//!
//! let instance = TspInstance::new([
//!     (1, (0.0, 0.0)),
//!     (2, (0.0, 10.0)),
//!     (3, (10.0, 10.0)),
//!     (4, (10.0, 0.0)),
//! ])?;
//! let config = RestartConfig::default().with_restarts(5).with_seed(42);
//!
//! let result = RestartRunner::run(&instance, &config)?;
//! assert_eq!(result.length, 40);
//! # Ok::<(), u_tsp::error::Error>(())
//! ```
//!
//! # Determinism
//!
//! Sequential runs are bit-exact for identical inputs: one `Pcg64` is seeded
//! once and every draw — restart start cities, sampled trial positions —
//! consumes from that single advancing stream. The feature-gated parallel
//! mode seeds one stream per restart instead and is a deliberately distinct
//! contract.

pub mod climb;
pub mod construct;
pub mod error;
pub mod instance;
pub mod neighborhood;
pub mod progress;
pub mod restart;
