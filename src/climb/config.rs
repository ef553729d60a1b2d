//! Hill-climber configuration.

/// Scan strategy selected for an instance size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Best-improvement enumeration of the full neighborhood. O(n³) per scan.
    Exhaustive,
    /// First-improvement over a bounded random sample. O(budget × n) per scan.
    Sampled,
}

/// Configuration for one hill-climbing restart.
///
/// # Examples
///
/// ```
/// use u_tsp::climb::{ClimbConfig, SearchMode};
///
/// let config = ClimbConfig::default()
///     .with_exhaustive_threshold(200)
///     .with_sample_budget(500);
/// assert_eq!(config.mode_for(199), SearchMode::Exhaustive);
/// assert_eq!(config.mode_for(200), SearchMode::Sampled);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Instances with fewer cities than this use exhaustive scans; larger
    /// ones use sampled scans. A runtime/quality trade-off, not a
    /// correctness boundary. `0` forces sampling everywhere.
    pub exhaustive_threshold: usize,

    /// Trial budget per sampled scan.
    pub sample_budget: usize,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            exhaustive_threshold: 150,
            sample_budget: 1000,
        }
    }
}

impl ClimbConfig {
    /// Sets the city count below which scans are exhaustive.
    pub fn with_exhaustive_threshold(mut self, n: usize) -> Self {
        self.exhaustive_threshold = n;
        self
    }

    /// Sets the trial budget per sampled scan.
    pub fn with_sample_budget(mut self, n: usize) -> Self {
        self.sample_budget = n;
        self
    }

    /// Scan strategy for an instance of `n` cities.
    pub fn mode_for(&self, n: usize) -> SearchMode {
        if n >= self.exhaustive_threshold {
            SearchMode::Sampled
        } else {
            SearchMode::Exhaustive
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_budget == 0 {
            return Err("sample_budget must be at least 1".into());
        }
        Ok(())
    }
}
