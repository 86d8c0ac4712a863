//! Reference constants for sampling and cross-checks.
//!
//! Policy
//! - Defaults reproduce the reference measurement. Callers override them
//!   through `SamplerCfg` fields rather than editing these constants.

/// Trials each worker runs per repetition.
pub const TRIALS_PER_WORKER: u64 = 10_000_000;
/// Full parallel runs per estimate.
pub const REPETITIONS: usize = 10;
/// Half-open range for each uniform edge draw.
pub const SAMPLE_RANGE: (f64, f64) = (0.0, 1.0);

/// Relative slack on the ends of the folding interval.
pub(crate) const FOLD_EPS: f64 = 1e-12;

/// Seed of the random cross-check in `check`.
pub const CHECK_SEED: u64 = 12345;
/// Trials of the random cross-check.
pub const CHECK_TRIALS: usize = 10_000;
/// Range of the random cross-check draws.
pub const CHECK_RANGE: (f64, f64) = (0.0, 100.0);

/// Worker count from detected hardware parallelism (at least one).
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
