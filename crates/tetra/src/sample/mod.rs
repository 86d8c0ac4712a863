//! Parallel Monte Carlo estimates with a feasibility predicate as oracle.
//!
//! Purpose
//! - Estimate the chance that six uniform draws form a tetrahedron
//!   (`Design::Direct`), and the chance that, among feasible normalized
//!   draws, the shortest and longest edges are opposite
//!   (`Design::Conditional`, rejection sampling).
//!
//! Model
//! - A worker runs `trials_per_worker` trials and reports a percentage.
//! - A run fans out `workers` fresh scoped threads (`pool::scatter`), joins
//!   them, and averages the worker percentages without weights.
//! - An estimate repeats the run `repetitions` times; the result is the mean
//!   of the run means with tolerance `max(max - mean, mean - min)`.
//!
//! Determinism
//! - With `seed = Some(s)` each worker's `StdRng` is derived from
//!   `(s, run, worker)`, so output is independent of thread scheduling.
//!   Without a seed every worker seeds from OS entropy.
//!
//! A domain error from the oracle aborts the estimate and carries the six
//! offending inputs; trials are never silently discarded.

mod trial;

pub use trial::{draw_edges, WorkerToken};

use crate::cfg;
use crate::edges::Edges6;
use crate::feasible::{Algorithm, FeasibilityError};
use crate::pool::{self, PoolError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Measurement design.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Design {
    /// Redraw until feasible, then count "min and max edge are opposite".
    Conditional,
    /// No rejection; count feasibility of `(e0, e1, e2, e4, e3, e5)`.
    Direct,
}

impl Design {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conditional => "conditional",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Design {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conditional" | "min-max" => Ok(Self::Conditional),
            "direct" | "valid" => Ok(Self::Direct),
            other => Err(format!(
                "unknown design '{other}' (expected conditional or direct)"
            )),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct SamplerCfg {
    pub design: Design,
    pub algorithm: Algorithm,
    pub trials_per_worker: u64,
    pub workers: usize,
    pub repetitions: usize,
    /// Half-open range `[lo, hi)` of each uniform edge draw.
    pub range: (f64, f64),
    /// Divide each draw by its longest edge before asking the oracle.
    pub normalize: bool,
    pub seed: Option<u64>,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self::conditional()
    }
}

impl SamplerCfg {
    /// Rejection sampling of normalized draws (reference min/max measurement).
    pub fn conditional() -> Self {
        Self {
            design: Design::Conditional,
            algorithm: Algorithm::ClosedForm,
            trials_per_worker: cfg::TRIALS_PER_WORKER,
            workers: cfg::default_workers(),
            repetitions: cfg::REPETITIONS,
            range: cfg::SAMPLE_RANGE,
            normalize: true,
            seed: None,
        }
    }

    /// Unconditional feasibility of raw draws (reference valid-fraction measurement).
    pub fn direct() -> Self {
        Self {
            design: Design::Direct,
            normalize: false,
            ..Self::conditional()
        }
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        if self.trials_per_worker == 0 {
            return Err(SampleError::invalid("trials_per_worker must be > 0"));
        }
        if self.workers == 0 {
            return Err(SampleError::invalid("workers must be > 0"));
        }
        if self.repetitions == 0 {
            return Err(SampleError::invalid("repetitions must be > 0"));
        }
        let (lo, hi) = self.range;
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(SampleError::invalid("range bounds must be finite"));
        }
        if lo < 0.0 {
            return Err(SampleError::invalid("range must be non-negative"));
        }
        if lo >= hi {
            return Err(SampleError::invalid("range must satisfy lo < hi"));
        }
        Ok(())
    }
}

/// Sampler failures.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams {
        reason: String,
    },
    /// The oracle raised a domain error on `edges`.
    Domain {
        edges: Edges6,
        source: FeasibilityError,
    },
    WorkerPanicked {
        worker: usize,
    },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::Domain { edges, source } => {
                write!(f, "domain error on edges {edges}: {source}")
            }
            Self::WorkerPanicked { worker } => write!(f, "sampler worker {worker} panicked"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PoolError> for SampleError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::WorkerPanicked { worker } => Self::WorkerPanicked { worker },
        }
    }
}

/// Mean of repeated run percentages with a one-sided-max tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub runs: Vec<f64>,
    pub average: f64,
    pub tolerance: f64,
}

impl Estimate {
    /// `None` for an empty slice.
    pub fn from_runs(runs: Vec<f64>) -> Option<Self> {
        if runs.is_empty() {
            return None;
        }
        let smallest = runs.iter().copied().fold(f64::INFINITY, f64::min);
        let largest = runs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = runs.iter().sum::<f64>() / runs.len() as f64;
        let tolerance = (largest - average).max(average - smallest);
        Some(Self {
            runs,
            average,
            tolerance,
        })
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} +/- {:.5}", self.average, self.tolerance)
    }
}

/// One parallel run: the unweighted mean of the worker percentages.
pub fn run_once(cfg: &SamplerCfg, run: usize) -> Result<f64, SampleError> {
    cfg.validate()?;
    let per_worker = pool::scatter(cfg.workers, |worker| {
        let mut rng = WorkerToken::rng(cfg.seed, run, worker);
        trial::worker_percent(cfg, &mut rng)
    })?;
    let mut sum = 0.0;
    for percent in per_worker {
        sum += percent?;
    }
    Ok(sum / cfg.workers as f64)
}

/// Repeat `run_once` and aggregate. `on_run` sees each run's value as it lands.
pub fn estimate(
    cfg: &SamplerCfg,
    mut on_run: impl FnMut(usize, f64),
) -> Result<Estimate, SampleError> {
    cfg.validate()?;
    info!(
        design = %cfg.design,
        algorithm = %cfg.algorithm,
        workers = cfg.workers,
        trials = cfg.trials_per_worker,
        repetitions = cfg.repetitions,
        seeded = cfg.seed.is_some(),
        "estimate"
    );
    let mut runs = Vec::with_capacity(cfg.repetitions);
    for run in 0..cfg.repetitions {
        let value = run_once(cfg, run)?;
        debug!(run, value, "run");
        on_run(run, value);
        runs.push(value);
    }
    let est = Estimate::from_runs(runs).ok_or_else(|| SampleError::invalid("no runs"))?;
    info!(average = est.average, tolerance = est.tolerance, "estimate_done");
    Ok(est)
}
