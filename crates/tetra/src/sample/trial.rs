//! Per-trial draws and the per-worker trial loop.

use super::{Design, SampleError, SamplerCfg};
use crate::edges::Edges6;
use crate::feasible::Algorithm;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token for one worker of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerToken {
    pub seed: u64,
    pub run: u64,
    pub worker: u64,
}

impl WorkerToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let stream = mix(self.run.wrapping_add(0x9e3779b97f4a7c15)) ^ self.worker;
        StdRng::seed_from_u64(mix(self.seed ^ mix(stream)))
    }

    /// Seeded generator when `seed` is set, OS entropy otherwise.
    pub fn rng(seed: Option<u64>, run: usize, worker: usize) -> StdRng {
        match seed {
            Some(seed) => Self {
                seed,
                run: run as u64,
                worker: worker as u64,
            }
            .to_std_rng(),
            None => StdRng::from_entropy(),
        }
    }
}

/// Six independent draws from `dist`.
#[inline]
pub fn draw_edges<R: Rng + ?Sized>(rng: &mut R, dist: &Uniform<f64>) -> Edges6 {
    Edges6(std::array::from_fn(|_| dist.sample(&mut *rng)))
}

#[inline]
pub(super) fn oracle(algorithm: Algorithm, edges: Edges6) -> Result<bool, SampleError> {
    algorithm
        .eval(&edges)
        .map_err(|source| SampleError::Domain { edges, source })
}

/// Percentage of `cfg.trials_per_worker` trials that hit the design's event.
pub(super) fn worker_percent<R: Rng + ?Sized>(
    cfg: &SamplerCfg,
    rng: &mut R,
) -> Result<f64, SampleError> {
    let dist = Uniform::new(cfg.range.0, cfg.range.1);
    let draw = |rng: &mut R| {
        let e = draw_edges(rng, &dist);
        if cfg.normalize {
            e.normalized()
        } else {
            e
        }
    };

    let mut counted: u64 = 0;
    for _ in 0..cfg.trials_per_worker {
        let hit = match cfg.design {
            Design::Conditional => loop {
                let e = draw(&mut *rng);
                if oracle(cfg.algorithm, e)? {
                    break e.min_max_opposite();
                }
            },
            Design::Direct => {
                let [e0, e1, e2, e3, e4, e5] = draw(&mut *rng).0;
                oracle(cfg.algorithm, Edges6::new(e0, e1, e2, e4, e3, e5))?
            }
        };
        if hit {
            counted += 1;
        }
    }
    Ok(100.0 * counted as f64 / cfg.trials_per_worker as f64)
}
