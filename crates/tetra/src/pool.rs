//! Scoped fan-out/fan-in over a fixed number of workers.
//!
//! Each call spawns `workers` fresh scoped threads, runs `job(worker_id)` on
//! each, and joins them all before returning. Results come back indexed by
//! worker id. Nothing is shared between calls.

use std::fmt;
use std::thread;

/// Failure to collect a worker's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    WorkerPanicked { worker: usize },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPanicked { worker } => write!(f, "worker {worker} panicked"),
        }
    }
}

impl std::error::Error for PoolError {}

/// Run `job` on `workers` threads and gather the results in worker order.
///
/// All threads are joined before returning, also when one of them panicked.
pub fn scatter<T, F>(workers: usize, job: F) -> Result<Vec<T>, PoolError>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let job = &job;
    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| s.spawn(move || job(worker)))
            .collect();
        let mut out = Vec::with_capacity(workers);
        let mut first_panic = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(value) => out.push(value),
                Err(_) => {
                    first_panic.get_or_insert(worker);
                }
            }
        }
        match first_panic {
            Some(worker) => Err(PoolError::WorkerPanicked { worker }),
            None => Ok(out),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_indexed_by_worker() {
        let out = scatter(8, |w| w * w).unwrap();
        assert_eq!(out, vec![0, 1, 4, 9, 16, 25, 36, 49]);
    }

    #[test]
    fn zero_workers_is_empty() {
        let out: Vec<u8> = scatter(0, |_| unreachable!()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn panic_is_reported_with_worker_id() {
        let err = scatter(4, |w| {
            if w == 2 {
                panic!("boom");
            }
            w
        })
        .unwrap_err();
        assert_eq!(err, PoolError::WorkerPanicked { worker: 2 });
    }
}
