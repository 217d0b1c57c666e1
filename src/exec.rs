use rayon::prelude::*;
use thiserror::Error;

use crate::divisors::enumerate_divisors;

#[derive(Debug, Error)]
pub enum FactorizeError {
    /// Raised during upfront validation, before any enumeration or worker
    /// dispatch happens. Carries the offending value.
    #[error("invalid argument {value}: only non-negative integer arguments are accepted")]
    InvalidArgument { value: i64 },

    /// The per-call worker pool could not be constructed; no workers were
    /// started and no partial results exist.
    #[error("failed to build worker pool")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// Worker pool sizing for the parallel strategy.
pub struct WorkerPool {
    num_workers: usize,
}

impl WorkerPool {
    pub fn new(threads: Option<usize>) -> Self {
        let num_workers = threads.unwrap_or_else(num_cpus::get);
        Self { num_workers }
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

/// Checks the whole batch before anything is computed. First violation wins.
fn validate(numbers: &[i64]) -> Result<(), FactorizeError> {
    for &n in numbers {
        if n < 0 {
            return Err(FactorizeError::InvalidArgument { value: n });
        }
    }
    Ok(())
}

/// Enumerates divisors for every number on the calling thread, strictly in
/// input order.
pub fn run_sequential(numbers: &[i64]) -> Result<Vec<Vec<u64>>, FactorizeError> {
    validate(numbers)?;

    Ok(numbers
        .iter()
        .map(|&n| enumerate_divisors(n as u64))
        .collect())
}

/// Enumerates divisors across a worker pool built fresh for this call.
///
/// Validation happens before the pool exists, so an invalid batch never
/// spawns a worker. Dropping the pool at the end of the call joins every
/// worker on all exit paths. `collect()` on the indexed parallel iterator
/// reassembles results in input order no matter which worker finished when;
/// a panic inside a worker resurfaces at the join and aborts the whole
/// batch with no partial results.
pub fn run_parallel(
    numbers: &[i64],
    workers: &WorkerPool,
) -> Result<Vec<Vec<u64>>, FactorizeError> {
    validate(numbers)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.num_workers())
        .build()?;

    let results = pool.install(|| {
        numbers
            .par_iter()
            .map(|&n| enumerate_divisors(n as u64))
            .collect()
    });

    Ok(results)
}
