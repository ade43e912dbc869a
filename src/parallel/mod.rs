//! Partitioned batch execution on top of rayon.
//!
//! Two task shapes are supported. A [`ReduceTask`] gives every logical worker a
//! private accumulator that is merged on the calling thread once all workers
//! have joined. A [`ScatterTask`] writes straight into disjoint slices of a
//! pre-sized output and needs no merge step.

use crate::error::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

pub mod partition;
pub mod reduce;
pub mod scatter;

pub use partition::Partitioner;
pub use reduce::ReduceTask;
pub use scatter::ScatterTask;

/// Arrays shorter than this run as a single partition on the calling thread.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 200_000;

/// Worker count and sequential cutoff for batch dispatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    workers: usize,
    min_parallel_len: usize,
}

impl DispatchConfig {
    pub fn new(workers: usize) -> Self {
        Self { workers: workers.max(1), min_parallel_len: DEFAULT_MIN_PARALLEL_LEN }
    }

    /// One worker, everything on the calling thread.
    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Sets the sequential cutoff. Zero always partitions across all workers.
    pub fn with_min_parallel_len(mut self, min_parallel_len: usize) -> Self {
        self.min_parallel_len = min_parallel_len;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn min_parallel_len(&self) -> usize {
        self.min_parallel_len
    }

    /// Number of logical workers a dispatch over `len` items will use.
    pub fn workers_for(&self, len: usize) -> usize {
        if len < self.min_parallel_len { 1 } else { self.workers }
    }
}

impl Default for DispatchConfig {
    /// Sized by rayon's view of the environment, which honours `RAYON_NUM_THREADS`.
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

/// Runs reduce and scatter tasks under a [`DispatchConfig`].
///
/// Every dispatch blocks until all partitions are complete. By default work runs
/// on rayon's global pool; [`Dispatcher::with_pool`] builds a dedicated pool with
/// exactly `workers` threads instead.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config, pool: None }
    }

    pub fn sequential() -> Self {
        Self::new(DispatchConfig::sequential())
    }

    pub fn with_pool(config: DispatchConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers())
            .thread_name(|i| format!("aabbkit-worker-{}", i))
            .build()?;
        debug!(workers = config.workers(), "built dedicated worker pool");
        Ok(Self { config, pool: Some(Arc::new(pool)) })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn partitions(&self, len: usize) -> Vec<Range<usize>> {
        Partitioner::new(self.config.workers_for(len)).partitions(len)
    }

    /// Runs `task` over `[0, len)` and returns the per-worker accumulators in
    /// worker-id order.
    pub fn reduce_partials<R: ReduceTask>(&self, task: &R, len: usize) -> Vec<R::Accumulator> {
        let partitions = self.partitions(len);
        debug!(len, workers = partitions.len(), pooled = self.pool.is_some(), "dispatching reduce");
        if partitions.len() == 1 {
            return reduce::run_partials(task, &partitions);
        }
        self.install(|| reduce::run_partials(task, &partitions))
    }

    /// Runs `task` over `[0, len)` and folds the worker results into `into`,
    /// in worker-id order, on the calling thread.
    pub fn reduce<R: ReduceTask>(&self, task: &R, len: usize, into: &mut R::Accumulator) {
        let partials = self.reduce_partials(task, len);
        reduce::fold(task, &partials, into);
    }

    /// Runs `task` over `[0, out.len())`, each worker writing its own slice of `out`.
    pub fn scatter<S: ScatterTask>(&self, task: &S, out: &mut [S::Output]) {
        let partitions = self.partitions(out.len());
        debug!(len = out.len(), workers = partitions.len(), pooled = self.pool.is_some(), "dispatching scatter");
        if partitions.len() == 1 {
            scatter::run(task, &partitions, out);
            return;
        }
        self.install(|| scatter::run(task, &partitions, out));
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl From<DispatchConfig> for Dispatcher {
    fn from(config: DispatchConfig) -> Self {
        Self::new(config)
    }
}
