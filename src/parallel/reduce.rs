use rayon::prelude::*;
use std::ops::Range;
use tracing::trace;

/// A task that accumulates a partition of items into a worker-private value.
///
/// Each logical worker owns exactly one accumulator, handed to
/// [`accumulate`](ReduceTask::accumulate) by the engine. There is no way to run
/// the task without one, so workers never share mutable state.
pub trait ReduceTask: Sync {
    type Accumulator: Send;

    /// The neutral starting value of every worker accumulator.
    fn identity(&self) -> Self::Accumulator;

    /// Folds the items in `range`, in index order, into `acc`.
    fn accumulate(&self, acc: &mut Self::Accumulator, range: Range<usize>);

    /// Merges `from` into `into`. Must be associative and commutative.
    fn combine(&self, into: &mut Self::Accumulator, from: &Self::Accumulator);
}

/// Runs `task` over `partitions` and returns one accumulator per partition,
/// indexed by worker id.
pub(crate) fn run_partials<R: ReduceTask>(task: &R, partitions: &[Range<usize>]) -> Vec<R::Accumulator> {
    let mut partials: Vec<R::Accumulator> = partitions.iter().map(|_| task.identity()).collect();

    if let [range] = partitions {
        task.accumulate(&mut partials[0], range.clone());
        return partials;
    }

    partials
        .par_iter_mut()
        .zip(partitions.par_iter())
        .enumerate()
        .for_each(|(worker, (acc, range))| {
            trace!(worker, start = range.start, end = range.end, "reduce partition");
            task.accumulate(acc, range.clone());
        });

    partials
}

/// Folds `partials` into `into` in worker-id order.
pub(crate) fn fold<R: ReduceTask>(task: &R, partials: &[R::Accumulator], into: &mut R::Accumulator) {
    for partial in partials {
        task.combine(into, partial);
    }
}
