use rayon::prelude::*;
use std::ops::Range;
use tracing::trace;

/// A task that writes one output per input index, with no merge step.
///
/// `execute` receives the first input index of a partition and the exclusive
/// output slice for that partition. The result must not depend on how the
/// indices are partitioned.
pub trait ScatterTask: Sync {
    type Output: Send;

    fn execute(&self, start: usize, out: &mut [Self::Output]);
}

/// Splits `out` along `partitions` and runs `task` on each slice.
///
/// `partitions` must tile `[0, out.len())` in order.
pub(crate) fn run<S: ScatterTask>(task: &S, partitions: &[Range<usize>], out: &mut [S::Output]) {
    if let [range] = partitions {
        task.execute(range.start, &mut out[range.clone()]);
        return;
    }

    let mut slices = Vec::with_capacity(partitions.len());
    let mut rest = out;
    for range in partitions {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        slices.push((range.start, head));
        rest = tail;
    }

    slices.into_par_iter().enumerate().for_each(|(worker, (start, slice))| {
        trace!(worker, start, len = slice.len(), "scatter partition");
        task.execute(start, slice);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::partition::Partitioner;

    struct SquareTask<'a> {
        values: &'a [i64],
    }

    impl ScatterTask for SquareTask<'_> {
        type Output = i64;

        fn execute(&self, start: usize, out: &mut [i64]) {
            for (offset, slot) in out.iter_mut().enumerate() {
                let v = self.values[start + offset];
                *slot = v * v;
            }
        }
    }

    #[test]
    fn test_output_independent_of_worker_count() {
        let values: Vec<i64> = (-20..20).collect();
        let task = SquareTask { values: &values };
        let expected: Vec<i64> = values.iter().map(|v| v * v).collect();

        for workers in 1..=values.len() + 3 {
            let mut out = vec![0; values.len()];
            run(&task, &Partitioner::new(workers).partitions(values.len()), &mut out);
            assert_eq!(out, expected, "mismatch with {} workers", workers);
        }
    }
}
