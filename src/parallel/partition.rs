use std::ops::Range;

/// Splits `[0, len)` into contiguous partitions, one per logical worker.
///
/// The first `len % workers` partitions hold one extra item, so sizes differ by
/// at most one and no partition is empty unless `len < workers`. In that case
/// the trailing partitions are the empty range `len..len`. Boundaries depend only
/// on `(len, workers)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partitioner {
    workers: usize,
}

impl Partitioner {
    /// A worker count of zero is treated as one.
    pub fn new(workers: usize) -> Self {
        Self { workers: workers.max(1) }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn partitions(&self, len: usize) -> Vec<Range<usize>> {
        let base = len / self.workers;
        let extra = len % self.workers;

        let mut start = 0;
        (0..self.workers)
            .map(|worker| {
                let size = base + usize::from(worker < extra);
                let range = start..start + size;
                start += size;
                range
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(len: usize, workers: usize) -> Vec<usize> {
        Partitioner::new(workers).partitions(len).iter().map(|r| r.len()).collect()
    }

    #[test]
    fn test_even_split() {
        assert_eq!(Partitioner::new(4).partitions(8), vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_remainder_goes_to_leading_partitions() {
        assert_eq!(sizes(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(sizes(9, 4), vec![3, 2, 2, 2]);
    }

    #[test]
    fn test_fewer_items_than_workers() {
        assert_eq!(Partitioner::new(5).partitions(3), vec![0..1, 1..2, 2..3, 3..3, 3..3]);
    }

    #[test]
    fn test_zero_workers_means_one() {
        let p = Partitioner::new(0);
        assert_eq!(p.workers(), 1);
        assert_eq!(p.partitions(7), vec![0..7]);
    }

    #[test]
    fn test_cover_is_exact_and_disjoint() {
        for len in 0..50 {
            for workers in 1..12 {
                let parts = Partitioner::new(workers).partitions(len);
                assert_eq!(parts.len(), workers);
                let mut expected_start = 0;
                for range in &parts {
                    assert_eq!(range.start, expected_start, "gap or overlap at len={} workers={}", len, workers);
                    expected_start = range.end;
                }
                assert_eq!(expected_start, len);
                if len >= workers {
                    assert!(parts.iter().all(|r| !r.is_empty()));
                }
            }
        }
    }
}
