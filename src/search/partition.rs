//! Deterministic partitioning of the first-symbol index space.
//!
//! Worker `w` of `n` is responsible for every first-symbol index `i` with
//! `i % n == w % n`. The assignment is interleaved (round-robin) rather than
//! contiguous so that load stays balanced when the charset size is not a
//! multiple of the worker count. It is a pure function of the worker id and
//! worker count, so no coordination is needed to compute it.

/// The strided subset of first-symbol indices assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    worker_id: usize,
    worker_count: usize,
}

impl Partition {
    /// Create the partition for `worker_id` out of `worker_count` workers.
    /// `worker_count` must be at least 1; configuration validation rejects
    /// zero workers before any partition is built.
    pub fn new(worker_id: usize, worker_count: usize) -> Self {
        debug_assert!(worker_count > 0);
        Self {
            worker_id,
            worker_count,
        }
    }

    /// Iterate over the first-symbol indices assigned to this worker, in
    /// increasing order, within `0..charset_len`.
    pub fn first_symbol_indices(&self, charset_len: usize) -> impl Iterator<Item = usize> {
        (self.worker_id % self.worker_count..charset_len).step_by(self.worker_count)
    }

    /// Whether `index` belongs to this worker's partition.
    pub fn contains(&self, index: usize) -> bool {
        index % self.worker_count == self.worker_id % self.worker_count
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }
}
