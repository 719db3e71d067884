//! Depth-first candidate enumeration over an assigned partition.

use crate::charset::Charset;
use crate::search::partition::Partition;

/// How an enumeration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every candidate in the assigned partition was produced.
    Exhausted,
    /// A cancellation signal was observed at the outermost level.
    Cancelled,
}

/// Enumerates every fixed-length string over a charset whose first symbol
/// lies in the caller's partition, writing each candidate into a single
/// reusable buffer. Only position 0 is restricted to the partition's stride;
/// all deeper positions iterate the full charset — that asymmetry is what
/// realizes the partition.
#[derive(Debug)]
pub struct CandidateGenerator<'a> {
    symbols: &'a [u8],
    buf: Vec<u8>,
    checked: u64,
}

impl<'a> CandidateGenerator<'a> {
    /// Create a generator for candidates of length `len` over `charset`.
    /// The candidate buffer is allocated once and mutated in place for the
    /// whole enumeration.
    pub fn new(charset: &'a Charset, len: usize) -> Self {
        Self {
            symbols: charset.symbols(),
            buf: vec![0u8; len],
            checked: 0,
        }
    }

    /// Number of fully formed candidates produced so far, regardless of
    /// match outcome.
    pub fn checked(&self) -> u64 {
        self.checked
    }

    /// Run the enumeration, invoking `visit` exactly once per fully formed
    /// candidate in lexicographic depth-first order. `cancelled` is probed
    /// before each first-symbol index, so abort latency is bounded by one
    /// full inner cycle.
    pub fn run<C, F>(&mut self, partition: Partition, cancelled: C, visit: &mut F) -> Termination
    where
        C: Fn() -> bool,
        F: FnMut(&[u8]),
    {
        for i in partition.first_symbol_indices(self.symbols.len()) {
            if cancelled() {
                return Termination::Cancelled;
            }
            self.buf[0] = self.symbols[i];
            self.fill(1, visit);
        }
        Termination::Exhausted
    }

    fn fill<F>(&mut self, pos: usize, visit: &mut F)
    where
        F: FnMut(&[u8]),
    {
        if pos == self.buf.len() {
            self.checked += 1;
            visit(&self.buf);
            return;
        }
        for k in 0..self.symbols.len() {
            self.buf[pos] = self.symbols[k];
            self.fill(pos + 1, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn collect(charset: &Charset, len: usize, partition: Partition) -> Vec<String> {
        let mut out = Vec::new();
        let mut generator = CandidateGenerator::new(charset, len);
        let termination = generator.run(partition, || false, &mut |candidate| {
            out.push(String::from_utf8(candidate.to_vec()).unwrap());
        });
        assert_eq!(termination, Termination::Exhausted);
        out
    }

    #[test]
    fn test_full_enumeration_in_lexicographic_order() {
        let charset = Charset::from_symbols(b"ab").unwrap();
        let candidates = collect(&charset, 3, Partition::new(0, 1));
        assert_eq!(
            candidates,
            vec!["aaa", "aab", "aba", "abb", "baa", "bab", "bba", "bbb"]
        );
    }

    #[test]
    fn test_length_one() {
        let charset = Charset::from_symbols(b"xyz").unwrap();
        let candidates = collect(&charset, 1, Partition::new(0, 1));
        assert_eq!(candidates, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_partition_restricts_first_symbol_only() {
        let charset = Charset::from_symbols(b"abcd").unwrap();
        let candidates = collect(&charset, 2, Partition::new(1, 2));
        // First symbols b and d only; second position iterates the full charset.
        assert_eq!(
            candidates,
            vec!["ba", "bb", "bc", "bd", "da", "db", "dc", "dd"]
        );
    }

    #[test]
    fn test_partitions_jointly_cover_keyspace() {
        let charset = Charset::from_symbols(b"0123456789").unwrap();
        let mut all = Vec::new();
        for worker_id in 0..3 {
            all.extend(collect(&charset, 2, Partition::new(worker_id, 3)));
        }
        all.sort();
        assert_eq!(all.len(), 100);
        all.dedup();
        assert_eq!(all.len(), 100);
    }

    #[test]
    fn test_checked_counts_every_candidate() {
        let charset = Charset::from_symbols(b"ab").unwrap();
        let mut generator = CandidateGenerator::new(&charset, 3);
        generator.run(Partition::new(0, 1), || false, &mut |_| {});
        assert_eq!(generator.checked(), 8);
    }

    #[test]
    fn test_immediate_cancellation_produces_nothing() {
        let charset = Charset::from_symbols(b"ab").unwrap();
        let mut generator = CandidateGenerator::new(&charset, 3);
        let termination = generator.run(Partition::new(0, 1), || true, &mut |_| {
            panic!("no candidate should be produced");
        });
        assert_eq!(termination, Termination::Cancelled);
        assert_eq!(generator.checked(), 0);
    }

    #[test]
    fn test_cancellation_bounded_by_one_inner_cycle() {
        let charset = Charset::from_symbols(b"abc").unwrap();
        let flag = AtomicBool::new(false);
        let mut generator = CandidateGenerator::new(&charset, 2);
        let termination = generator.run(
            Partition::new(0, 1),
            || flag.load(Ordering::SeqCst),
            &mut |_| {
                // Request cancellation from inside the first inner cycle.
                flag.store(true, Ordering::SeqCst);
            },
        );
        assert_eq!(termination, Termination::Cancelled);
        // The inner cycle for the first symbol completes, then the outer
        // check observes the flag.
        assert_eq!(generator.checked(), 3);
    }
}
