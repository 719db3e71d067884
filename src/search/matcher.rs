//! SHA-1 digest matching against the loaded target set.

use sha1::{Digest, Sha1};

use crate::credentials::{DigestEntry, DIGEST_LEN};

#[derive(Debug, Clone)]
struct Target {
    name: String,
    digest: [u8; DIGEST_LEN],
    /// Process-local bookkeeping only; a matched entry stays in the scan
    /// list and keeps producing signals if hit again.
    cracked: bool,
}

/// Hashes candidates and compares them against every target entry with an
/// exact raw-byte comparison. Each worker owns one matcher; the target list
/// is never shared or mutated across workers.
#[derive(Debug)]
pub struct DigestMatcher {
    targets: Vec<Target>,
    cracked: u64,
}

impl DigestMatcher {
    pub fn new(entries: &[DigestEntry]) -> Self {
        let targets = entries
            .iter()
            .map(|e| Target {
                name: e.name.clone(),
                digest: e.digest,
                cracked: false,
            })
            .collect();
        Self {
            targets,
            cracked: 0,
        }
    }

    /// Hash `candidate` and scan all targets. `on_match` is invoked once per
    /// matching entry — entries sharing a digest each count as a separate
    /// match. Returns the number of entries matched by this candidate.
    pub fn check<F>(&mut self, candidate: &[u8], mut on_match: F) -> usize
    where
        F: FnMut(&str, &[u8]),
    {
        let hash = Sha1::digest(candidate);
        let mut found = 0;
        for target in &mut self.targets {
            if target.digest[..] == hash[..] {
                target.cracked = true;
                found += 1;
                on_match(&target.name, candidate);
            }
        }
        self.cracked += found as u64;
        found
    }

    /// Total confirmed matches so far, one per (candidate, entry) pair.
    pub fn cracked(&self) -> u64 {
        self.cracked
    }

    /// Number of target entries in the scan list.
    pub fn population(&self) -> usize {
        self.targets.len()
    }
}
