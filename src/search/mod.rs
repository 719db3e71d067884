//! Exhaustive keyspace search over a fixed-length password space.
//!
//! The search is split into:
//! - Partition: deterministic, non-overlapping assignment of first-symbol
//!   indices to workers
//! - Generator: depth-first enumeration of one worker's partition
//! - Matcher: SHA-1 hashing and exact digest comparison
//! - Parallel: worker threads plus the coordinator's signaling protocol

pub mod config;
pub mod generator;
pub mod matcher;
pub mod parallel;
pub mod partition;
pub mod result;

pub use config::SearchConfig;
pub use generator::{CandidateGenerator, Termination};
pub use matcher::DigestMatcher;
pub use parallel::run_distributed_search;
pub use partition::Partition;
pub use result::{SearchOutcome, SearchSummary, WorkerStats};
