//! Distributed execution of the search across worker threads.
//!
//! # Architecture
//!
//! - A **coordinator** that receives signals and decides global termination
//! - One **worker** per partition, enumerating candidates and hashing them
//! - A **channel system** carrying the three-message protocol
//!   (`Match`, `Completion`, `Abort`)
//! - A **shared abort flag** so workers can poll for cancellation without
//!   a channel receive
//!
//! Workers share no mutable state and never talk to each other; all
//! coordination flows through the coordinator's serialized signal queue.

pub mod channel;
pub mod coordinator;

pub use channel::{CoordinatorMessage, WorkerMessage};
pub use coordinator::run_distributed_search;
