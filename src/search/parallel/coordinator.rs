//! Coordinator loop and worker bodies for the distributed search.
//!
//! The coordinator never searches. It blocks on the serialized signal queue,
//! counts match and completion signals, and decides termination: either every
//! target digest has been matched (broadcast abort, conclude immediately) or
//! every worker has exhausted its partition.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::charset::Charset;
use crate::credentials::DigestEntry;
use crate::error::Error;
use crate::search::config::SearchConfig;
use crate::search::generator::{CandidateGenerator, Termination};
use crate::search::matcher::DigestMatcher;
use crate::search::parallel::channel::{
    create_channels, CoordinatorChannels, WorkerChannels, WorkerMessage,
};
use crate::search::partition::Partition;
use crate::search::result::{SearchOutcome, SearchSummary, WorkerStats};

/// Run the full distributed search: spawn one thread per worker, drive the
/// coordinator loop to a conclusion, then join the workers and fold in any
/// completion signals that were still in flight.
pub fn run_distributed_search(
    charset: &Charset,
    targets: &[DigestEntry],
    config: &SearchConfig,
) -> Result<SearchSummary, Error> {
    config.validate(charset, targets)?;

    let start = Instant::now();
    let num_workers = config.num_workers;
    let population = targets.len();

    let (coordinator_channels, worker_channels) = create_channels(num_workers);

    // Each worker gets its own handle to the read-only charset and target
    // list; nothing mutable is shared between workers.
    let charset = Arc::new(charset.clone());
    let targets: Arc<Vec<DigestEntry>> = Arc::new(targets.to_vec());

    let handles: Vec<_> = worker_channels
        .into_iter()
        .enumerate()
        .map(|(worker_id, channels)| {
            let charset = Arc::clone(&charset);
            let targets = Arc::clone(&targets);
            let config = config.clone();
            thread::spawn(move || run_worker(worker_id, &charset, &targets, &config, channels))
        })
        .collect();

    tracing::info!(num_workers, population, "search started");

    let mut state = CoordinatorState::new(num_workers, population);
    let outcome = state.run(&coordinator_channels);

    // Cancelled workers exit within one inner enumeration cycle, so joining
    // cannot stall the conclusion already recorded above.
    for handle in handles {
        let _ = handle.join();
    }

    state.drain(&coordinator_channels);

    Ok(state.into_summary(outcome, coordinator_channels.abort.is_set(), start.elapsed()))
}

/// Aggregate counters owned exclusively by the coordinator. Fed only by
/// received signals, never by inspecting worker state.
struct CoordinatorState {
    num_workers: usize,
    population: usize,
    workers_done: usize,
    total_cracked: u64,
    total_checked: u64,
    worker_stats: Vec<WorkerStats>,
}

impl CoordinatorState {
    fn new(num_workers: usize, population: usize) -> Self {
        Self {
            num_workers,
            population,
            workers_done: 0,
            total_cracked: 0,
            total_checked: 0,
            worker_stats: Vec::with_capacity(num_workers),
        }
    }

    /// Blocking receive loop. Returns as soon as a conclusion is reached.
    fn run(&mut self, channels: &CoordinatorChannels) -> SearchOutcome {
        loop {
            match channels.from_workers.recv() {
                Ok(WorkerMessage::Match { worker_id }) => {
                    self.total_cracked += 1;
                    tracing::debug!(worker_id, total_cracked = self.total_cracked, "match signal");
                    if self.total_cracked >= self.population as u64 {
                        tracing::info!("all targets cracked, broadcasting abort");
                        channels.broadcast_abort();
                        return SearchOutcome::AllCracked;
                    }
                }
                Ok(WorkerMessage::Completion {
                    worker_id,
                    checked,
                    cracked,
                    cancelled,
                }) => {
                    tracing::debug!(worker_id, checked, cracked, "completion signal");
                    self.record_completion(worker_id, checked, cracked, cancelled);
                    if self.workers_done == self.num_workers {
                        return SearchOutcome::AllExhausted;
                    }
                }
                Err(_) => {
                    // All senders dropped. Workers always send a completion
                    // before exiting, so this only happens after the last one.
                    return SearchOutcome::AllExhausted;
                }
            }
        }
    }

    /// Fold in signals that were already queued when the conclusion was
    /// reached, so the summary reflects every worker's counters. The
    /// conclusion itself never waits on these.
    fn drain(&mut self, channels: &CoordinatorChannels) {
        while let Ok(msg) = channels.from_workers.try_recv() {
            match msg {
                WorkerMessage::Match { .. } => self.total_cracked += 1,
                WorkerMessage::Completion {
                    worker_id,
                    checked,
                    cracked,
                    cancelled,
                } => self.record_completion(worker_id, checked, cracked, cancelled),
            }
        }
    }

    fn record_completion(&mut self, worker_id: usize, checked: u64, cracked: u64, cancelled: bool) {
        self.workers_done += 1;
        self.total_checked += checked;
        self.worker_stats.push(WorkerStats {
            worker_id,
            checked,
            cracked,
            cancelled,
        });
    }

    fn into_summary(
        mut self,
        outcome: SearchOutcome,
        aborted: bool,
        elapsed: std::time::Duration,
    ) -> SearchSummary {
        self.worker_stats.sort_by_key(|s| s.worker_id);
        SearchSummary {
            outcome,
            total_cracked: self.total_cracked,
            population: self.population,
            workers_done: self.workers_done,
            total_checked: self.total_checked,
            aborted,
            elapsed,
            worker_stats: self.worker_stats,
        }
    }
}

/// Worker body: compute the partition, enumerate it, signal matches as they
/// happen, and send exactly one completion signal at exit, cancelled or not.
fn run_worker(
    worker_id: usize,
    charset: &Charset,
    targets: &[DigestEntry],
    config: &SearchConfig,
    channels: WorkerChannels,
) {
    let partition = Partition::new(worker_id, config.num_workers);

    if config.verbose {
        let prefixes: String = partition
            .first_symbol_indices(charset.len())
            .map(|i| charset.symbols()[i] as char)
            .collect();
        tracing::debug!(worker_id, %prefixes, "partition assigned");
    }

    let mut matcher = DigestMatcher::new(targets);
    let mut generator = CandidateGenerator::new(charset, config.password_len);

    let to_coordinator = channels.to_coordinator.clone();
    let termination = generator.run(
        partition,
        || channels.abort_requested(),
        &mut |candidate| {
            matcher.check(candidate, |name, plaintext| {
                tracing::info!(
                    worker_id,
                    user = name,
                    password = %String::from_utf8_lossy(plaintext),
                    "password recovered"
                );
                let _ = to_coordinator.send(WorkerMessage::Match { worker_id });
            });
        },
    );

    let _ = channels.to_coordinator.send(WorkerMessage::Completion {
        worker_id,
        checked: generator.checked(),
        cracked: matcher.cracked(),
        cancelled: termination == Termination::Cancelled,
    });
}
