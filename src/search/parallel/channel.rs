//! Signaling protocol between workers and the coordinator.

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerMessage {
    /// A candidate matched a target digest. Sent once per confirmed match,
    /// immediately, never batched. Carries no plaintext.
    Match { worker_id: usize },
    /// The worker has finished, exhausted or cancelled. Sent exactly once,
    /// at worker exit.
    Completion {
        worker_id: usize,
        checked: u64,
        cracked: u64,
        cancelled: bool,
    },
}

/// Message broadcast from the coordinator to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorMessage {
    /// Stop enumerating and exit. Sent at most once, only when every target
    /// has been cracked.
    Abort,
}

/// Shared flag backing the abort broadcast. Workers poll it at the outermost
/// enumeration level, so observing it never requires a channel receive.
#[derive(Debug, Default)]
pub struct AbortFlag(AtomicBool);

impl AbortFlag {
    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Channel endpoints for one worker.
pub struct WorkerChannels {
    /// Send match and completion signals to the coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Receive the abort broadcast.
    pub from_coordinator: Receiver<CoordinatorMessage>,
    /// Shared flag for cheap abort polling.
    pub abort: Arc<AbortFlag>,
}

impl WorkerChannels {
    /// Whether a global abort has been broadcast, observed either through
    /// the shared flag or an explicit message.
    pub fn abort_requested(&self) -> bool {
        if self.abort.is_set() {
            return true;
        }
        matches!(
            self.from_coordinator.try_recv(),
            Ok(CoordinatorMessage::Abort)
        )
    }
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive signals from all workers, serialized into one queue.
    pub from_workers: Receiver<WorkerMessage>,
    /// One sender per worker for the abort broadcast.
    pub to_workers: Vec<Sender<CoordinatorMessage>>,
    /// Shared flag set alongside the broadcast.
    pub abort: Arc<AbortFlag>,
}

impl CoordinatorChannels {
    /// Broadcast a global abort to all workers. Send failures are ignored:
    /// a worker that already exited no longer needs the signal.
    pub fn broadcast_abort(&self) {
        self.abort.set();
        for tx in &self.to_workers {
            let _ = tx.send(CoordinatorMessage::Abort);
        }
    }
}

/// Create the channel wiring for the given number of workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let abort = Arc::new(AbortFlag::default());

    // Unbounded worker-to-coordinator channel: sends are fire-and-forget
    // and must never block a worker mid-enumeration.
    let (worker_tx, coordinator_rx) = unbounded();

    let mut to_workers = Vec::with_capacity(num_workers);
    let mut worker_channels = Vec::with_capacity(num_workers);

    for _ in 0..num_workers {
        // At most one Abort ever travels this way.
        let (coord_tx, worker_rx) = bounded(1);
        to_workers.push(coord_tx);
        worker_channels.push(WorkerChannels {
            to_coordinator: worker_tx.clone(),
            from_coordinator: worker_rx,
            abort: Arc::clone(&abort),
        });
    }

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        to_workers,
        abort,
    };

    (coordinator, worker_channels)
}
