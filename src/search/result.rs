//! Search summary types and report formatting.

use std::time::Duration;

/// How the distributed search concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every target digest was matched; the coordinator broadcast an abort.
    AllCracked,
    /// Every worker exhausted its partition without cracking everything.
    AllExhausted,
}

/// Per-worker counters carried by a completion signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStats {
    pub worker_id: usize,
    /// Candidates this worker fully formed and hashed.
    pub checked: u64,
    /// Matches this worker confirmed locally.
    pub cracked: u64,
    /// Whether the worker stopped early on the abort broadcast.
    pub cancelled: bool,
}

/// Aggregate result of one distributed search run.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub outcome: SearchOutcome,
    /// Sum of match signals received by the coordinator. Never recomputed
    /// from worker state.
    pub total_cracked: u64,
    /// Number of target entries loaded at startup.
    pub population: usize,
    /// Completion signals received, including those folded in after an
    /// early-abort decision.
    pub workers_done: usize,
    /// Sum of `checked` over all received completion signals.
    pub total_checked: u64,
    /// Whether an abort broadcast was issued.
    pub aborted: bool,
    pub elapsed: Duration,
    pub worker_stats: Vec<WorkerStats>,
}

impl SearchSummary {
    pub fn all_cracked(&self) -> bool {
        self.outcome == SearchOutcome::AllCracked
    }

    /// Format the report the way the CLI prints it.
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        match self.outcome {
            SearchOutcome::AllCracked => s.push_str("All passwords found.\n"),
            SearchOutcome::AllExhausted => s.push_str("Search space exhausted.\n"),
        }
        s.push_str(&format!(
            "Cracked {} of {} entries ({} candidates checked).\n",
            self.total_cracked, self.population, self.total_checked
        ));
        for stats in &self.worker_stats {
            s.push_str(&format!(
                "Worker {} checked {} candidates, cracked {}{}.\n",
                stats.worker_id,
                stats.checked,
                stats.cracked,
                if stats.cancelled { " (cancelled)" } else { "" }
            ));
        }
        s.push_str(&format!("Time taken: {}.\n", format_elapsed(self.elapsed)));
        s
    }
}

/// Render a duration as hours, minutes, seconds and milliseconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    let msec = elapsed.as_millis();
    format!(
        "{} hours, {} minutes, {} seconds and {} milliseconds",
        msec / 3_600_000,
        (msec % 3_600_000) / 60_000,
        (msec % 60_000) / 1_000,
        msec % 1_000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        let elapsed = Duration::from_millis(3_600_000 + 2 * 60_000 + 3_000 + 45);
        assert_eq!(
            format_elapsed(elapsed),
            "1 hours, 2 minutes, 3 seconds and 45 milliseconds"
        );
    }

    #[test]
    fn test_format_summary_mentions_outcome() {
        let summary = SearchSummary {
            outcome: SearchOutcome::AllCracked,
            total_cracked: 2,
            population: 2,
            workers_done: 3,
            total_checked: 100,
            aborted: true,
            elapsed: Duration::from_millis(12),
            worker_stats: vec![WorkerStats {
                worker_id: 0,
                checked: 100,
                cracked: 2,
                cancelled: false,
            }],
        };
        let text = summary.format_summary();
        assert!(text.contains("All passwords found"));
        assert!(text.contains("Cracked 2 of 2"));
        assert!(text.contains("Worker 0 checked 100"));
    }
}
