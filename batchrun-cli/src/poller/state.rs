//! Mutable state of one polling run

use batchrun_core::domain::job::JobStatus;

use super::config::PollConfig;

/// Counters and last known status, owned by a single polling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PollState {
    status: JobStatus,
    remaining_checks: u32,
    remaining_failures: u32,
    max_failures: u32,
}

impl PollState {
    pub(crate) fn new(config: PollConfig, status: JobStatus) -> Self {
        Self {
            status,
            remaining_checks: config.max_checks(),
            remaining_failures: config.max_failures(),
            max_failures: config.max_failures(),
        }
    }

    pub(crate) fn status(&self) -> JobStatus {
        self.status
    }

    pub(crate) fn remaining_checks(&self) -> u32 {
        self.remaining_checks
    }

    pub(crate) fn remaining_failures(&self) -> u32 {
        self.remaining_failures
    }

    pub(crate) fn has_checks_left(&self) -> bool {
        self.remaining_checks > 0
    }

    /// Consumes one unit of the failure budget, true once it is spent
    pub(crate) fn record_failure(&mut self) -> bool {
        self.remaining_failures = self.remaining_failures.saturating_sub(1);
        self.remaining_failures == 0
    }

    /// Records a fetched status, returning the previous one if it changed
    pub(crate) fn record_status(&mut self, status: JobStatus) -> Option<JobStatus> {
        if status == self.status {
            return None;
        }
        Some(std::mem::replace(&mut self.status, status))
    }

    /// Closes a successful non-terminal check
    pub(crate) fn complete_cycle(&mut self) {
        self.remaining_failures = self.max_failures;
        self.remaining_checks = self.remaining_checks.saturating_sub(1);
    }
}
