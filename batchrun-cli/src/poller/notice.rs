//! Status transition notices and poller observation hooks

use batchrun_client::ClientError;
use batchrun_core::domain::job::{JobId, JobStatus, SubmittedJob};

/// Severity of a status transition notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The job moved forward but is still in flight
    Info,
    /// The job succeeded
    Success,
    /// The job failed
    Alarm,
}

/// Classifies the status a job transitioned into
pub fn notice_level(status: JobStatus) -> NoticeLevel {
    match status {
        JobStatus::Submitted
        | JobStatus::Pending
        | JobStatus::Runnable
        | JobStatus::Starting
        | JobStatus::Running => NoticeLevel::Info,
        JobStatus::Succeeded => NoticeLevel::Success,
        JobStatus::Failed => NoticeLevel::Alarm,
    }
}

/// A change of the recorded status of a watched job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub job_id: JobId,
    pub from: JobStatus,
    pub to: JobStatus,
}

impl Transition {
    pub fn level(&self) -> NoticeLevel {
        notice_level(self.to)
    }
}

/// Receives progress callbacks from the status poller
///
/// Observers only report; they cannot influence how polling proceeds.
pub trait PollObserver {
    /// The recorded status changed
    fn on_transition(&mut self, _transition: &Transition) {}

    /// A status fetch failed and `remaining_failures` more are tolerated
    fn on_fetch_failure(
        &mut self,
        _job: &SubmittedJob,
        _error: &ClientError,
        _remaining_failures: u32,
    ) {
    }

    /// A non-terminal check completed, `remaining_checks` are left
    fn on_cycle_complete(&mut self, _job: &SubmittedJob, _remaining_checks: u32) {}
}
