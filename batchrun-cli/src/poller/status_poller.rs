//! Status poller
//!
//! Repeatedly fetches the status of one job until it succeeds, fails, or a
//! polling budget runs out. Failed fetches are retried immediately and do not
//! consume the poll budget; only successful non-terminal checks sleep and
//! count against it. Failed fetches stay below the default log level.

use batchrun_client::{ClientError, JobService};
use batchrun_core::domain::job::{JobId, JobStatus, SubmittedJob};
use thiserror::Error;
use tracing::{debug, info};

use super::config::{POLL_INTERVAL, PollConfig};
use super::notice::{PollObserver, Transition};
use super::state::PollState;

/// Why polling stopped without the job succeeding
#[derive(Debug, Error)]
pub enum TerminationReason {
    /// The service reported the job as failed
    #[error("job {job_name} ({job_id}) failed")]
    RemoteFailed { job_id: JobId, job_name: String },

    /// Too many consecutive status fetches failed
    #[error(
        "could not fetch the status of job {job_id} {attempts} times in a row (last known status {last_status})"
    )]
    FetchBudgetExhausted {
        job_id: JobId,
        attempts: u32,
        last_status: JobStatus,
        #[source]
        source: ClientError,
    },

    /// Every allowed check was used while the job was still in flight
    #[error("stopped watching job {job_id} after {max_checks} checks (last known status {last_status})")]
    PollBudgetExhausted {
        job_id: JobId,
        max_checks: u32,
        last_status: JobStatus,
    },
}

/// Watches a single job against a [`JobService`]
pub struct StatusPoller<'a, S: ?Sized> {
    service: &'a S,
    config: PollConfig,
}

impl<'a, S: JobService + ?Sized> StatusPoller<'a, S> {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `service` - The job service to fetch statuses from
    /// * `config` - Poll and fetch-failure budgets
    pub fn new(service: &'a S, config: PollConfig) -> Self {
        Self { service, config }
    }

    /// Waits for a freshly submitted job to finish
    pub async fn wait_until_finished<O: PollObserver + ?Sized>(
        &self,
        job: &SubmittedJob,
        observer: &mut O,
    ) -> Result<(), TerminationReason> {
        self.wait_from(job, JobStatus::Submitted, observer).await
    }

    /// Waits for a job to finish, starting from a known status
    ///
    /// # Arguments
    /// * `job` - The job to watch
    /// * `initial` - Status recorded before the first check
    /// * `observer` - Receives transitions, fetch failures and completed checks
    pub async fn wait_from<O: PollObserver + ?Sized>(
        &self,
        job: &SubmittedJob,
        initial: JobStatus,
        observer: &mut O,
    ) -> Result<(), TerminationReason> {
        let mut state = PollState::new(self.config, initial);

        info!(
            job_id = %job.id,
            max_checks = self.config.max_checks(),
            max_failures = self.config.max_failures(),
            "watching job"
        );

        while state.has_checks_left() {
            let status = match self.service.fetch_job_status(&job.id).await {
                Ok(status) => status,
                Err(error) => {
                    let exhausted = state.record_failure();
                    debug!(
                        job_id = %job.id,
                        remaining_failures = state.remaining_failures(),
                        "failed to fetch job status: {}",
                        error
                    );
                    observer.on_fetch_failure(job, &error, state.remaining_failures());

                    if exhausted {
                        return Err(TerminationReason::FetchBudgetExhausted {
                            job_id: job.id.clone(),
                            attempts: self.config.max_failures(),
                            last_status: state.status(),
                            source: error,
                        });
                    }
                    continue;
                }
            };

            if let Some(from) = state.record_status(status) {
                observer.on_transition(&Transition {
                    job_id: job.id.clone(),
                    from,
                    to: status,
                });
            }

            match state.status() {
                JobStatus::Succeeded => return Ok(()),
                JobStatus::Failed => {
                    return Err(TerminationReason::RemoteFailed {
                        job_id: job.id.clone(),
                        job_name: job.name.clone(),
                    });
                }
                JobStatus::Submitted
                | JobStatus::Pending
                | JobStatus::Runnable
                | JobStatus::Starting
                | JobStatus::Running => {}
            }

            tokio::time::sleep(POLL_INTERVAL).await;
            state.complete_cycle();

            debug!(
                job_id = %job.id,
                status = %state.status(),
                remaining_checks = state.remaining_checks(),
                "check complete"
            );
            observer.on_cycle_complete(job, state.remaining_checks());
        }

        Err(TerminationReason::PollBudgetExhausted {
            job_id: job.id.clone(),
            max_checks: self.config.max_checks(),
            last_status: state.status(),
        })
    }
}
