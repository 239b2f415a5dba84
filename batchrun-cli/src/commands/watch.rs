//! Watch command handler

use anyhow::{Context, Result};
use batchrun_client::JobService;
use batchrun_core::domain::job::{JobId, JobStatus};
use clap::Args;

use super::PollArgs;
use crate::poller::{PollConfig, PollObserver, StatusPoller, TerminationReason};
use crate::render::{self, ConsoleObserver};

/// Arguments of `batchrun watch`
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// ID of a submitted job
    pub job_id: String,

    #[command(flatten)]
    pub poll: PollArgs,
}

/// Handle `batchrun watch`
pub async fn handle_watch<S: JobService + ?Sized>(args: WatchArgs, service: &S) -> Result<()> {
    let mut observer = ConsoleObserver;
    watch_job(service, &args.job_id, args.poll.poll_config(), &mut observer).await
}

/// Describes an existing job, then polls it until it finishes
///
/// A job that is already terminal is reported without polling.
async fn watch_job<S, O>(
    service: &S,
    job_id: &str,
    config: PollConfig,
    observer: &mut O,
) -> Result<()>
where
    S: JobService + ?Sized,
    O: PollObserver + ?Sized,
{
    let job_id = job_id.trim();
    if job_id.is_empty() {
        anyhow::bail!("job ID cannot be empty");
    }
    let job_id = JobId::new(job_id);

    let detail = service
        .describe_job(&job_id)
        .await
        .with_context(|| format!("failed to describe job {}", job_id))?;
    render::print_job_detail(&detail);

    let job = detail.as_submitted();
    match detail.status {
        JobStatus::Succeeded => {}
        JobStatus::Failed => {
            return Err(TerminationReason::RemoteFailed {
                job_id: job.id,
                job_name: job.name,
            }
            .into());
        }
        JobStatus::Submitted
        | JobStatus::Pending
        | JobStatus::Runnable
        | JobStatus::Starting
        | JobStatus::Running => {
            StatusPoller::new(service, config)
                .wait_from(&job, detail.status, observer)
                .await?;
        }
    }

    render::print_succeeded(&job);
    Ok(())
}
