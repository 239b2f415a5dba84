//! Submission workflow
//!
//! Validates the submission parameters, previews what will be submitted,
//! then submits the job and hands it to the status poller. The preview is
//! rendered on every run, dry or not.

use batchrun_client::{ClientError, JobService};
use batchrun_core::domain::definition::JobDefinitionRef;
use batchrun_core::domain::job::SubmittedJob;
use thiserror::Error;
use tracing::info;

use crate::poller::{PollConfig, PollObserver, StatusPoller, TerminationReason};
use crate::render;

/// Parameters of a submission as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    pub name: String,
    pub definition: String,
    pub queue: String,
    pub dry_run: bool,
}

/// A submission whose parameters passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub definition: JobDefinitionRef,
    pub queue: String,
}

/// How a submission ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: the preview was rendered, nothing was submitted
    Previewed,
    /// The job was submitted and succeeded
    Finished(SubmittedJob),
}

/// Submission errors
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required parameter is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// A call to the job service failed
    #[error("failed to {action}")]
    Remote {
        action: &'static str,
        #[source]
        source: ClientError,
    },

    /// The job was submitted but did not succeed
    #[error(transparent)]
    Terminated(#[from] TerminationReason),
}

impl SubmitRequest {
    /// Checks required parameters without touching the job service
    pub fn validate(&self) -> Result<Submission, SubmitError> {
        let name = required(&self.name, "--name")?;
        let definition = required(&self.definition, "--jobdef")?;
        let queue = required(&self.queue, "--queue")?;

        let definition = definition
            .parse::<JobDefinitionRef>()
            .map_err(|e| SubmitError::Validation(e.to_string()))?;

        Ok(Submission {
            name: name.to_string(),
            definition,
            queue: queue.to_string(),
        })
    }
}

fn required<'a>(value: &'a str, flag: &str) -> Result<&'a str, SubmitError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmitError::Validation(format!("{} is required", flag)));
    }
    Ok(value)
}

fn remote(action: &'static str) -> impl FnOnce(ClientError) -> SubmitError {
    move |source| SubmitError::Remote { action, source }
}

/// Validates, previews, submits and watches a job
///
/// # Arguments
/// * `service` - The job service
/// * `request` - Submission parameters
/// * `config` - Budgets for the status poller
/// * `observer` - Receives status transitions while the job is watched
pub async fn submit<S, O>(
    service: &S,
    request: &SubmitRequest,
    config: PollConfig,
    observer: &mut O,
) -> Result<Outcome, SubmitError>
where
    S: JobService + ?Sized,
    O: PollObserver + ?Sized,
{
    let submission = request.validate()?;

    preview(service, &submission).await?;

    if request.dry_run {
        info!(job_name = %submission.name, "dry run, nothing submitted");
        return Ok(Outcome::Previewed);
    }

    let job = service
        .submit_job(
            &submission.name,
            &submission.definition.to_string(),
            &submission.queue,
        )
        .await
        .map_err(remote("submit job"))?;
    render::print_submitted(&job);

    StatusPoller::new(service, config)
        .wait_until_finished(&job, observer)
        .await?;

    Ok(Outcome::Finished(job))
}

/// Renders the submission, its job definition and its job queue
async fn preview<S: JobService + ?Sized>(
    service: &S,
    submission: &Submission,
) -> Result<(), SubmitError> {
    render::print_submission(submission);

    let definition = service
        .describe_job_definition(&submission.definition)
        .await
        .map_err(remote("describe job definition"))?;
    render::print_job_definition(&definition);

    let queue = service
        .describe_job_queue(&submission.queue)
        .await
        .map_err(remote("describe job queue"))?;
    render::print_job_queue(&queue);

    Ok(())
}
