//! Submit command handler

use anyhow::Result;
use batchrun_client::JobService;
use clap::Args;
use colored::*;

use super::PollArgs;
use crate::render::{self, ConsoleObserver};
use crate::workflow::{self, Outcome, SubmitRequest};

/// Arguments of `batchrun submit`
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Job name
    #[arg(long)]
    pub name: Option<String>,

    /// Job queue name
    #[arg(long)]
    pub queue: Option<String>,

    /// Job definition as name:revision
    #[arg(long)]
    pub jobdef: Option<String>,

    /// Preview the job, its definition and its queue without submitting
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub poll: PollArgs,
}

impl SubmitArgs {
    fn request(&self) -> SubmitRequest {
        SubmitRequest {
            name: self.name.clone().unwrap_or_default(),
            definition: self.jobdef.clone().unwrap_or_default(),
            queue: self.queue.clone().unwrap_or_default(),
            dry_run: self.dry_run,
        }
    }
}

/// Handle `batchrun submit`
///
/// # Arguments
/// * `args` - Parsed submit arguments
/// * `service` - The job service to submit to
pub async fn handle_submit<S: JobService + ?Sized>(args: SubmitArgs, service: &S) -> Result<()> {
    let mut observer = ConsoleObserver;

    match workflow::submit(service, &args.request(), args.poll.poll_config(), &mut observer).await? {
        Outcome::Previewed => {
            println!("{}", "Dry run, job not submitted.".yellow());
        }
        Outcome::Finished(job) => render::print_succeeded(&job),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fetch, ScriptedService};
    use batchrun_core::domain::job::JobStatus;

    fn args(dry_run: bool) -> SubmitArgs {
        SubmitArgs {
            name: Some("nightly-etl".to_string()),
            queue: Some("batch-default".to_string()),
            jobdef: Some("etl:3".to_string()),
            dry_run,
            poll: PollArgs {
                max_checks: 60,
                max_failures: 5,
            },
        }
    }

    #[test]
    fn test_missing_flags_become_empty_fields() {
        let request = SubmitArgs {
            name: None,
            ..args(false)
        }
        .request();
        assert!(request.name.is_empty());
        assert!(request.validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_submit_dry_run() {
        let service = ScriptedService::new(vec![]);
        handle_submit(args(true), &service).await.unwrap();
        assert!(!service.calls().contains(&"submit_job"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_submit_reports_remote_failure() {
        let service = ScriptedService::new(vec![
            Fetch::Status(JobStatus::Running),
            Fetch::Status(JobStatus::Failed),
        ]);

        let err = handle_submit(args(false), &service).await.unwrap_err();
        assert_eq!(err.to_string(), "job nightly-etl (job-42) failed");
    }
}
