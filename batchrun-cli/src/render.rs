//! Terminal rendering
//!
//! Everything the user reads goes to stdout through this module. Diagnostics
//! go through `tracing` to stderr.

use batchrun_core::domain::definition::{JobDefinition, JobDefinitionSummary};
use batchrun_core::domain::job::{JobDetail, JobStatus, SubmittedJob};
use batchrun_core::domain::queue::JobQueue;
use colored::*;

use crate::poller::{NoticeLevel, PollObserver, Transition};
use crate::workflow::Submission;

/// Prints the job that is about to be submitted
pub fn print_submission(submission: &Submission) {
    println!("{}", "Job to submit:".bold());
    println!("  Name:           {}", submission.name.cyan());
    println!("  Job Definition: {}", submission.definition);
    println!("  Job Queue:      {}", submission.queue);
    println!();
}

/// Prints a resolved job definition revision
pub fn print_job_definition(definition: &JobDefinition) {
    println!("{}", "Job Definition:".bold());
    println!("  Name:     {}", definition.reference().to_string().cyan());
    println!("  Status:   {}", definition.status);
    println!("  Type:     {}", definition.kind);

    if let Some(container) = &definition.container {
        println!("  Image:    {}", container.image);
        if let Some(vcpus) = container.vcpus {
            println!("  vCPUs:    {}", vcpus);
        }
        if let Some(memory) = container.memory_mib {
            println!("  Memory:   {} MiB", memory);
        }
        if !container.command.is_empty() {
            println!("  Command:  {}", container.command.join(" ").dimmed());
        }
    }

    if let Some(attempts) = definition.retry_attempts {
        println!("  Retries:  {}", attempts);
    }
    if let Some(timeout) = definition.timeout_seconds {
        println!("  Timeout:  {}s", timeout);
    }

    if !definition.parameters.is_empty() {
        println!("  {}", "Parameters:".bold());
        for (key, value) in &definition.parameters {
            println!("    {} = {}", key.cyan(), value);
        }
    }
    println!();
}

/// Prints job queue details
pub fn print_job_queue(queue: &JobQueue) {
    println!("{}", "Job Queue:".bold());
    println!("  {}", queue);
    if !queue.compute_environments.is_empty() {
        println!(
            "  Compute Environments: {}",
            queue.compute_environments.join(", ").dimmed()
        );
    }
    println!();
}

/// Prints the ID assigned to a submitted job
pub fn print_submitted(job: &SubmittedJob) {
    println!(
        "{} Submitted job {} ({})",
        "▸".cyan(),
        job.name.bold(),
        job.id.to_string().dimmed()
    );
}

/// Prints the final success line
pub fn print_succeeded(job: &SubmittedJob) {
    println!(
        "{}",
        format!("✓ Job {} ({}) succeeded", job.name, job.id)
            .green()
            .bold()
    );
}

/// Prints the state of an existing job before it is watched
pub fn print_job_detail(job: &JobDetail) {
    println!("{}", "Job Details:".bold());
    println!("  ID:             {}", job.id.to_string().cyan());
    println!("  Name:           {}", job.name);
    println!("  Status:         {}", colorize_status(job.status));
    if let Some(queue) = &job.job_queue {
        println!("  Job Queue:      {}", queue);
    }
    if let Some(definition) = &job.job_definition {
        println!("  Job Definition: {}", definition);
    }
    if let Some(reason) = &job.status_reason {
        println!("  Reason:         {}", reason.dimmed());
    }
    if let Some(created) = job.created_at {
        println!("  Created:        {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(started) = job.started_at {
        println!("  Started:        {}", started.format("%Y-%m-%d %H:%M:%S"));
    }
    println!();
}

/// Prints active job definitions, one line per name
pub fn print_definition_summaries(summaries: &[JobDefinitionSummary]) {
    if summaries.is_empty() {
        println!("{}", "No active job definitions found.".yellow());
        return;
    }

    println!("{}", "Job Definitions in active:".bold());
    for summary in summaries {
        println!("  {} {}", "▸".cyan(), format_summary(summary));
    }
}

/// Prints every job queue
pub fn print_job_queues(queues: &[JobQueue]) {
    if queues.is_empty() {
        println!("{}", "No job queues found.".yellow());
        return;
    }

    println!("{}", "Job Queues:".bold());
    for queue in queues {
        println!("  {} {}", "▸".cyan(), queue);
    }
}

fn format_summary(summary: &JobDefinitionSummary) -> String {
    let revisions: Vec<String> = summary.revisions.iter().map(u64::to_string).collect();
    format!("{} ({})", summary.name, revisions.join(", "))
}

fn colorize_status(status: JobStatus) -> ColoredString {
    match status {
        JobStatus::Submitted | JobStatus::Pending | JobStatus::Runnable => {
            status.as_str().yellow()
        }
        JobStatus::Starting | JobStatus::Running => status.as_str().cyan(),
        JobStatus::Succeeded => status.as_str().green(),
        JobStatus::Failed => status.as_str().red(),
    }
}

/// Poll observer printing status transitions to the terminal
///
/// Failed status fetches are not shown; the poller logs them at debug level.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl PollObserver for ConsoleObserver {
    fn on_transition(&mut self, transition: &Transition) {
        println!("  {} {}", "▸".cyan(), transition_line(transition));
    }
}

/// Styles a transition notice: green while in flight or succeeded, red on failure
fn transition_line(transition: &Transition) -> ColoredString {
    let line = format!(
        "Job {}: {} -> {}",
        transition.job_id, transition.from, transition.to
    );
    match transition.level() {
        NoticeLevel::Info => line.green(),
        NoticeLevel::Success => line.green().bold(),
        NoticeLevel::Alarm => line.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batchrun_core::domain::job::JobId;

    fn transition(from: JobStatus, to: JobStatus) -> Transition {
        Transition {
            job_id: JobId::from("job-42"),
            from,
            to,
        }
    }

    #[test]
    fn test_failed_transition_is_styled_as_alarm() {
        let line = transition_line(&transition(JobStatus::Running, JobStatus::Failed));
        assert_eq!(line, "Job job-42: RUNNING -> FAILED".red().bold());
    }

    #[test]
    fn test_in_flight_and_succeeded_transitions_are_green() {
        let line = transition_line(&transition(JobStatus::Submitted, JobStatus::Pending));
        assert_eq!(line, "Job job-42: SUBMITTED -> PENDING".green());

        let line = transition_line(&transition(JobStatus::Running, JobStatus::Succeeded));
        assert_eq!(line, "Job job-42: RUNNING -> SUCCEEDED".green().bold());
        assert_ne!(line, "Job job-42: RUNNING -> SUCCEEDED".red().bold());
    }

    #[test]
    fn test_format_summary_lists_revisions() {
        let summary = JobDefinitionSummary {
            name: "etl".to_string(),
            revisions: vec![1, 3, 4],
        };
        assert_eq!(format_summary(&summary), "etl (1, 3, 4)");
    }

    #[test]
    fn test_format_summary_single_revision() {
        let summary = JobDefinitionSummary {
            name: "report".to_string(),
            revisions: vec![7],
        };
        assert_eq!(format_summary(&summary), "report (7)");
    }
}
