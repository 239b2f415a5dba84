//! Job service seam
//!
//! The submission workflow and the status poller only depend on this trait,
//! so they can be driven by the HTTP client in production and by scripted
//! fakes in tests.

use async_trait::async_trait;
use batchrun_core::domain::definition::{JobDefinition, JobDefinitionRef, JobDefinitionSummary};
use batchrun_core::domain::job::{JobDetail, JobId, JobStatus, SubmittedJob};
use batchrun_core::domain::queue::JobQueue;
use batchrun_core::dto::job::SubmitJobRequest;

use crate::BatchClient;
use crate::error::Result;

/// Operations of the remote job-execution service
#[async_trait]
pub trait JobService: Send + Sync {
    /// Submits a job and returns the ID and name the service assigned
    ///
    /// # Arguments
    /// * `name` - Caller-supplied job name
    /// * `definition` - Job definition reference, `name:revision`
    /// * `queue` - Job queue name
    async fn submit_job(&self, name: &str, definition: &str, queue: &str) -> Result<SubmittedJob>;

    /// Fetches the current status of a job
    async fn fetch_job_status(&self, job_id: &JobId) -> Result<JobStatus>;

    /// Describes a job, including its name and timestamps
    async fn describe_job(&self, job_id: &JobId) -> Result<JobDetail>;

    /// Describes one revision of a job definition
    async fn describe_job_definition(&self, reference: &JobDefinitionRef) -> Result<JobDefinition>;

    /// Describes a job queue
    async fn describe_job_queue(&self, name: &str) -> Result<JobQueue>;

    /// Lists active job definitions grouped by name
    async fn list_active_job_definitions(&self) -> Result<Vec<JobDefinitionSummary>>;

    /// Lists every job queue
    async fn list_job_queues(&self) -> Result<Vec<JobQueue>>;
}

#[async_trait]
impl JobService for BatchClient {
    async fn submit_job(&self, name: &str, definition: &str, queue: &str) -> Result<SubmittedJob> {
        self.submit(&SubmitJobRequest {
            job_name: name.to_string(),
            job_definition: definition.to_string(),
            job_queue: queue.to_string(),
        })
        .await
    }

    async fn fetch_job_status(&self, job_id: &JobId) -> Result<JobStatus> {
        self.get_job_status(job_id).await
    }

    async fn describe_job(&self, job_id: &JobId) -> Result<JobDetail> {
        self.get_job(job_id).await
    }

    async fn describe_job_definition(&self, reference: &JobDefinitionRef) -> Result<JobDefinition> {
        self.get_job_definition(reference).await
    }

    async fn describe_job_queue(&self, name: &str) -> Result<JobQueue> {
        self.get_job_queue(name).await
    }

    async fn list_active_job_definitions(&self) -> Result<Vec<JobDefinitionSummary>> {
        self.list_active_definitions().await
    }

    async fn list_job_queues(&self) -> Result<Vec<JobQueue>> {
        BatchClient::list_job_queues(self).await
    }
}
