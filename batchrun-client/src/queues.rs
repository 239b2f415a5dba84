//! Job queue API endpoints

use crate::BatchClient;
use crate::error::{ClientError, Result};
use batchrun_core::domain::queue::JobQueue;
use batchrun_core::dto::queue::JobQueueList;

impl BatchClient {
    // =============================================================================
    // Job Queue Query
    // =============================================================================

    /// Get a job queue by name
    ///
    /// # Arguments
    /// * `name` - The queue name
    pub async fn get_job_queue(&self, name: &str) -> Result<JobQueue> {
        let response = self
            .get("/v1/job-queues")
            .query(&[("name", name)])
            .send()
            .await?;
        let list: JobQueueList = self.handle_response(response).await?;

        list.job_queues
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("job queue {}", name)))
    }

    /// List all job queues
    pub async fn list_job_queues(&self) -> Result<Vec<JobQueue>> {
        let response = self.get("/v1/job-queues").send().await?;
        let list: JobQueueList = self.handle_response(response).await?;

        Ok(list.job_queues)
    }
}
