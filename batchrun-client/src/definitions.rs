//! Job definition API endpoints

use crate::BatchClient;
use crate::error::{ClientError, Result};
use batchrun_core::domain::definition::{JobDefinition, JobDefinitionRef, JobDefinitionSummary};
use batchrun_core::dto::definition::JobDefinitionList;

impl BatchClient {
    // =============================================================================
    // Job Definition Query
    // =============================================================================

    /// Describe one revision of a job definition
    ///
    /// The service is asked for every revision registered under the name and
    /// the requested revision is selected locally.
    ///
    /// # Arguments
    /// * `reference` - The `name:revision` to describe
    pub async fn get_job_definition(&self, reference: &JobDefinitionRef) -> Result<JobDefinition> {
        let response = self
            .get("/v1/job-definitions")
            .query(&[("name", reference.name.as_str())])
            .send()
            .await?;
        let list: JobDefinitionList = self.handle_response(response).await?;

        if list.job_definitions.is_empty() {
            return Err(ClientError::NotFound(format!(
                "job definition {}",
                reference
            )));
        }

        list.job_definitions
            .into_iter()
            .find(|definition| definition.revision == reference.revision)
            .ok_or_else(|| {
                ClientError::NotFound(format!("job definition revision {}", reference))
            })
    }

    /// List active job definitions grouped by name
    ///
    /// # Returns
    /// One summary per definition name, sorted by name
    pub async fn list_active_definitions(&self) -> Result<Vec<JobDefinitionSummary>> {
        let response = self
            .get("/v1/job-definitions")
            .query(&[("status", "ACTIVE")])
            .send()
            .await?;
        let list: JobDefinitionList = self.handle_response(response).await?;

        tracing::debug!(count = list.job_definitions.len(), "listed active job definitions");
        Ok(JobDefinitionSummary::group(list.job_definitions))
    }
}
