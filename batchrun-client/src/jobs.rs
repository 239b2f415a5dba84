//! Job-related API endpoints

use crate::BatchClient;
use crate::error::{ClientError, Result};
use batchrun_core::domain::job::{JobDetail, JobId, JobStatus, SubmittedJob};
use batchrun_core::dto::job::SubmitJobRequest;

impl BatchClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a new job
    ///
    /// # Arguments
    /// * `req` - The submission request
    ///
    /// # Returns
    /// The ID and name the service assigned to the job, or
    /// [`ClientError::InvalidRequest`] when the service rejects the submission
    pub async fn submit(&self, req: &SubmitJobRequest) -> Result<SubmittedJob> {
        tracing::debug!(
            job_name = %req.job_name,
            job_definition = %req.job_definition,
            job_queue = %req.job_queue,
            "submitting job"
        );
        let response = self.post("/v1/jobs").json(req).send().await?;

        self.handle_response(response)
            .await
            .map_err(ClientError::into_invalid_request)
    }

    /// Get a job by ID
    ///
    /// # Arguments
    /// * `job_id` - The job ID
    ///
    /// # Returns
    /// The job details
    pub async fn get_job(&self, job_id: &JobId) -> Result<JobDetail> {
        let response = self.get(&format!("/v1/jobs/{}", job_id)).send().await?;

        match self.handle_response(response).await {
            Err(e) if e.is_not_found() => Err(ClientError::NotFound(format!("job {}", job_id))),
            other => other,
        }
    }

    /// Get only the current status of a job
    pub async fn get_job_status(&self, job_id: &JobId) -> Result<JobStatus> {
        let job = self.get_job(job_id).await?;
        tracing::debug!(job_id = %job_id, status = %job.status, "fetched job status");
        Ok(job.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_submit_posts_request_and_returns_assigned_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/jobs"))
            .and(body_json(serde_json::json!({
                "job_name": "nightly-etl",
                "job_definition": "etl:3",
                "job_queue": "batch-default"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "job_id": "4c1b7e2a",
                "job_name": "nightly-etl"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BatchClient::new(server.uri(), "ap-northeast-1");
        let job = client
            .submit(&SubmitJobRequest {
                job_name: "nightly-etl".to_string(),
                job_definition: "etl:3".to_string(),
                job_queue: "batch-default".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(job, SubmittedJob::new("4c1b7e2a", "nightly-etl"));
    }

    #[tokio::test]
    async fn test_rejected_submission_is_invalid_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/jobs"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string("job queue batch-x does not exist"),
            )
            .mount(&server)
            .await;

        let client = BatchClient::new(server.uri(), "ap-northeast-1");
        let err = client
            .submit(&SubmitJobRequest {
                job_name: "nightly-etl".to_string(),
                job_definition: "etl:3".to_string(),
                job_queue: "batch-x".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert_eq!(
            err.to_string(),
            "Invalid request: job queue batch-x does not exist"
        );
    }

    #[tokio::test]
    async fn test_get_job_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/jobs/4c1b7e2a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "job_id": "4c1b7e2a",
                "job_name": "nightly-etl",
                "status": "STARTING",
                "created_at": "2026-10-19T03:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = BatchClient::new(server.uri(), "ap-northeast-1");
        let status = client.get_job_status(&JobId::from("4c1b7e2a")).await.unwrap();
        assert_eq!(status, JobStatus::Starting);
    }

    #[tokio::test]
    async fn test_unknown_status_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/jobs/4c1b7e2a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "job_id": "4c1b7e2a",
                "job_name": "nightly-etl",
                "status": "CANCELLED"
            })))
            .mount(&server)
            .await;

        let client = BatchClient::new(server.uri(), "ap-northeast-1");
        let err = client
            .get_job_status(&JobId::from("4c1b7e2a"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_missing_job_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/jobs/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such job"))
            .mount(&server)
            .await;

        let client = BatchClient::new(server.uri(), "ap-northeast-1");
        let err = client.get_job(&JobId::from("missing")).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ref what) if what == "job missing"));
    }
}
