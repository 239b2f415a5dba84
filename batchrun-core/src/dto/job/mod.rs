//! Job DTOs

use serde::{Deserialize, Serialize};

/// Request to submit a new job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobRequest {
    pub job_name: String,
    /// Job definition reference, `name:revision`
    pub job_definition: String,
    pub job_queue: String,
}
