//! Job queue DTOs

use serde::{Deserialize, Serialize};

use crate::domain::queue::JobQueue;

/// Envelope returned by the job queue listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobQueueList {
    #[serde(default)]
    pub job_queues: Vec<JobQueue>,
}
