//! Job queue domain model

use serde::{Deserialize, Serialize};

/// A job queue jobs are submitted to for scheduling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobQueue {
    /// Queue name, used as the submission reference
    #[serde(rename = "job_queue_name")]
    pub name: String,

    /// Scheduling priority relative to other queues sharing compute
    pub priority: i64,

    /// Whether the queue accepts jobs (`ENABLED` / `DISABLED`)
    pub state: String,

    /// Provisioning status reported by the service (`VALID`, `INVALID`, ...)
    pub status: String,

    /// Compute environments in the order the scheduler tries them
    #[serde(default)]
    pub compute_environments: Vec<String>,
}

impl std::fmt::Display for JobQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  Priority: {}, State: {}, Status: {}",
            self.name, self.priority, self.state, self.status
        )
    }
}
