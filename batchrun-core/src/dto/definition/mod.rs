//! Job definition DTOs

use serde::{Deserialize, Serialize};

use crate::domain::definition::JobDefinition;

/// Envelope returned by the job definition listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDefinitionList {
    #[serde(default)]
    pub job_definitions: Vec<JobDefinition>,
}
