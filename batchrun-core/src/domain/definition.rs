//! Job definition domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reference to one revision of a job definition, written `name:revision`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobDefinitionRef {
    pub name: String,
    pub revision: u64,
}

/// Returned when a job definition reference is not `name:revision`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid job definition {0}, expected name:revision")]
pub struct InvalidDefinitionRef(pub String);

impl FromStr for JobDefinitionRef {
    type Err = InvalidDefinitionRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDefinitionRef(s.to_string());

        let mut parts = s.split(':');
        let (Some(name), Some(revision), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if name.is_empty() {
            return Err(invalid());
        }
        let revision = revision.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self {
            name: name.to_string(),
            revision,
        })
    }
}

impl fmt::Display for JobDefinitionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.revision)
    }
}

/// A registered job definition revision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefinition {
    #[serde(rename = "job_definition_name")]
    pub name: String,
    pub revision: u64,
    pub status: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub container: Option<ContainerProperties>,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub retry_attempts: Option<u32>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_kind() -> String {
    "container".to_string()
}

impl JobDefinition {
    pub fn reference(&self) -> JobDefinitionRef {
        JobDefinitionRef {
            name: self.name.clone(),
            revision: self.revision,
        }
    }
}

/// Container settings of a job definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerProperties {
    pub image: String,
    #[serde(default)]
    pub vcpus: Option<u32>,
    #[serde(default)]
    pub memory_mib: Option<u64>,
    #[serde(default)]
    pub command: Vec<String>,
}

/// Active revisions of one job definition name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDefinitionSummary {
    pub name: String,
    pub revisions: Vec<u64>,
}

impl JobDefinitionSummary {
    /// Group definitions by name, names and revisions ascending
    pub fn group(definitions: impl IntoIterator<Item = JobDefinition>) -> Vec<Self> {
        let mut grouped: BTreeMap<String, Vec<u64>> = BTreeMap::new();
        for definition in definitions {
            grouped
                .entry(definition.name)
                .or_default()
                .push(definition.revision);
        }

        grouped
            .into_iter()
            .map(|(name, mut revisions)| {
                revisions.sort_unstable();
                revisions.dedup();
                Self { name, revisions }
            })
            .collect()
    }
}
