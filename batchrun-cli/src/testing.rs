//! In-memory job service and observer used by the unit tests

use async_trait::async_trait;
use batchrun_client::{ClientError, JobService, Result};
use batchrun_core::domain::definition::{
    ContainerProperties, JobDefinition, JobDefinitionRef, JobDefinitionSummary,
};
use batchrun_core::domain::job::{JobDetail, JobId, JobStatus, SubmittedJob};
use batchrun_core::domain::queue::JobQueue;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use crate::poller::{PollObserver, Transition};

/// One scripted answer to a status fetch
#[derive(Debug, Clone)]
pub(crate) enum Fetch {
    Status(JobStatus),
    Error,
}

/// Job service answering status fetches from a script
///
/// Every call is appended to a log so tests can check which remote
/// operations ran and in which order.
pub(crate) struct ScriptedService {
    fetches: Mutex<VecDeque<Fetch>>,
    calls: Mutex<Vec<&'static str>>,
    missing_queue: bool,
}

impl ScriptedService {
    pub(crate) fn new(fetches: Vec<Fetch>) -> Self {
        Self {
            fetches: Mutex::new(fetches.into()),
            calls: Mutex::new(Vec::new()),
            missing_queue: false,
        }
    }

    /// Makes `describe_job_queue` fail with not found
    pub(crate) fn without_queue(mut self) -> Self {
        self.missing_queue = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.calls()
            .into_iter()
            .filter(|call| *call == "fetch_job_status")
            .count()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) fn sample_definition(reference: &JobDefinitionRef) -> JobDefinition {
    JobDefinition {
        name: reference.name.clone(),
        revision: reference.revision,
        status: "ACTIVE".to_string(),
        kind: "container".to_string(),
        container: Some(ContainerProperties {
            image: "registry.local/etl:1.4".to_string(),
            vcpus: Some(2),
            memory_mib: Some(4096),
            command: vec!["run-etl".to_string(), "--full".to_string()],
        }),
        parameters: BTreeMap::new(),
        retry_attempts: Some(1),
        timeout_seconds: None,
    }
}

pub(crate) fn sample_queue(name: &str) -> JobQueue {
    JobQueue {
        name: name.to_string(),
        priority: 10,
        state: "ENABLED".to_string(),
        status: "VALID".to_string(),
        compute_environments: vec!["spot-ce".to_string()],
    }
}

#[async_trait]
impl JobService for ScriptedService {
    async fn submit_job(&self, name: &str, _definition: &str, _queue: &str) -> Result<SubmittedJob> {
        self.record("submit_job");
        Ok(SubmittedJob::new("job-42", name))
    }

    async fn fetch_job_status(&self, _job_id: &JobId) -> Result<JobStatus> {
        self.record("fetch_job_status");
        let next = self
            .fetches
            .lock()
            .unwrap()
            .pop_front()
            .expect("status fetched more often than scripted");
        match next {
            Fetch::Status(status) => Ok(status),
            Fetch::Error => Err(ClientError::api_error(503, "service unavailable")),
        }
    }

    async fn describe_job(&self, job_id: &JobId) -> Result<JobDetail> {
        self.record("describe_job");
        Ok(JobDetail {
            id: job_id.clone(),
            name: "nightly-etl".to_string(),
            status: JobStatus::Runnable,
            job_queue: Some("batch-default".to_string()),
            job_definition: Some("etl:3".to_string()),
            status_reason: None,
            created_at: None,
            started_at: None,
            stopped_at: None,
        })
    }

    async fn describe_job_definition(&self, reference: &JobDefinitionRef) -> Result<JobDefinition> {
        self.record("describe_job_definition");
        Ok(sample_definition(reference))
    }

    async fn describe_job_queue(&self, name: &str) -> Result<JobQueue> {
        self.record("describe_job_queue");
        if self.missing_queue {
            return Err(ClientError::NotFound(format!("job queue {}", name)));
        }
        Ok(sample_queue(name))
    }

    async fn list_active_job_definitions(&self) -> Result<Vec<JobDefinitionSummary>> {
        self.record("list_active_job_definitions");
        Ok(Vec::new())
    }

    async fn list_job_queues(&self) -> Result<Vec<JobQueue>> {
        self.record("list_job_queues");
        Ok(Vec::new())
    }
}

/// Observer keeping every callback it receives
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub(crate) transitions: Vec<Transition>,
    /// Remaining failure budget after each failed fetch
    pub(crate) failures: Vec<u32>,
    /// Remaining checks after each completed cycle
    pub(crate) cycles: Vec<u32>,
}

impl PollObserver for RecordingObserver {
    fn on_transition(&mut self, transition: &Transition) {
        self.transitions.push(transition.clone());
    }

    fn on_fetch_failure(&mut self, _job: &SubmittedJob, _error: &ClientError, remaining: u32) {
        self.failures.push(remaining);
    }

    fn on_cycle_complete(&mut self, _job: &SubmittedJob, remaining_checks: u32) {
        self.cycles.push(remaining_checks);
    }
}
