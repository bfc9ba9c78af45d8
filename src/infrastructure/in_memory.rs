use crate::domain::benefits::EligibilityJob;
use crate::domain::fax::{AgentId, FaxLine};
use crate::domain::ports::{EligibilityJobStore, FaxLineStore};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for eligibility jobs.
///
/// Vec-backed so batch listings come back in the order jobs were created.
/// Suited to tests and batch runs; durable persistence belongs to the
/// workflow that creates the jobs.
#[derive(Default, Clone)]
pub struct InMemoryJobStore {
    jobs: Arc<RwLock<Vec<EligibilityJob>>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EligibilityJobStore for InMemoryJobStore {
    async fn store(&self, job: EligibilityJob) -> Result<()> {
        let mut jobs = self.jobs.write().await;
        match jobs.iter_mut().find(|existing| existing.id == job.id) {
            Some(existing) => *existing = job,
            None => jobs.push(job),
        }
        Ok(())
    }

    async fn get(&self, job_id: &str) -> Result<Option<EligibilityJob>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|job| job.id == job_id).cloned())
    }

    async fn all(&self) -> Result<Vec<EligibilityJob>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.clone())
    }
}

/// A thread-safe in-memory store for fax-line configuration.
///
/// Backed by a `Vec` rather than a map: line listings must come back in
/// insertion order, and line counts are administrative-screen sized.
#[derive(Default, Clone)]
pub struct InMemoryFaxLineStore {
    lines: Arc<RwLock<Vec<FaxLine>>>,
}

impl InMemoryFaxLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_lines(lines: Vec<FaxLine>) -> Self {
        let store = Self::new();
        store.lines.write().await.extend(lines);
        store
    }
}

#[async_trait]
impl FaxLineStore for InMemoryFaxLineStore {
    async fn store(&self, line: FaxLine) -> Result<()> {
        let mut lines = self.lines.write().await;
        match lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => *existing = line,
            None => lines.push(line),
        }
        Ok(())
    }

    async fn get(&self, line_id: &str) -> Result<Option<FaxLine>> {
        let lines = self.lines.read().await;
        Ok(lines.iter().find(|line| line.id == line_id).cloned())
    }

    async fn all(&self) -> Result<Vec<FaxLine>> {
        let lines = self.lines.read().await;
        Ok(lines.clone())
    }

    async fn update_cursor(&self, line_id: &str, cursor: Option<usize>) -> Result<()> {
        let mut lines = self.lines.write().await;
        if let Some(line) = lines.iter_mut().find(|line| line.id == line_id) {
            line.last_assigned_index = cursor;
        }
        Ok(())
    }

    async fn lines_for_agent(&self, agent: &AgentId) -> Result<Vec<FaxLine>> {
        let lines = self.lines.read().await;
        Ok(lines
            .iter()
            .filter(|line| line.assigned_agents.contains(agent))
            .cloned()
            .collect())
    }
}
