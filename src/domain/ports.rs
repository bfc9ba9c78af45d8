use super::benefits::EligibilityJob;
use super::fax::{AgentId, FaxLine};
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for eligibility jobs. The verification workflow that creates
/// jobs owns persistence; the engines only read through this seam.
#[async_trait]
pub trait EligibilityJobStore: Send + Sync {
    async fn store(&self, job: EligibilityJob) -> Result<()>;
    async fn get(&self, job_id: &str) -> Result<Option<EligibilityJob>>;
    async fn all(&self) -> Result<Vec<EligibilityJob>>;
}

/// Storage port for fax-line configuration.
///
/// `all` must preserve the insertion order of the underlying collection;
/// line listings for an agent are stable, not relevance-sorted.
#[async_trait]
pub trait FaxLineStore: Send + Sync {
    async fn store(&self, line: FaxLine) -> Result<()>;
    async fn get(&self, line_id: &str) -> Result<Option<FaxLine>>;
    async fn all(&self) -> Result<Vec<FaxLine>>;
    /// Persists an advanced round-robin cursor for `line_id`.
    async fn update_cursor(&self, line_id: &str, cursor: Option<usize>) -> Result<()>;
    /// All lines whose pool contains `agent`, in insertion order.
    async fn lines_for_agent(&self, agent: &AgentId) -> Result<Vec<FaxLine>>;
}

pub type EligibilityJobStoreBox = Box<dyn EligibilityJobStore>;
pub type FaxLineStoreBox = Box<dyn FaxLineStore>;
