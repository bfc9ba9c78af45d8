//! Routing of inbound fax documents to agents.
//!
//! The rules themselves are pure: [`next_assignee`] never touches the line it
//! reads. Advancing the round-robin cursor is the caller's job, and
//! [`FaxRouter::assign`] is the caller to use under concurrent traffic: it
//! serializes the read-advance-persist sequence per line so two documents
//! arriving together cannot land on the same agent.

use crate::domain::fax::{AgentId, AssignmentRule, FaxLine};
use crate::domain::ports::FaxLineStoreBox;
use crate::error::{IntakeError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Outcome of a routing decision.
///
/// `next_index` is the advanced round-robin cursor; the caller must persist
/// it back onto the line before routing the next document. It is `None` for
/// rules that keep no cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub assignee: Option<AgentId>,
    pub next_index: Option<usize>,
}

impl Assignment {
    fn unassigned() -> Self {
        Self {
            assignee: None,
            next_index: None,
        }
    }
}

/// Decides which agent should receive the next document on `line`.
///
/// Pure with respect to `line`: the advanced cursor is returned, never
/// written back. Fails loud on configuration errors: a round-robin line
/// with an empty pool or a fixed-owner line without an owner.
pub fn next_assignee(line: &FaxLine) -> Result<Assignment> {
    match line.assignment_rule {
        AssignmentRule::Manual => Ok(Assignment::unassigned()),
        AssignmentRule::FixedOwner => {
            let owner = line
                .fixed_owner
                .clone()
                .ok_or_else(|| IntakeError::MissingFixedOwner(line.id.clone()))?;
            Ok(Assignment {
                assignee: Some(owner),
                next_index: None,
            })
        }
        AssignmentRule::RoundRobin => {
            let n = line.assigned_agents.len();
            if n == 0 {
                return Err(IntakeError::EmptyAgentPool(line.id.clone()));
            }
            // First assignment on a fresh cursor goes to the first agent in
            // the pool; after that the rotation advances one step per
            // document. The modulo also keeps a stale cursor from a shrunk
            // pool in bounds.
            let next_index = match line.last_assigned_index {
                None => 0,
                Some(i) => (i + 1) % n,
            };
            Ok(Assignment {
                assignee: line.assigned_agents.get(next_index).cloned(),
                next_index: Some(next_index),
            })
        }
    }
}

/// Whether `agent` is cleared to see traffic on `line`.
///
/// Pure membership test; activity and existence filtering belong to the
/// caller.
pub fn can_view_line(agent: &AgentId, line: &FaxLine) -> bool {
    line.assigned_agents.contains(agent)
}

/// Lines visible to `agent`, preserving the order of `lines`.
pub fn lines_for_agent<'a>(agent: &AgentId, lines: &'a [FaxLine]) -> Vec<&'a FaxLine> {
    lines
        .iter()
        .filter(|line| can_view_line(agent, line))
        .collect()
}

/// Routing service over a persisted line collection.
///
/// Owns the store port and a per-line mutex map. Each [`assign`] call for a
/// line is a critical section: concurrent callers racing on the cursor would
/// otherwise hand consecutive documents to the same agent.
///
/// [`assign`]: FaxRouter::assign
pub struct FaxRouter {
    store: FaxLineStoreBox,
    line_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FaxRouter {
    pub fn new(store: FaxLineStoreBox) -> Self {
        Self {
            store,
            line_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_for(&self, line_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.line_locks.lock().await;
        locks
            .entry(line_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Routes one inbound document on `line_id` and persists the advanced
    /// cursor before returning.
    ///
    /// Inactive lines get no automatic assignee; their traffic falls back
    /// to manual triage. Unknown lines fail loud.
    pub async fn assign(&self, line_id: &str) -> Result<Assignment> {
        let lock = self.lock_for(line_id).await;
        let _guard = lock.lock().await;

        let line = self
            .store
            .get(line_id)
            .await?
            .ok_or_else(|| IntakeError::LineNotFound(line_id.to_string()))?;

        if !line.is_active {
            warn!(line_id, "document arrived on inactive line, leaving unassigned");
            return Ok(Assignment::unassigned());
        }

        let assignment = next_assignee(&line)?;
        if let Some(next_index) = assignment.next_index {
            self.store.update_cursor(line_id, Some(next_index)).await?;
        }

        debug!(
            line_id,
            assignee = assignment.assignee.as_deref().unwrap_or("-"),
            "routed inbound document"
        );
        Ok(assignment)
    }

    /// Whether `agent` may view traffic on `line_id`. Unknown lines resolve
    /// to `false`, never an error.
    pub async fn agent_can_view(&self, agent: &AgentId, line_id: &str) -> Result<bool> {
        let line = self.store.get(line_id).await?;
        Ok(line.is_some_and(|line| can_view_line(agent, &line)))
    }

    /// All lines whose pool contains `agent`, in insertion order.
    pub async fn lines_visible_to(&self, agent: &AgentId) -> Result<Vec<FaxLine>> {
        self.store.lines_for_agent(agent).await
    }
}
