use serde::{Deserialize, Serialize};

/// Opaque agent identity. Authentication lives with the caller.
pub type AgentId = String;

/// How inbound documents on a line are handed to staff.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentRule {
    /// No automatic assignment; a coordinator picks by hand.
    Manual,
    /// Rotate through `assigned_agents` in order.
    RoundRobin,
    /// Every document goes to `fixed_owner`.
    FixedOwner,
}

/// An inbound fax line and its routing configuration.
///
/// Created and persisted by an administrative screen; the router reads it and
/// hands the advanced round-robin cursor back to the caller to persist.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct FaxLine {
    pub id: String,
    pub phone_number: String,
    /// `None` means a global line spanning all locations.
    #[serde(default)]
    pub location: Option<String>,
    /// Ordered pool; position drives round-robin rotation.
    #[serde(default)]
    pub assigned_agents: Vec<AgentId>,
    pub assignment_rule: AssignmentRule,
    /// Required when `assignment_rule` is `FixedOwner`.
    #[serde(default)]
    pub fixed_owner: Option<AgentId>,
    /// Round-robin cursor: index of the agent who received the last
    /// document. `None` until the first assignment.
    #[serde(default)]
    pub last_assigned_index: Option<usize>,
    pub is_active: bool,
}

impl FaxLine {
    /// Swaps out the agent pool and resets the round-robin cursor.
    ///
    /// A cursor carried across a pool change would skew the rotation, so the
    /// reset is not optional. Mutating `assigned_agents` directly without
    /// resetting the cursor is a caller bug.
    pub fn replace_agents(&mut self, agents: Vec<AgentId>) {
        self.assigned_agents = agents;
        self.last_assigned_index = None;
    }
}
