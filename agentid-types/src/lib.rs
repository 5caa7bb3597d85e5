//! Shared types for the AgentID platform API and its Rust client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =====================================================
// Request Payloads
// =====================================================

/// Body of `POST /agents/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAgentRequest {
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

/// Body of `POST /agents/{agent_id}/actions`
///
/// `status` is sent verbatim; the service decides whether it is one of the
/// documented [`ActionStatus`] values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActionRequest {
    pub action_type: String,
    pub status: String,
    pub metadata: serde_json::Map<String, Value>,
}

// =====================================================
// Domain Types
// =====================================================

/// Lifecycle state of a registered agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Suspended,
    Revoked,
}

/// Outcome of a logged action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Failure,
    Pending,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Success => "success",
            ActionStatus::Failure => "failure",
            ActionStatus::Pending => "pending",
        }
    }
}

/// A registered agent identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub status: AgentStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A single logged action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub agent_id: String,
    pub action_type: String,
    pub metadata: serde_json::Map<String, Value>,
    pub status: ActionStatus,
    pub created_at: String,
}

/// Aggregated reputation for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reputation {
    pub score: f64,
    pub total_actions: i64,
    pub successful_actions: i64,
    pub failed_actions: i64,
    pub success_rate: f64,
    pub last_calculated: String,
}

/// Owner summary embedded in a verification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedOwner {
    pub name: String,
    pub company: Option<String>,
    pub verified: bool,
}

/// Result of `POST /agents/{agent_id}/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verified: bool,
    pub agent: Agent,
    pub reputation: Reputation,
    pub owner: VerifiedOwner,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_format() {
        let req = RegisterAgentRequest {
            name: "Bot".to_string(),
            description: "test".to_string(),
            capabilities: vec!["chat".to_string()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"name": "Bot", "description": "test", "capabilities": ["chat"]})
        );
    }

    #[test]
    fn test_log_action_request_wire_format() {
        let req = LogActionRequest {
            action_type: "search".to_string(),
            status: ActionStatus::Success.as_str().to_string(),
            metadata: serde_json::Map::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"action_type": "search", "status": "success", "metadata": {}})
        );
    }

    #[test]
    fn test_action_status_lowercase_on_wire() {
        assert_eq!(serde_json::to_string(&ActionStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(ActionStatus::Failure.as_str(), "failure");
        let status: ActionStatus = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(status, ActionStatus::Success);
    }

    #[test]
    fn test_verification_result_deserializes() {
        let raw = json!({
            "verified": true,
            "agent": {
                "id": "agent_1",
                "owner_id": "owner_1",
                "name": "Bot",
                "description": "test",
                "capabilities": ["chat"],
                "status": "active",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-02T00:00:00Z"
            },
            "reputation": {
                "score": 87.5,
                "total_actions": 40,
                "successful_actions": 35,
                "failed_actions": 5,
                "success_rate": 0.875,
                "last_calculated": "2025-01-02T00:00:00Z"
            },
            "owner": {"name": "Acme", "verified": true}
        });
        let result: VerificationResult = serde_json::from_value(raw).unwrap();
        assert!(result.verified);
        assert_eq!(result.agent.status, AgentStatus::Active);
        assert_eq!(result.reputation.total_actions, 40);
        assert_eq!(result.owner.company, None);
    }
}
