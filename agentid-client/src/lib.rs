// agentid-client: Rust client for the AgentID identity/reputation API.
// Wraps the five platform endpoints (registration, verification, agent
// lookup, action logging, reputation) behind a reusable HTTP/JSON client.

pub mod client;
pub mod error;

pub use client::{AgentIdClient, DEFAULT_BASE_URL};
pub use error::AgentIdError;

// Payload and model types shared with the rest of the platform.
pub use agentid_types as types;
