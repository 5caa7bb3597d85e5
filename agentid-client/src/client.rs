//! HTTP/JSON client for the AgentID identity and reputation API.

use std::borrow::Cow;
use std::time::Duration;

use agentid_types::{LogActionRequest, RegisterAgentRequest};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::AgentIdError;

/// Default AgentID API URL
pub const DEFAULT_BASE_URL: &str = "https://agentid.dev/api";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the AgentID identity and reputation API.
///
/// Holds the bearer credential and base URL for the instance's lifetime and
/// reuses one connection pool across calls. `Clone` is an `Arc` increment on
/// the underlying pool, so a single client can be shared across tasks; the
/// pool is released when the last clone is dropped.
///
/// Every request carries `Authorization: Bearer <api_key>` and
/// `Content-Type: application/json`. Responses are returned as decoded JSON
/// without interpretation; see the model types in [`agentid_types`] for the
/// record shapes the service documents.
#[derive(Clone)]
pub struct AgentIdClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl AgentIdClient {
    /// Client against the production API.
    ///
    /// `api_key` must be non-empty. Panics if it contains bytes that cannot
    /// appear in an HTTP header value.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against a custom deployment. Trailing slashes on `base_url`
    /// are stripped so request URLs never contain a double slash.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_http_client(api_key, REQUEST_TIMEOUT),
        }
    }

    /// Build a client from `AGENTID_API_KEY` and, when set,
    /// `AGENTID_BASE_URL`. Returns `None` when the key is absent.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("AGENTID_API_KEY").ok()?;
        match std::env::var("AGENTID_BASE_URL") {
            Ok(url) => Some(Self::with_base_url(&api_key, &url)),
            Err(_) => Some(Self::new(&api_key)),
        }
    }

    /// Override the default 30 second request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http_client(&self.api_key, timeout);
        self
    }

    // =====================================================
    // API Operations
    // =====================================================

    /// Register a new agent. `capabilities` defaults to an empty list.
    pub async fn register(
        &self,
        name: &str,
        description: &str,
        capabilities: Option<Vec<String>>,
    ) -> Result<Value, AgentIdError> {
        let req = RegisterAgentRequest {
            name: name.to_string(),
            description: description.to_string(),
            capabilities: capabilities.unwrap_or_default(),
        };
        self.post("/agents/register", &req).await
    }

    /// Verify an agent's identity. `agent_id` must be non-empty.
    pub async fn verify(&self, agent_id: &str) -> Result<Value, AgentIdError> {
        self.post_empty(&format!("/agents/{}/verify", encode_segment(agent_id)))
            .await
    }

    /// Fetch the record of a registered agent.
    pub async fn get_agent(&self, agent_id: &str) -> Result<Value, AgentIdError> {
        self.get(&format!("/agents/{}", encode_segment(agent_id))).await
    }

    /// Log an action performed by an agent (builds reputation).
    ///
    /// `status` is sent verbatim; the service expects one of the
    /// [`ActionStatus`](agentid_types::ActionStatus) values but the client
    /// does not reject others. `metadata` defaults to an empty object.
    pub async fn log_action(
        &self,
        agent_id: &str,
        action_type: &str,
        status: &str,
        metadata: Option<serde_json::Map<String, Value>>,
    ) -> Result<Value, AgentIdError> {
        let req = LogActionRequest {
            action_type: action_type.to_string(),
            status: status.to_string(),
            metadata: metadata.unwrap_or_default(),
        };
        self.post(&format!("/agents/{}/actions", encode_segment(agent_id)), &req)
            .await
    }

    /// Fetch the reputation score for an agent.
    pub async fn get_reputation(&self, agent_id: &str) -> Result<Value, AgentIdError> {
        self.get(&format!("/agents/{}/reputation", encode_segment(agent_id)))
            .await
    }

    // =====================================================
    // HTTP helpers
    // =====================================================

    async fn get(&self, path: &str) -> Result<Value, AgentIdError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("[AgentID] GET {}", url);
        self.dispatch(self.http.get(&url)).await
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Value, AgentIdError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("[AgentID] POST {}", url);
        self.dispatch(self.http.post(&url).json(body)).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, AgentIdError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("[AgentID] POST {}", url);
        self.dispatch(self.http.post(&url)).await
    }

    /// Send one request and apply the common status/decode contract.
    ///
    /// Non-2xx responses become [`AgentIdError::Status`] with the error body
    /// decoded best-effort; 2xx responses must parse as JSON or become
    /// [`AgentIdError::Decode`]. Nothing is retried.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<Value, AgentIdError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(AgentIdError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|_| AgentIdError::Decode { body: text })
    }
}

/// Percent-encode a caller-supplied identifier before it becomes a URL path
/// segment, so reserved characters cannot alter the request path.
fn encode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

fn build_http_client(api_key: &str, timeout: Duration) -> reqwest::Client {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .expect("API key must be a valid header value");
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}
