use thiserror::Error;

/// Failure of a single API call.
///
/// The three kinds are disjoint: a request either never completed
/// ([`Transport`](AgentIdError::Transport)), completed with a non-2xx status
/// ([`Status`](AgentIdError::Status)), or completed with a 2xx status whose
/// body was not JSON ([`Decode`](AgentIdError::Decode)). The client never
/// retries; retry and backoff policy belong to the caller.
#[derive(Debug, Error)]
pub enum AgentIdError {
    /// The request could not be sent or no response was received
    /// (DNS failure, connection refused, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status outside the 2xx range.
    /// `body` holds the decoded error payload, or the raw text when the
    /// error body itself is not JSON.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: serde_json::Value },

    /// A 2xx response carried a body that could not be parsed as JSON.
    #[error("invalid JSON in response body: {body}")]
    Decode { body: String },
}

impl AgentIdError {
    /// HTTP status code, when the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AgentIdError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = AgentIdError::Status {
            status: 404,
            body: serde_json::json!({"error": "not found"}),
        };
        assert_eq!(err.status(), Some(404));
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("not found"));
    }

    #[test]
    fn test_decode_error_carries_raw_body() {
        let err = AgentIdError::Decode {
            body: "<html>oops</html>".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("<html>oops</html>"));
    }
}
