use super::RequestOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a token check as handed back to the host.
///
/// Serialises to an object with exactly one key, either `{"response": ...}`
/// or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProbeResult {
    Response(String),
    Error(String),
}

impl ProbeResult {
    pub fn response(body: &str) -> Self {
        Self::Response(body.to_string())
    }

    pub fn error(description: &str) -> Self {
        Self::Error(description.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    /// Raw body of a successful check.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Response(body) => Some(body),
            Self::Error(_) => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Response(_) => None,
            Self::Error(description) => Some(description),
        }
    }

    /// Reads the `accessToken` field the portal puts in its payload.
    ///
    /// The probe itself never looks inside the body; this is for callers that
    /// want the token and not just its presence.
    pub fn access_token(&self) -> Option<String> {
        let body = self.body()?;
        let payload: Value = serde_json::from_str(body).ok()?;

        payload
            .get("accessToken")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl From<RequestOutcome> for ProbeResult {
    fn from(outcome: RequestOutcome) -> Self {
        match outcome {
            Ok(body) => Self::Response(body),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}
