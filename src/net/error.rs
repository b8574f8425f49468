//! REST failure classification.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// How a REST call failed.
///
/// Every failure is terminal for the single user action that issued
/// it; there are no retries. `Unauthorized` additionally triggers a
/// global logout at the call site.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The gateway answered 401; the session is no longer valid.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Transport-level failure before a response arrived, or an
    /// undecodable success body.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-2xx response. The gateway reports failures as
    /// `{"detail": "..."}`; anything else gets a generic message.
    #[must_use]
    pub fn from_response_parts(status: u16, body: &str) -> ApiError {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(ToOwned::to_owned))
            .unwrap_or_else(|| format!("Request failed ({status})"));

        ApiError::Status { status, message }
    }

    /// Whether this failure should end the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
