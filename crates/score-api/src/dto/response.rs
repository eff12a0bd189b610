use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// RFC3339, only set on server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorResponse {
    pub const fn new(error: String) -> Self {
        Self {
            error,
            timestamp: None,
        }
    }

    pub fn with_timestamp(error: String) -> Self {
        Self {
            error,
            timestamp: Some(Utc::now().to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String, // RFC3339 timestamp
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "Vault Score API".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
