use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable error body returned on every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// Stable error code (e.g., `bad_request`, `upstream_unavailable`)
    pub code: String,
    pub message: String,
}
