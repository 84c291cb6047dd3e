use axum::http::StatusCode;

pub mod gemini;
pub mod meal;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
