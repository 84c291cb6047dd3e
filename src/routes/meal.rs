use axum::{Json, extract::State};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::{AppState, handlers::ApiError, handlers::generate::handle_generate};

#[utoipa::path(
    post,
    path = "/api/meal",
    tag = "generation",
    request_body = crate::models::requests::MealRequest,
    responses(
        (status = 200, description = "Meal plan conforming to the declared response schema"),
        (status = 400, description = "Missing or non-string `user_message` field", body = crate::models::common::ErrorMessage),
        (status = 502, description = "Upstream generation failure", body = crate::models::common::ErrorMessage)
    )
)]
pub async fn generate_meal(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<JsonValue>, ApiError> {
    info!("Incoming meal planning request");
    let value = handle_generate(&state, &state.profiles.meal, &payload, "user_message").await?;
    Ok(Json(value))
}
