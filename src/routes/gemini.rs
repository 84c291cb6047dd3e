use axum::{Json, extract::State};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::{AppState, handlers::ApiError, handlers::generate::handle_generate};

#[utoipa::path(
    post,
    path = "/api/gemini",
    tag = "generation",
    request_body = crate::models::requests::FoodBankRequest,
    responses(
        (status = 200, description = "Food bank recommendation conforming to the declared response schema"),
        (status = 400, description = "Missing or non-string `userInput` field", body = crate::models::common::ErrorMessage),
        (status = 502, description = "Upstream generation failure", body = crate::models::common::ErrorMessage)
    )
)]
pub async fn generate_food_bank(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<JsonValue>, ApiError> {
    info!("Incoming food bank recommendation request");
    let value = handle_generate(&state, &state.profiles.food_bank, &payload, "userInput").await?;
    Ok(Json(value))
}
