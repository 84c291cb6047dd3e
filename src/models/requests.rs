use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/gemini`. The frontend chatbot posts the collected
/// survey answers as one free-text field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodBankRequest {
    #[serde(rename = "userInput")]
    pub user_input: String,
}

/// Body of `POST /api/meal`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealRequest {
    pub user_message: String,
}
