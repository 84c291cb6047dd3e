use serde_json::Value;
use tracing::debug;

use super::ApiError;
use crate::{AppState, profiles::GenerationProfile};

/// Pulls the named text field out of the loose request body and runs one
/// generation round trip. The upstream call only happens once the field has
/// been validated.
pub async fn handle_generate(
    state: &AppState,
    profile: &GenerationProfile,
    payload: &Value,
    field: &'static str,
) -> Result<Value, ApiError> {
    let text = extract_text(payload, field)?;
    debug!(
        "Dispatching {} generation ({} chars of user text)",
        profile.name,
        text.len()
    );
    let value = state.gemini.generate(profile, text).await?;
    Ok(value)
}

fn extract_text<'a>(payload: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ApiError::BadRequest(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_text_returns_the_named_field() {
        let payload = json!({ "userInput": "closest foodbank" });
        assert_eq!(
            extract_text(&payload, "userInput").unwrap(),
            "closest foodbank"
        );
    }

    #[test]
    fn extract_text_rejects_missing_field() {
        let payload = json!({ "other": "x" });
        assert!(matches!(
            extract_text(&payload, "userInput"),
            Err(ApiError::BadRequest("userInput"))
        ));
    }

    #[test]
    fn extract_text_rejects_non_string_field() {
        let payload = json!({ "userInput": 42 });
        assert!(matches!(
            extract_text(&payload, "userInput"),
            Err(ApiError::BadRequest("userInput"))
        ));
    }
}
