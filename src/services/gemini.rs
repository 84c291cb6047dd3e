use futures_util::StreamExt;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    config::Config,
    models::gemini::{Content, GenerateContentChunk, GenerateContentRequest, GenerationConfig, Part},
    profiles::GenerationProfile,
    services::stream::SseLineDecoder,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("generation output is not valid JSON: {0}")]
    MalformedOutput(String),
    #[error("generation output missing required fields: {0}")]
    SchemaViolation(String),
}

/// Client for Gemini's `models.streamGenerateContent` endpoint. Holds the
/// shared HTTP client plus the connection knobs read once from [`Config`].
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    model: String,
    max_retries: u32,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, cfg: &Config) -> Self {
        Self {
            http,
            base_url: cfg.gemini_base_url.clone(),
            api_key: cfg.gemini_api_key.clone(),
            model: cfg.gemini_model.clone(),
            max_retries: cfg.max_retries,
        }
    }

    /// Sends one schema-constrained generation request and returns the parsed
    /// JSON object assembled from the streamed text fragments.
    pub async fn generate(
        &self,
        profile: &GenerationProfile,
        user_text: &str,
    ) -> Result<Value, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: user_text.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: profile.system_instruction.to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: profile.response_schema.clone(),
                temperature: profile.temperature,
            }),
        };

        let url = self.stream_url()?;

        // Transport failures get one more bounded round; HTTP error statuses
        // and malformed output are terminal.
        let mut attempt: u32 = 0;
        let response = loop {
            match self.http.post(url.clone()).json(&body).send().await {
                Ok(res) => break res,
                Err(err) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        "Gemini request failed for profile {} (retry {attempt}/{}): {err}",
                        profile.name, self.max_retries
                    );
                }
                Err(err) => {
                    error!("Gemini request failed for profile {}: {err}", profile.name);
                    return Err(GenerateError::UpstreamUnavailable(format!(
                        "request error: {err}"
                    )));
                }
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            error!("Gemini returned status {status} for profile {}", profile.name);
            return Err(GenerateError::UpstreamUnavailable(format!(
                "status {status}: {detail}"
            )));
        }

        let full = self.collect_text(response).await?;
        if full.is_empty() {
            return Err(GenerateError::MalformedOutput(
                "upstream produced no text fragments".to_string(),
            ));
        }

        debug!(
            "Accumulated {} bytes of generated text for profile {}",
            full.len(),
            profile.name
        );

        let value: Value = serde_json::from_str(&full)
            .map_err(|err| GenerateError::MalformedOutput(err.to_string()))?;
        check_required(&value, profile.required)?;
        Ok(value)
    }

    /// Drains the SSE body, appending every textual part in arrival order.
    async fn collect_text(&self, response: reqwest::Response) -> Result<String, GenerateError> {
        let mut decoder = SseLineDecoder::new();
        let mut full = String::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|err| {
                GenerateError::UpstreamUnavailable(format!("stream error: {err}"))
            })?;
            for payload in decoder.feed(&bytes) {
                append_fragments(&payload, &mut full);
            }
        }
        if let Some(payload) = decoder.finish() {
            append_fragments(&payload, &mut full);
        }

        Ok(full)
    }

    fn stream_url(&self) -> Result<Url, GenerateError> {
        let mut url = self
            .base_url
            .join(&format!(
                "/v1beta/models/{}:streamGenerateContent",
                self.model
            ))
            .map_err(|err| {
                GenerateError::UpstreamUnavailable(format!("invalid upstream URL: {err}"))
            })?;
        url.query_pairs_mut()
            .append_pair("alt", "sse")
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

/// Extracts the text of every candidate part in the chunk, in order.
/// Fragments without textual content are skipped; payloads that are not a
/// chunk at all are dropped, matching the tolerant handling upstream expects.
fn append_fragments(payload: &str, full: &mut String) {
    let chunk: GenerateContentChunk = match serde_json::from_str(payload) {
        Ok(chunk) => chunk,
        Err(err) => {
            debug!("Skipping undecodable stream payload: {err}");
            return;
        }
    };
    for candidate in chunk.candidates {
        if let Some(content) = candidate.content {
            for part in content.parts {
                if let Some(text) = part.text {
                    full.push_str(&text);
                }
            }
        }
    }
}

fn check_required(value: &Value, required: &[&str]) -> Result<(), GenerateError> {
    let missing = required
        .iter()
        .copied()
        .filter(|field| value.get(field).is_none())
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(GenerateError::SchemaViolation(missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn append_fragments_keeps_arrival_order() {
        let mut full = String::new();
        for text in ["{\"na", "me\":", "\"x\"}"] {
            let payload = json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            });
            append_fragments(&payload.to_string(), &mut full);
        }
        assert_eq!(full, "{\"name\":\"x\"}");
    }

    #[test]
    fn append_fragments_skips_parts_without_text() {
        let mut full = String::new();
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{}, { "text": "a" }, {}] }
            }]
        });
        append_fragments(&payload.to_string(), &mut full);
        assert_eq!(full, "a");
    }

    #[test]
    fn append_fragments_tolerates_candidates_without_content() {
        let mut full = String::new();
        append_fragments(&json!({ "candidates": [{}] }).to_string(), &mut full);
        append_fragments(&json!({ "usageMetadata": {} }).to_string(), &mut full);
        append_fragments("not json", &mut full);
        assert!(full.is_empty());
    }

    #[test]
    fn check_required_accepts_superset() {
        let value = json!({ "name": "x", "extra": 1 });
        assert!(check_required(&value, &["name"]).is_ok());
        assert!(check_required(&value, &[]).is_ok());
    }

    #[test]
    fn check_required_reports_every_missing_field() {
        let value = json!({ "name": "x" });
        let err = check_required(&value, &["name", "foods", "description"]).unwrap_err();
        match err {
            GenerateError::SchemaViolation(missing) => {
                assert_eq!(missing, "foods, description");
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }
}
