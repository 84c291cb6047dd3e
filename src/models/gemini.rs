use serde::{Deserialize, Serialize};

/// Outbound `models.streamGenerateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One streamed response chunk. Everything is optional: streamed chunks omit
/// fields freely (usage-only chunks, safety-only candidates, empty parts).
#[derive(Debug, Deserialize)]
pub struct GenerateContentChunk {
    #[serde(default)]
    pub candidates: Vec<ChunkCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkCandidate {
    #[serde(default)]
    pub content: Option<ChunkContent>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkContent {
    #[serde(default)]
    pub parts: Vec<ChunkPart>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkPart {
    #[serde(default)]
    pub text: Option<String>,
}
