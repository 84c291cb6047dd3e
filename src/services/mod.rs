pub mod gemini;
pub mod stream;
