use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

/// The external multimodal model, seen as a single capability: one image plus
/// one instruction in, one free-text reply out. No streaming.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, image: &[u8], mime_type: &str, instruction: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: BackendConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl InferenceBackend for GeminiClient {
    async fn generate(&self, image: &[u8], mime_type: &str, instruction: &str) -> Result<String> {
        debug!(
            "Calling generateContent with {} image bytes ({})",
            image.len(),
            mime_type
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline_data(mime_type, STANDARD.encode(image)),
                    Part::text(instruction),
                ],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::backend(format!(
                "generateContent returned {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .first_text()
            .ok_or_else(|| Error::backend("generateContent reply contained no text"))?;

        debug!("Received {} reply characters from backend", text.len());

        Ok(text.to_string())
    }
}
