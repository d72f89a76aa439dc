pub mod books;
pub mod image;
pub mod parser;
mod types;

pub use types::*;

use crate::{Result, backend::InferenceBackend, cache::ResultCache};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Instruction sent alongside every image. Wording aside, the contract is:
/// one JSON object, canonical book names, chapter as a plain numeral.
pub const DEFAULT_INSTRUCTION: &str = r#"Analyze the provided image to identify which book and chapter of the Bible it shows. Follow these rules:

1. Text extraction:
- Read the visible text, focusing on biblical book names (e.g., "Genesis", "Psalms") and chapter numbers (e.g., "1", "3").
- Consider common abbreviations (e.g., "Jn" for John, "1 Cor" for 1 Corinthians).

2. Output format:
- Return ONLY a valid JSON object, without markdown or additional text:
{"status": "success" | "error", "data": {"book": "CANONICAL_BOOK_NAME", "chapter": "CHAPTER_NUMBER"} | null, "message": "Descriptive message"}

3. Contingency rules:
- If the text is not readable or the image is not from the Bible, return status "error" with message "The image is invalid or the text is not readable".
- If the text is readable but does not match a Bible book, return status "error" with message "No Bible book identified".

4. Additional notes:
- Use the canonical English book name (e.g., "1 Kings", not "1 Kgs").
- The chapter must be a plain numeral as text.
- Prioritize the first detected book and chapter if there are multiple."#;

/// Brokers one recognition exchange: dereference the image, ask the backend,
/// parse and validate its reply, remember the latest result.
pub struct RecognitionService {
    backend: Arc<dyn InferenceBackend>,
    http: reqwest::Client,
    cache: ResultCache,
    instruction: String,
}

impl RecognitionService {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        http: reqwest::Client,
        cache: ResultCache,
        instruction: Option<String>,
    ) -> Self {
        Self {
            backend,
            http,
            cache,
            instruction: instruction.unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
        }
    }

    /// Runs the full pipeline for one request. Every failure class is logged
    /// here with its tag; callers only see one collapsed upstream error.
    pub async fn handle(&self, request: RecognitionRequest) -> Result<RecognitionResult> {
        let image = image::resolve(&self.http, &request.image)
            .await
            .inspect_err(|e| warn!(class = e.class(), "Image resolution failed: {}", e))?;

        // The instruction is a fixed template. Clients send one on the wire,
        // but it is not user-editable, so the configured template wins.
        if request.instruction.is_some() {
            debug!("Ignoring client-supplied instruction in favor of the template");
        }

        let reply = self
            .backend
            .generate(&image.bytes, &image.mime_type, &self.instruction)
            .await
            .inspect_err(|e| warn!(class = e.class(), "Backend call failed: {}", e))?;

        let result = parser::parse_reply(&reply).inspect_err(|e| {
            // Log the class but never the raw model text at warn level.
            warn!(class = e.class(), "Backend reply rejected: {}", e);
            debug!("Rejected reply text: {}", reply);
        })?;

        self.cache.store(result.clone()).await;

        match &result.data {
            Some(data) => info!(
                "Recognized {} chapter {}",
                data.book.short_name, data.chapter
            ),
            None => info!("Backend reported a recognition error"),
        }

        Ok(result)
    }

    /// Most recent result still inside its retention window, if any.
    pub async fn latest(&self) -> Option<RecognitionResult> {
        self.cache.get().await
    }
}
