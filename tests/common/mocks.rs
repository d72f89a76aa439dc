use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use versefinder_rust::{
    Error, Result,
    backend::InferenceBackend,
    cache::ResultCache,
    client::{CaptureSource, CapturedFrame},
    recognition::RecognitionService,
};

/// One recorded backend invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub image: Vec<u8>,
    pub mime_type: String,
    pub instruction: String,
}

/// Mock inference backend: hands out queued replies and records every call.
#[derive(Clone)]
pub struct MockBackend {
    replies: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    error: Option<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(reply.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn generate(&self, image: &[u8], mime_type: &str, instruction: &str) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            image: image.to_vec(),
            mime_type: mime_type.to_string(),
            instruction: instruction.to_string(),
        });

        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::backend("no more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

/// Capture source that yields a fixed frame, or fails when given none.
pub struct MockCamera {
    frame: Option<String>,
}

impl MockCamera {
    pub fn with_frame(data_uri: impl Into<String>) -> Self {
        Self {
            frame: Some(data_uri.into()),
        }
    }

    pub fn broken() -> Self {
        Self { frame: None }
    }
}

impl CaptureSource for MockCamera {
    fn capture(&mut self) -> Result<CapturedFrame> {
        match &self.frame {
            Some(data_uri) => Ok(CapturedFrame {
                data_uri: data_uri.clone(),
            }),
            None => Err(Error::capture("no frame available")),
        }
    }
}

/// A recognition service wired to the given mock, with a test-sized TTL.
pub fn service_with(backend: &MockBackend, ttl: Duration) -> Arc<RecognitionService> {
    Arc::new(RecognitionService::new(
        Arc::new(backend.clone()),
        reqwest::Client::new(),
        ResultCache::new(ttl),
        None,
    ))
}

/// A small valid frame: "hello" as a base64 JPEG data URI.
pub fn test_data_uri() -> String {
    "data:image/jpeg;base64,aGVsbG8=".to_string()
}

pub const JOHN_3_REPLY: &str =
    r#"{"status": "success", "data": {"book": "John", "chapter": "3"}, "message": ""}"#;

pub const BLANK_PAGE_REPLY: &str =
    r#"{"status": "error", "data": null, "message": "The image is invalid or the text is not readable"}"#;
