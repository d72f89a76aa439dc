use crate::recognition::RecognitionResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Instruction text from the client. Accepted for wire compatibility;
    /// the service's fixed template is authoritative.
    #[serde(default)]
    pub message: Option<String>,
    /// Data URI or fetchable URL for the captured frame.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub answer: RecognitionResult,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
