use serde::{Deserialize, Serialize};

/// Structured reference to one of the 66 canonical books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReference {
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
}

/// A recognized book/chapter pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMatch {
    pub book: BookReference,
    /// Chapter number as the backend returns it: a plain numeral as text.
    pub chapter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionStatus {
    Success,
    Error,
}

/// Outcome of one recognition exchange. Exactly one of `data` (on success)
/// or `message` (on error) is populated; the constructors are the only way
/// to build one, so a partial success cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub status: RecognitionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChapterMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecognitionResult {
    pub fn success(book: BookReference, chapter: impl Into<String>) -> Self {
        Self {
            status: RecognitionStatus::Success,
            data: Some(ChapterMatch {
                book,
                chapter: chapter.into(),
            }),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: RecognitionStatus::Error,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RecognitionStatus::Success
    }
}

/// An incoming recognition request: an image reference (data URI or
/// fetchable URL) and optionally an instruction override. The service treats
/// its own template as authoritative; the field exists for wire
/// compatibility.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub image: String,
    pub instruction: Option<String>,
}
