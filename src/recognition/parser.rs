use super::books;
use super::types::RecognitionResult;
use crate::{Error, Result};
use serde::Deserialize;

const DEFAULT_ERROR_MESSAGE: &str = "The image is invalid or the text is not readable";

/// The backend's reply shape, taken at face value before validation.
#[derive(Debug, Deserialize)]
struct RawReply {
    status: String,
    #[serde(default)]
    data: Option<RawData>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    #[serde(default)]
    book: Option<String>,
    #[serde(default)]
    chapter: Option<String>,
}

/// Removes the markdown code fence the model is known to wrap JSON in,
/// despite being instructed not to.
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line, then the closing fence.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses the backend's free-text reply into a validated result.
///
/// The backend is not trusted: the text must be JSON of the agreed shape, a
/// success must carry a book that resolves against the canon plus a chapter,
/// and an error must carry (or is given) a human-readable message. Anything
/// else is a tagged parse failure, never a partial success.
pub fn parse_reply(reply: &str) -> Result<RecognitionResult> {
    let body = strip_code_fence(reply);

    let raw: RawReply = serde_json::from_str(body)
        .map_err(|e| Error::unparsable(format!("reply is not valid JSON: {}", e)))?;

    match raw.status.as_str() {
        "success" => {
            let data = raw
                .data
                .ok_or_else(|| Error::malformed("success reply without data"))?;
            let book_name = data
                .book
                .filter(|b| !b.trim().is_empty())
                .ok_or_else(|| Error::malformed("success reply without book"))?;
            let chapter = data
                .chapter
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| Error::malformed("success reply without chapter"))?;
            let book = books::resolve(&book_name).ok_or_else(|| {
                Error::malformed(format!("book is not in the canon: {}", book_name))
            })?;
            Ok(RecognitionResult::success(book, chapter.trim()))
        }
        "error" => {
            let message = raw
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            Ok(RecognitionResult::error(message))
        }
        other => Err(Error::malformed(format!("unknown status: {}", other))),
    }
}
