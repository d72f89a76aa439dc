use crate::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

const DEFAULT_MIME: &str = "image/jpeg";

/// Image bytes plus the mime type to forward to the backend.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Dereferences the request's image field into bytes.
///
/// Accepts the two forms the capture client produces: a `data:` URI with
/// inline base64 (the webcam path) or an `http(s)` URL fetched over the
/// network. Anything else, or an empty payload, is rejected.
pub async fn resolve(http: &reqwest::Client, image: &str) -> Result<ImageData> {
    let image = image.trim();
    if image.is_empty() {
        return Err(Error::invalid_request("image must not be empty"));
    }

    let data = if let Some(rest) = image.strip_prefix("data:") {
        decode_data_uri(rest)?
    } else if image.starts_with("http://") || image.starts_with("https://") {
        fetch_url(http, image).await?
    } else {
        return Err(Error::image_fetch(
            "image must be a data URI or an http(s) URL",
        ));
    };

    if data.bytes.is_empty() {
        return Err(Error::image_fetch("image reference resolved to zero bytes"));
    }

    debug!(
        "Resolved image reference to {} bytes ({})",
        data.bytes.len(),
        data.mime_type
    );

    Ok(data)
}

fn decode_data_uri(rest: &str) -> Result<ImageData> {
    // data:[<mime>][;base64],<payload>
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::image_fetch("data URI has no payload"))?;

    let Some(header) = header.strip_suffix(";base64") else {
        return Err(Error::image_fetch("data URI is not base64-encoded"));
    };

    let mime_type = if header.is_empty() {
        DEFAULT_MIME.to_string()
    } else {
        header.to_string()
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::image_fetch(format!("invalid base64 payload: {}", e)))?;

    Ok(ImageData { bytes, mime_type })
}

async fn fetch_url(http: &reqwest::Client, url: &str) -> Result<ImageData> {
    let response = http.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::image_fetch(format!(
            "image URL returned {}",
            response.status()
        )));
    }

    let mime_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
        .unwrap_or_else(|| DEFAULT_MIME.to_string());

    let bytes = response.bytes().await?.to_vec();

    Ok(ImageData { bytes, mime_type })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_resolve_data_uri() {
        let http = reqwest::Client::new();
        let data = resolve(&http, "data:image/png;base64,aGVsbG8=").await.unwrap();
        assert_eq!(data.bytes, b"hello");
        assert_eq!(data.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_resolve_data_uri_defaults_mime() {
        let http = reqwest::Client::new();
        let data = resolve(&http, "data:;base64,aGVsbG8=").await.unwrap();
        assert_eq!(data.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_resolve_rejects_empty_reference() {
        let http = reqwest::Client::new();
        let err = resolve(&http, "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_unsupported_scheme() {
        let http = reqwest::Client::new();
        let err = resolve(&http, "file:///etc/passwd").await.unwrap_err();
        assert!(matches!(err, Error::ImageFetch(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_non_base64_data_uri() {
        let http = reqwest::Client::new();
        let err = resolve(&http, "data:image/jpeg,plain").await.unwrap_err();
        assert!(matches!(err, Error::ImageFetch(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_empty_payload() {
        let http = reqwest::Client::new();
        let err = resolve(&http, "data:image/jpeg;base64,").await.unwrap_err();
        assert!(matches!(err, Error::ImageFetch(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_bad_base64() {
        let http = reqwest::Client::new();
        let err = resolve(&http, "data:image/jpeg;base64,???").await.unwrap_err();
        assert!(matches!(err, Error::ImageFetch(_)));
    }
}
