use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ScanBody<'a> {
    image: &'a str,
}

/// Thin HTTP client for the recognition service.
pub struct ScanApi {
    http: reqwest::Client,
    base_url: String,
}

impl ScanApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits one captured frame and returns the raw `answer` payload.
    ///
    /// The answer is deliberately untyped: the service is validated
    /// defensively by the session, the same way the backend is by the
    /// service. Transport failures and non-2xx statuses are one class.
    pub async fn submit(&self, image: &str) -> Result<serde_json::Value> {
        let response = self
            .http
            .post(format!("{}/api", self.base_url))
            .json(&ScanBody { image })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::backend(format!("service returned {}", status)));
        }

        let mut body: serde_json::Value = response.json().await?;
        debug!("Scan response received");

        Ok(body
            .get_mut("answer")
            .map(serde_json::Value::take)
            .unwrap_or(serde_json::Value::Null))
    }
}
