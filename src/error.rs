use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for the recognition pipeline. The HTTP layer collapses
/// all of these into one coarse response, but the variants stay distinct so
/// logs and tests can tell an image-fetch failure from a backend failure
/// from an unparsable reply.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Image fetch error: {0}")]
    ImageFetch(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Unparsable backend reply: {0}")]
    UnparsableReply(String),

    #[error("Malformed backend reply: {0}")]
    MalformedReply(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn image_fetch(msg: impl Into<String>) -> Self {
        Self::ImageFetch(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn unparsable(msg: impl Into<String>) -> Self {
        Self::UnparsableReply(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedReply(msg.into())
    }

    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short class tag used in structured logs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidRequest(_) => "invalid_request",
            Self::ImageFetch(_) => "image_fetch",
            Self::Backend(_) => "backend",
            Self::UnparsableReply(_) => "unparsable_reply",
            Self::MalformedReply(_) => "malformed_reply",
            Self::Capture(_) => "capture",
            Self::Http(_) => "http",
            Self::Serialization(_) => "serialization",
            Self::Yaml(_) => "yaml",
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::AddrParse(_) => "addr_parse",
            Self::Internal(_) => "internal",
        }
    }
}
