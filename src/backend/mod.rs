mod client;
mod types;

pub use client::{GeminiClient, InferenceBackend};
pub use types::*;
