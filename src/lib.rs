pub mod backend;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod recognition;
pub mod server;

pub use error::{Error, Result};
