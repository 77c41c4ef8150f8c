//! AyahSearch embedding client
//!
//! Turns text into fixed-dimension vectors through an Ollama-compatible
//! embedding API. The rest of the system consumes it through the
//! `EmbeddingClient` trait.

pub mod client;
pub mod embed_trait;
pub mod types;

pub use client::OllamaClient;
pub use embed_trait::EmbeddingClient;
pub use types::{EmbedRequest, EmbedResponse};
