use async_trait::async_trait;
use ayahsearch_common::Result;

/// Common trait for embedding backends
///
/// The search engine only needs text -> fixed-length vector; everything
/// else (model choice, transport, retries) stays behind this seam.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}
