use ayahsearch_common::{AppConfig, AyahSearchError, Result};
use ayahsearch_embedding::EmbeddingClient;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::corpus::{CorpusStore, Verse};
use crate::filter::is_presentable;
use crate::index::VectorIndex;

/// Index statistics for the transport layer
#[derive(Debug, Clone)]
pub struct EngineStats {
    pub verses: usize,
    pub dimension: usize,
    pub embedding_model: String,
}

/// Verse search engine
///
/// Owns the immutable corpus and vector index plus the embedding
/// collaborator. Built once at startup; safe to share behind an `Arc`
/// and search from any number of requests concurrently.
pub struct SearchEngine {
    corpus: CorpusStore,
    index: VectorIndex,
    client: Arc<dyn EmbeddingClient>,
    embedding_model: String,
    top_k: usize,
}

impl SearchEngine {
    /// Load the corpus, obtain embeddings, and build the index
    ///
    /// Embeddings come from the cache file when it exists (its length
    /// must match the corpus exactly) and are computed through the
    /// embedding client otherwise, then cached for the next start.
    pub async fn build(config: &AppConfig, client: Arc<dyn EmbeddingClient>) -> Result<Self> {
        let corpus = CorpusStore::load(&config.corpus_path)?;

        let vectors = match load_cached_embeddings(&config.embeddings_cache_path, corpus.len())? {
            Some(vectors) => vectors,
            None => {
                info!("Creating embeddings for {} verses...", corpus.len());
                let vectors = embed_corpus(&corpus, client.as_ref()).await?;
                if let Err(e) = write_embeddings_cache(&config.embeddings_cache_path, &vectors) {
                    warn!(
                        "Failed to write embeddings cache {}: {}",
                        config.embeddings_cache_path.display(),
                        e
                    );
                }
                vectors
            }
        };

        let index = VectorIndex::build(vectors)?;
        info!("Indexed {} verses (dimension {})", index.len(), index.dim());

        Ok(Self {
            corpus,
            index,
            client,
            embedding_model: config.embedding_model.clone(),
            top_k: config.top_k,
        })
    }

    /// Assemble an engine from already-aligned parts
    pub fn from_parts(
        corpus: CorpusStore,
        vectors: Vec<Vec<f32>>,
        client: Arc<dyn EmbeddingClient>,
        embedding_model: impl Into<String>,
        top_k: usize,
    ) -> Result<Self> {
        if vectors.len() != corpus.len() {
            return Err(AyahSearchError::corpus(format!(
                "Corpus/embedding length mismatch: {} verses, {} vectors",
                corpus.len(),
                vectors.len()
            )));
        }
        let index = VectorIndex::build(vectors)?;
        Ok(Self {
            corpus,
            index,
            client,
            embedding_model: embedding_model.into(),
            top_k,
        })
    }

    /// Search for the verses nearest to a free-text query
    ///
    /// Embeds the query, scans the index with `k = top_k`, and drops
    /// candidates without presentable tafsir. No backfill: the result
    /// may hold fewer than `top_k` verses.
    pub async fn search_verses(&self, query: &str) -> Result<Vec<Verse>> {
        debug!("Searching verses - query length {}", query.len());

        let query_embedding = self.client.embed(query).await?;
        let hits = self.index.search(&query_embedding, self.top_k)?;

        let mut results: Vec<Verse> = hits
            .iter()
            .filter_map(|hit| self.corpus.get(hit.id))
            .filter(|verse| is_presentable(verse))
            .cloned()
            .collect();

        // no-op at the default k, required if top_k ever widens
        results.truncate(self.top_k);

        info!(
            "Search completed - {} presentable of {} candidates",
            results.len(),
            hits.len()
        );
        Ok(results)
    }

    /// Index statistics
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            verses: self.corpus.len(),
            dimension: self.index.dim(),
            embedding_model: self.embedding_model.clone(),
        }
    }
}

/// Embed every verse in corpus order
async fn embed_corpus(
    corpus: &CorpusStore,
    client: &dyn EmbeddingClient,
) -> Result<Vec<Vec<f32>>> {
    let mut vectors = Vec::with_capacity(corpus.len());
    for verse in corpus.verses() {
        let vector = client.embed(&verse.embedding_text()).await?;
        vectors.push(vector);
    }
    Ok(vectors)
}

/// Load the embeddings cache if present
///
/// A cache whose length disagrees with the corpus means the corpus
/// changed underneath it; that is a fail-fast error, not something to
/// silently rebuild over.
fn load_cached_embeddings(path: &Path, corpus_len: usize) -> Result<Option<Vec<Vec<f32>>>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = std::fs::read_to_string(path)?;
    let vectors: Vec<Vec<f32>> = serde_json::from_str(&data)
        .map_err(|e| AyahSearchError::corpus(format!("Malformed embeddings cache: {}", e)))?;

    if vectors.len() != corpus_len {
        return Err(AyahSearchError::corpus(format!(
            "Embeddings cache length mismatch: {} vectors for {} verses (delete {} to rebuild)",
            vectors.len(),
            corpus_len,
            path.display()
        )));
    }

    info!("Loaded {} cached embeddings from {}", vectors.len(), path.display());
    Ok(Some(vectors))
}

/// Persist freshly computed embeddings next to the corpus
fn write_embeddings_cache(path: &Path, vectors: &[Vec<f32>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string(vectors)?;
    std::fs::write(path, data)?;
    Ok(())
}
