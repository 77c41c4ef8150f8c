use crate::error::AyahSearchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// AyahSearch application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the verse corpus JSON file
    pub corpus_path: PathBuf,

    /// Path to the precomputed embeddings cache
    pub embeddings_cache_path: PathBuf,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Number of nearest neighbors fetched per search
    pub top_k: usize,

    /// Window size for the "more" navigation command
    pub more_window: usize,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("./data/quran_with_tafsir.json"),
            embeddings_cache_path: PathBuf::from("./data/embeddings.json"),
            ollama_base_url: "http://localhost:11434".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            top_k: 5,
            more_window: 5,
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, AyahSearchError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            corpus_path: Self::get_env_path("CORPUS_PATH")
                .unwrap_or_else(|| PathBuf::from("./data/quran_with_tafsir.json")),
            embeddings_cache_path: Self::get_env_path("EMBEDDINGS_CACHE_PATH")
                .unwrap_or_else(|| PathBuf::from("./data/embeddings.json")),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "nomic-embed-text".to_string()),
            top_k: std::env::var("TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            more_window: std::env::var("MORE_WINDOW")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./data/log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AyahSearchError> {
        if self.corpus_path.as_os_str().is_empty() {
            return Err(AyahSearchError::config("Corpus path cannot be empty"));
        }

        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://")
        {
            return Err(AyahSearchError::config(
                "Ollama base URL must start with http:// or https://",
            ));
        }

        if self.embedding_model.is_empty() {
            return Err(AyahSearchError::config(
                "Embedding model name cannot be empty",
            ));
        }

        if self.top_k == 0 {
            return Err(AyahSearchError::config("top_k must be at least 1"));
        }

        if self.more_window == 0 {
            return Err(AyahSearchError::config("more_window must be at least 1"));
        }

        if self.server_port == 0 {
            return Err(AyahSearchError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.more_window, 5);
        assert_eq!(config.embedding_model, "nomic-embed-text");
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.top_k = 0;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.more_window = 0;
        assert!(invalid_config.validate().is_err());
    }
}
