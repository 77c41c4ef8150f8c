/// AyahSearch error types
#[derive(Debug, thiserror::Error)]
pub enum AyahSearchError {
    /// Empty query rejected at the transport boundary
    #[error("Empty query")]
    EmptyQuery,

    /// Query/index embedding dimension disagreement
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index built (or searched) with no vectors
    #[error("Vector index is empty")]
    EmptyIndex,

    /// Embedding collaborator failure
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// Corpus loading/validation error
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AyahSearchError {
    /// Create embedding error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::EmbeddingUnavailable(msg.into())
    }

    /// Create corpus error
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        Self::Corpus(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl AyahSearchError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyQuery => 400,
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::EmbeddingUnavailable(_) => 503,
            Self::EmptyIndex => 503,
            Self::DimensionMismatch { .. } => 500,
            Self::Corpus(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}
