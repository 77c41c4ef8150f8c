use ayahsearch_common::{AyahSearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One retrievable verse with its commentary
///
/// `id` equals the verse's position in the corpus file and in the
/// embedding matrix; the alignment is fixed at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Position in the corpus, assigned at load
    #[serde(default)]
    pub id: usize,

    /// Surah number
    pub surah: u32,

    /// Ayah number within the surah
    pub ayah: u32,

    /// Original Arabic text
    pub arabic: String,

    /// English translation
    pub english: String,

    /// Tafsir (commentary); may be empty or flagged unavailable
    #[serde(default)]
    pub tafsir: String,
}

impl Verse {
    /// Text fed to the embedding model: translation plus commentary
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.english, self.tafsir)
    }
}

/// Immutable, in-memory verse collection
#[derive(Debug, Clone)]
pub struct CorpusStore {
    verses: Vec<Verse>,
}

impl CorpusStore {
    /// Load corpus from a JSON file
    ///
    /// Fails fast on a missing file, malformed JSON, or an empty corpus;
    /// the process must not start serving without verses to search.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AyahSearchError::corpus(format!(
                "File '{}' not found",
                path.display()
            )));
        }

        let data = std::fs::read_to_string(path)?;
        let verses = Self::parse(&data)?;

        tracing::info!("Loaded {} verses from {}", verses.len(), path.display());
        Ok(Self { verses })
    }

    /// Parse a JSON array of verses, assigning ids by position
    pub fn parse(data: &str) -> Result<Vec<Verse>> {
        let mut verses: Vec<Verse> = serde_json::from_str(data)
            .map_err(|e| AyahSearchError::corpus(format!("Malformed corpus JSON: {}", e)))?;

        if verses.is_empty() {
            return Err(AyahSearchError::corpus("Corpus contains no verses"));
        }

        for (i, verse) in verses.iter_mut().enumerate() {
            verse.id = i;
        }

        Ok(verses)
    }

    /// Build a store from already-parsed verses (ids must be positional)
    pub fn from_verses(verses: Vec<Verse>) -> Self {
        Self { verses }
    }

    /// Get verse by id
    pub fn get(&self, id: usize) -> Option<&Verse> {
        self.verses.get(id)
    }

    /// All verses, in corpus order
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
