use ayahsearch_search::Verse;
use serde::{Deserialize, Serialize};

/// Session id used when the caller does not supply one
pub const DEFAULT_SESSION_ID: &str = "default";

/// Query request body
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Free-text query or navigation command
    pub query: String,

    /// Conversation identifier; omitted means the shared default session
    pub session_id: Option<String>,
}

/// One verse as presented to the caller
#[derive(Debug, Serialize, PartialEq)]
pub struct VerseOutput {
    pub surah: u32,
    pub ayah: u32,
    pub arabic: String,
    pub english: String,
    pub tafsir: String,
}

impl From<&Verse> for VerseOutput {
    fn from(verse: &Verse) -> Self {
        Self {
            surah: verse.surah,
            ayah: verse.ayah,
            arabic: verse.arabic.clone(),
            english: verse.english.clone(),
            tafsir: verse.tafsir.clone(),
        }
    }
}

/// Format verses for presentation
pub fn format_verse_output(verses: &[Verse]) -> Vec<VerseOutput> {
    verses.iter().map(VerseOutput::from).collect()
}

/// Informational (non-error) outcome
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_output_fields() {
        let verse = Verse {
            id: 7,
            surah: 2,
            ayah: 255,
            arabic: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ".to_string(),
            english: "God - there is no deity except Him".to_string(),
            tafsir: "Ayat al-Kursi".to_string(),
        };

        let output = VerseOutput::from(&verse);
        assert_eq!(output.surah, 2);
        assert_eq!(output.ayah, 255);
        assert_eq!(output.tafsir, "Ayat al-Kursi");

        // the internal id never leaves the process
        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["surah"], 2);
    }
}
