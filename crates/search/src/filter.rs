use crate::corpus::Verse;

/// Marker the corpus pipeline writes into `tafsir` when commentary
/// could not be fetched for a verse.
pub const UNAVAILABLE_MARKER: &str = "❌";

/// Whether a verse can be shown to the user
///
/// A verse is presentable iff its tafsir is non-empty after trimming and
/// does not carry the unavailable marker. Pure; applied to every search
/// candidate before it can enter a result sequence.
pub fn is_presentable(verse: &Verse) -> bool {
    let tafsir = verse.tafsir.trim();
    !tafsir.is_empty() && !tafsir.contains(UNAVAILABLE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse_with_tafsir(tafsir: &str) -> Verse {
        Verse {
            id: 0,
            surah: 1,
            ayah: 1,
            arabic: "بِسْمِ اللَّهِ".to_string(),
            english: "In the name of God".to_string(),
            tafsir: tafsir.to_string(),
        }
    }

    #[test]
    fn test_presentable_with_commentary() {
        assert!(is_presentable(&verse_with_tafsir("A meaningful exposition.")));
    }

    #[test]
    fn test_empty_tafsir_rejected() {
        assert!(!is_presentable(&verse_with_tafsir("")));
    }

    #[test]
    fn test_whitespace_only_tafsir_rejected() {
        assert!(!is_presentable(&verse_with_tafsir("   \n\t ")));
    }

    #[test]
    fn test_unavailable_marker_rejected() {
        assert!(!is_presentable(&verse_with_tafsir("❌ Tafsir not found")));
        assert!(!is_presentable(&verse_with_tafsir("prefix ❌ suffix")));
    }

    #[test]
    fn test_filter_is_pure() {
        let verse = verse_with_tafsir("Commentary");
        assert_eq!(is_presentable(&verse), is_presentable(&verse));
    }
}
