use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::corpus::Verse;

/// Navigation command recognized inside a follow-up query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    More,
}

impl Command {
    /// Parse a query for a navigation keyword
    ///
    /// Case-insensitive substring match, fixed priority
    /// next > previous > more; the first hit wins. A query like
    /// "tell me more about mercy" therefore pages instead of searching
    /// whenever prior results exist. That matches the upstream service
    /// and is kept as-is.
    pub fn parse(query: &str) -> Option<Self> {
        let query = query.to_lowercase();
        if query.contains("next") {
            Some(Self::Next)
        } else if query.contains("previous") {
            Some(Self::Previous)
        } else if query.contains("more") {
            Some(Self::More)
        } else {
            None
        }
    }
}

/// Outcome of a navigation transition
#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// Single verse ("next"/"previous")
    Verse(Verse),

    /// Window of verses ("more")
    Verses(Vec<Verse>),

    /// Cursor hit the end of the result set
    NoMoreVerses,

    /// "previous" issued while already on the first result
    AlreadyAtFirst,
}

/// Per-conversation browsing state
///
/// Holds the last filtered result sequence and a cursor into it. Only
/// `commit_search` replaces `last_results`; navigation moves the cursor
/// and commits the move only when it lands on a valid position.
#[derive(Debug, Default)]
pub struct Session {
    last_results: Vec<Verse>,
    cursor: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret `query` as a navigation command against the last results
    ///
    /// Returns `None` when there are no prior results or no keyword
    /// matches; the caller then treats the query as a new search.
    /// `window` is the maximum number of verses a "more" emits.
    pub fn navigate(&mut self, query: &str, window: usize) -> Option<NavOutcome> {
        if self.last_results.is_empty() {
            return None;
        }
        let command = Command::parse(query)?;

        let outcome = match command {
            Command::Next => {
                let advanced = self.cursor + 1;
                if advanced < self.last_results.len() {
                    self.cursor = advanced;
                    NavOutcome::Verse(self.last_results[advanced].clone())
                } else {
                    // out of range: cursor stays where it was
                    NavOutcome::NoMoreVerses
                }
            }
            Command::Previous => {
                if self.cursor == 0 {
                    // clamp at the first result
                    NavOutcome::AlreadyAtFirst
                } else {
                    self.cursor -= 1;
                    NavOutcome::Verse(self.last_results[self.cursor].clone())
                }
            }
            Command::More => {
                let start = (self.cursor + 1).min(self.last_results.len());
                let end = (self.cursor + 1 + window).min(self.last_results.len());
                if start < end {
                    let verses = self.last_results[start..end].to_vec();
                    self.cursor += verses.len();
                    NavOutcome::Verses(verses)
                } else {
                    NavOutcome::NoMoreVerses
                }
            }
        };

        Some(outcome)
    }

    /// Replace the result set after a successful new search
    ///
    /// Empty results leave the session untouched and return `false`;
    /// a failed search must not destroy what the user was browsing.
    pub fn commit_search(&mut self, results: Vec<Verse>) -> bool {
        if results.is_empty() {
            return false;
        }
        self.last_results = results;
        self.cursor = 0;
        true
    }

    pub fn last_results(&self) -> &[Verse] {
        &self.last_results
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Session registry keyed by session id
///
/// Each session sits behind its own `Mutex`, so transitions on one
/// session serialize while distinct sessions proceed independently.
/// Callers must not hold the session lock across the embedding call.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the session for `id`
    pub async fn session(&self, id: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Session::new()))),
        )
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(id: usize) -> Verse {
        Verse {
            id,
            surah: 1,
            ayah: id as u32 + 1,
            arabic: format!("آية {}", id),
            english: format!("verse {}", id),
            tafsir: format!("tafsir {}", id),
        }
    }

    fn verses(ids: &[usize]) -> Vec<Verse> {
        ids.iter().map(|&id| verse(id)).collect()
    }

    fn session_with(ids: &[usize]) -> Session {
        let mut session = Session::new();
        assert!(session.commit_search(verses(ids)));
        session
    }

    #[test]
    fn test_parse_command_priority_and_case() {
        assert_eq!(Command::parse("NEXT please"), Some(Command::Next));
        assert_eq!(Command::parse("go to the Previous one"), Some(Command::Previous));
        assert_eq!(Command::parse("show me more"), Some(Command::More));
        // "next" outranks "more" inside the same query
        assert_eq!(Command::parse("more next"), Some(Command::Next));
        // "previous" outranks "more"
        assert_eq!(Command::parse("more previous"), Some(Command::Previous));
        assert_eq!(Command::parse("verses about patience"), None);
    }

    #[test]
    fn test_substring_match_captures_real_queries() {
        // known quirk, preserved: a genuine question still pages
        assert_eq!(
            Command::parse("tell me more about mercy"),
            Some(Command::More)
        );
    }

    #[test]
    fn test_navigate_without_results_is_none() {
        let mut session = Session::new();
        assert_eq!(session.navigate("next", 5), None);
    }

    #[test]
    fn test_non_command_falls_through_to_search() {
        let mut session = session_with(&[0, 1]);
        assert_eq!(session.navigate("verses about charity", 5), None);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_next_advances_and_emits() {
        let mut session = session_with(&[2, 0, 1]);
        assert_eq!(session.navigate("next", 5), Some(NavOutcome::Verse(verse(0))));
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.navigate("next", 5), Some(NavOutcome::Verse(verse(1))));
        assert_eq!(session.cursor(), 2);
        // past the end: signal, cursor unchanged
        assert_eq!(session.navigate("next", 5), Some(NavOutcome::NoMoreVerses));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_previous_clamps_at_first() {
        let mut session = session_with(&[0, 1]);
        assert_eq!(session.navigate("previous", 5), Some(NavOutcome::AlreadyAtFirst));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_next_previous_symmetry() {
        let mut session = session_with(&[3, 4]);
        let original_cursor = session.cursor();
        assert_eq!(session.navigate("next", 5), Some(NavOutcome::Verse(verse(4))));
        assert_eq!(
            session.navigate("previous", 5),
            Some(NavOutcome::Verse(verse(3)))
        );
        assert_eq!(session.cursor(), original_cursor);
    }

    #[test]
    fn test_more_windowing_over_five_results() {
        let mut session = session_with(&[0, 1, 2, 3, 4]);

        // first "more" from cursor 0 emits indices 1..=4 and lands on 4
        let outcome = session.navigate("more", 5).unwrap();
        assert_eq!(outcome, NavOutcome::Verses(verses(&[1, 2, 3, 4])));
        assert_eq!(session.cursor(), 4);

        // second "more" has nothing left
        assert_eq!(session.navigate("more", 5), Some(NavOutcome::NoMoreVerses));
        assert_eq!(session.cursor(), 4);
    }

    #[test]
    fn test_more_window_is_clipped() {
        let mut session = session_with(&[0, 1, 2, 3, 4, 5, 6, 7]);
        // full window of 5
        assert_eq!(
            session.navigate("more", 5),
            Some(NavOutcome::Verses(verses(&[1, 2, 3, 4, 5])))
        );
        assert_eq!(session.cursor(), 5);
        // remaining two only
        assert_eq!(
            session.navigate("more", 5),
            Some(NavOutcome::Verses(verses(&[6, 7])))
        );
        assert_eq!(session.cursor(), 7);
    }

    #[test]
    fn test_more_respects_configured_window() {
        let mut session = session_with(&[0, 1, 2, 3]);
        assert_eq!(
            session.navigate("more", 2),
            Some(NavOutcome::Verses(verses(&[1, 2])))
        );
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_commit_search_resets_cursor() {
        let mut session = session_with(&[0, 1, 2]);
        session.navigate("next", 5);
        assert_eq!(session.cursor(), 1);

        assert!(session.commit_search(verses(&[5, 6])));
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.last_results(), verses(&[5, 6]).as_slice());
    }

    #[test]
    fn test_empty_search_preserves_state() {
        let mut session = session_with(&[0, 1, 2]);
        session.navigate("next", 5);
        let cursor_before = session.cursor();
        let results_before = session.last_results().to_vec();

        assert!(!session.commit_search(Vec::new()));
        assert_eq!(session.cursor(), cursor_before);
        assert_eq!(session.last_results(), results_before.as_slice());
    }

    #[test]
    fn test_committed_cursor_stays_in_bounds() {
        let mut session = session_with(&[0, 1]);
        for query in ["next", "next", "next", "previous", "previous", "previous"] {
            session.navigate(query, 5);
            assert!(session.cursor() < session.last_results().len());
        }
    }

    #[tokio::test]
    async fn test_session_manager_reuses_sessions() {
        let manager = SessionManager::new();
        let a = manager.session("alice").await;
        let b = manager.session("alice").await;
        assert!(Arc::ptr_eq(&a, &b));

        let c = manager.session("bob").await;
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(manager.len().await, 2);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let manager = SessionManager::new();
        {
            let session = manager.session("alice").await;
            session.lock().await.commit_search(verses(&[0, 1]));
        }
        let session = manager.session("bob").await;
        assert_eq!(session.lock().await.navigate("next", 5), None);
    }
}
