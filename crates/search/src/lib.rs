//! AyahSearch core: corpus, vector index, filter, and session machine
//!
//! Everything here is synchronous and deterministic apart from the
//! engine's calls into the embedding client.

pub mod corpus;
pub mod engine;
pub mod filter;
pub mod index;
pub mod session;

pub use corpus::{CorpusStore, Verse};
pub use engine::{EngineStats, SearchEngine};
pub use filter::is_presentable;
pub use index::{SearchHit, VectorIndex};
pub use session::{Command, NavOutcome, Session, SessionManager};
