//! Core review library shared by StudySync clients.
//!
//! Provides:
//! - The review session state machine (queue, reveal, tally)
//! - Shared types (Flashcard, Difficulty, CardFilter, etc.)
//!
//! Scheduling lives server-side; this crate only sequences one study
//! session over read-only card snapshots.

pub mod error;
pub mod session;
pub mod types;

pub use error::{Result, SessionError};
pub use session::{GradeOutcome, NavigateTarget, ReviewSession, SessionPhase};
pub use types::{CardFilter, Difficulty, Flashcard, FlashcardStats, SessionTally};
