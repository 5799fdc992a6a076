//! Core types for the StudySync review client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty verdict for a graded card.
///
/// Also the tier the backend stores on the card itself; the server
/// overwrites it with the latest verdict after each review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Scope filter for fetching a session's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFilter {
    DueOnly,
    All,
}

impl CardFilter {
    /// Value for the backend's `due_only` query parameter.
    pub fn due_only(&self) -> bool {
        matches!(self, Self::DueOnly)
    }
}

/// One flashcard snapshot as returned by the backend.
///
/// Scheduling fields (`next_review`, counters) are opaque to the client;
/// only the server updates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub note_id: String,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub times_reviewed: u32,
    #[serde(default)]
    pub times_correct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    /// Whether the card is due at `now` (never-reviewed cards count as due).
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            Some(next) => next <= now,
            None => true,
        }
    }
}

/// Aggregate review statistics for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardStats {
    pub total_flashcards: u32,
    pub reviewed_at_least_once: u32,
    pub due_for_review: u32,
    pub total_reviews: u32,
    pub accuracy_percentage: f64,
}

/// Per-session count of grading decisions, bucketed by difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub total: u32,
}

impl SessionTally {
    /// Record one grading decision.
    pub fn record(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
        self.total += 1;
    }
}
