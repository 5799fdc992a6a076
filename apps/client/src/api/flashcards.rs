//! Flashcard endpoints: card lists, grading, aggregate stats.

use review_core::{CardFilter, Difficulty, Flashcard, FlashcardStats};
use serde::Serialize;

use super::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct ReviewRequest {
    difficulty: Difficulty,
}

impl ApiClient {
    /// Fetch the user's flashcards, optionally scoped to due cards
    /// and/or one course. Order is decided by the backend and must be
    /// preserved for the session queue.
    pub async fn list_flashcards(
        &self,
        filter: CardFilter,
        course_id: Option<&str>,
    ) -> Result<Vec<Flashcard>, ApiError> {
        let mut request = self
            .authed(|c, url| c.get(url), "/api/flashcards")?
            .query(&[("due_only", filter.due_only())]);
        if let Some(course_id) = course_id {
            request = request.query(&[("course_id", course_id)]);
        }
        self.send_json(request).await
    }

    /// Fetch the flashcards generated from one note.
    pub async fn note_flashcards(&self, note_id: &str) -> Result<Vec<Flashcard>, ApiError> {
        let path = format!("/api/flashcards/note/{note_id}");
        let request = self.authed(|c, url| c.get(url), &path)?;
        self.send_json(request).await
    }

    /// Submit a grading verdict for one card. The backend reschedules
    /// the card and returns the updated snapshot (new counters, new
    /// `next_review`).
    pub async fn review_flashcard(
        &self,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<Flashcard, ApiError> {
        let path = format!("/api/flashcards/{card_id}/review");
        let request = self
            .authed(|c, url| c.post(url), &path)?
            .json(&ReviewRequest { difficulty });
        self.send_json(request).await
    }

    /// Fetch aggregate review statistics.
    pub async fn flashcard_stats(&self) -> Result<FlashcardStats, ApiError> {
        let request = self.authed(|c, url| c.get(url), "/api/flashcards/stats")?;
        self.send_json(request).await
    }
}
