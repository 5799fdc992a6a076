//! Review controller: wires the session state machine to the backend.
//!
//! The controller owns a [`ReviewSession`] and a [`StudyBackend`]
//! handle. State only changes in response to discrete user actions or
//! the completion of the single outstanding grading request; the
//! in-flight flag rejects a second grade before the first resolves so
//! tallies cannot double-count.

use review_core::{
    CardFilter, Difficulty, Flashcard, FlashcardStats, GradeOutcome, NavigateTarget,
    ReviewSession, SessionError,
};
use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::error::ClientError;

/// Backend seam for the review flow: card source, grading sink, and
/// stats source. Implemented by [`ApiClient`]; tests use an in-memory
/// fake.
#[allow(async_fn_in_trait)]
pub trait StudyBackend {
    /// Fetch the ordered card list for a session.
    async fn fetch_cards(&self, filter: CardFilter) -> Result<Vec<Flashcard>, ApiError>;

    /// Submit one grading verdict; returns the rescheduled card.
    async fn submit_review(
        &self,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<Flashcard, ApiError>;

    /// Fetch aggregate review statistics.
    async fn fetch_stats(&self) -> Result<FlashcardStats, ApiError>;
}

impl StudyBackend for ApiClient {
    async fn fetch_cards(&self, filter: CardFilter) -> Result<Vec<Flashcard>, ApiError> {
        self.list_flashcards(filter, None).await
    }

    async fn submit_review(
        &self,
        card_id: &str,
        difficulty: Difficulty,
    ) -> Result<Flashcard, ApiError> {
        self.review_flashcard(card_id, difficulty).await
    }

    async fn fetch_stats(&self) -> Result<FlashcardStats, ApiError> {
        self.flashcard_stats().await
    }
}

/// Result of a successful grade: what the session did, plus the
/// rescheduled card as returned by the backend.
#[derive(Debug, Clone)]
pub struct GradeReport {
    pub outcome: GradeOutcome,
    pub updated: Flashcard,
}

/// Drives one study session against a backend.
#[derive(Debug)]
pub struct ReviewController<B> {
    backend: B,
    session: ReviewSession,
    grade_in_flight: bool,
}

impl<B: StudyBackend> ReviewController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: ReviewSession::new(),
            grade_in_flight: false,
        }
    }

    /// Read-only view of the session for rendering.
    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    /// Start a session under `filter`. On fetch failure the previous
    /// session state is left untouched and the error is surfaced.
    pub async fn start(&mut self, filter: CardFilter) -> Result<(), ClientError> {
        let cards = self.backend.fetch_cards(filter).await?;
        debug!(count = cards.len(), "starting review session");
        self.session.start(cards);
        self.grade_in_flight = false;
        Ok(())
    }

    /// Show the answer face of the current card. No backend call.
    pub fn reveal(&mut self) -> Result<(), ClientError> {
        self.session.reveal().map_err(Into::into)
    }

    /// Move the cursor backward. No backend call, no tally effect.
    pub fn navigate(&mut self, target: NavigateTarget) -> Result<(), ClientError> {
        self.session.navigate(target).map_err(Into::into)
    }

    /// Grade the current card.
    ///
    /// The verdict goes to the backend first; only once accepted does
    /// the session count it and advance. On failure the cursor, tally,
    /// and reveal state are all unchanged and the caller may retry.
    pub async fn grade(&mut self, difficulty: Difficulty) -> Result<GradeReport, ClientError> {
        if self.grade_in_flight {
            return Err(ClientError::GradeInFlight);
        }
        let card_id = self
            .session
            .current()
            .ok_or(SessionError::NotActive)?
            .id
            .clone();
        if !self.session.is_revealed() {
            return Err(SessionError::AnswerHidden.into());
        }

        self.grade_in_flight = true;
        let result = self.backend.submit_review(&card_id, difficulty).await;
        self.grade_in_flight = false;

        let updated = result?;
        let outcome = self.session.record_grade(difficulty)?;
        debug!(card_id = %card_id, difficulty = difficulty.as_str(), ?outcome, "graded card");
        Ok(GradeReport { outcome, updated })
    }

    /// Fetch aggregate stats for the summary screens.
    pub async fn stats(&self) -> Result<FlashcardStats, ClientError> {
        self.backend.fetch_stats().await.map_err(Into::into)
    }
}
